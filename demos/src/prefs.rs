//! User preferences, read from an optional TOML file.
//!
//! ```toml
//! algorithm = "both"      # dijkstra | jps | both
//! connectivity = "eight"  # four | eight
//! unit_cost = false
//! show_path = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use pathfinder_core::Connectivity;
use pathfinder_search::Algorithm;
use serde::{Deserialize, Serialize};

/// Which algorithms to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmChoice {
    Dijkstra,
    Jps,
    #[default]
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Dijkstra => &[Algorithm::Dijkstra],
            AlgorithmChoice::Jps => &[Algorithm::JumpPointSearch],
            AlgorithmChoice::Both => &Algorithm::ALL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    pub algorithm: AlgorithmChoice,
    pub connectivity: Connectivity,
    /// Count steps instead of summing 1 / √2 edge costs (Dijkstra only).
    pub unit_cost: bool,
    /// Print the map with the path drawn over it.
    pub show_path: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmChoice::default(),
            connectivity: Connectivity::Eight,
            unit_cost: false,
            show_path: true,
        }
    }
}

impl Preferences {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read preferences {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid preferences {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Preferences::parse("").unwrap(), Preferences::default());
    }

    #[test]
    fn parses_all_fields() {
        let p = Preferences::parse(
            r#"
algorithm = "jps"
connectivity = "four"
unit_cost = true
show_path = false
"#,
        )
        .unwrap();
        assert_eq!(p.algorithm, AlgorithmChoice::Jps);
        assert_eq!(p.connectivity, Connectivity::Four);
        assert!(p.unit_cost);
        assert!(!p.show_path);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Preferences::parse("colour = \"red\"").is_err());
        assert!(Preferences::parse("algorithm = \"astar\"").is_err());
    }

    #[test]
    fn choice_expands() {
        assert_eq!(AlgorithmChoice::Both.algorithms().len(), 2);
        assert_eq!(
            AlgorithmChoice::Jps.algorithms(),
            &[Algorithm::JumpPointSearch]
        );
    }
}
