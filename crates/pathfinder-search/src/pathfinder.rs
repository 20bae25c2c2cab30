use std::fmt;
use std::str::FromStr;

use pathfinder_core::Node;
use thiserror::Error;

use crate::dijkstra::Dijkstra;
use crate::jps::JumpPointSearch;
use crate::observer::{NoopObserver, SearchObserver};
use crate::state::SearchState;
use crate::traits::GridGraph;

/// Cost reported by [`Pathfinder::run`] when no path exists.
pub const NO_PATH: f64 = -1.0;

/// Common interface of every search algorithm.
///
/// A pathfinder is bound to one graph. Each call to [`run`](Self::run)
/// discards the previous run's state and searches from scratch; a
/// pathfinder must not be shared between threads mid-run.
pub trait Pathfinder {
    /// Which algorithm this is.
    fn algorithm(&self) -> Algorithm;

    /// Search from the graph's start to its end, reporting progress to
    /// `observer`. Returns the path cost or [`NO_PATH`].
    fn run_observed(&mut self, observer: &mut dyn SearchObserver) -> f64;

    /// State left by the last run, `None` before the first run or when the
    /// graph had no start or end.
    fn state(&self) -> Option<&SearchState>;

    /// Search from the graph's start to its end. Returns the path cost or
    /// [`NO_PATH`].
    fn run(&mut self) -> f64 {
        self.run_observed(&mut NoopObserver)
    }

    /// Path found by the last run, `[start, ..., end]`. Empty if the last
    /// run found no path or no run has happened.
    fn path(&self) -> &[Node] {
        self.state().map(SearchState::path).unwrap_or(&[])
    }

    /// Summary of the last run.
    fn summary(&self) -> SearchSummary {
        let algorithm = self.algorithm();
        match self.state() {
            Some(s) => SearchSummary {
                algorithm,
                cost: s.path().last().map(|&end| s.dist(end)),
                path_len: s.path().len(),
                settled: s.settled(),
                pushed: s.pushed(),
            },
            None => SearchSummary {
                algorithm,
                cost: None,
                path_len: 0,
                settled: 0,
                pushed: 0,
            },
        }
    }
}

/// Outcome and effort of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSummary {
    pub algorithm: Algorithm,
    pub cost: Option<f64>,
    pub path_len: usize,
    pub settled: usize,
    pub pushed: usize,
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cost {
            Some(c) => write!(f, "{}: cost {c:.3}", self.algorithm)?,
            None => write!(f, "{}: no path", self.algorithm)?,
        }
        write!(
            f,
            ", {} path nodes, {} settled, {} pushed",
            self.path_len, self.settled, self.pushed
        )
    }
}

/// Runtime choice of search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(alias = "jps"))]
    JumpPointSearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::JumpPointSearch];

    /// Build a pathfinder of this kind over `graph`.
    ///
    /// Jump-point search assumes 8-connected moves; see
    /// [`JumpPointSearch::new`].
    pub fn build<'g, G: GridGraph + 'g>(self, graph: &'g G) -> Box<dyn Pathfinder + 'g> {
        match self {
            Algorithm::Dijkstra => Box::new(Dijkstra::new(graph)),
            Algorithm::JumpPointSearch => Box::new(JumpPointSearch::new(graph)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::JumpPointSearch => "jps",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected dijkstra or jps)")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "jps" | "jump-point-search" | "jumppointsearch" => Ok(Algorithm::JumpPointSearch),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
