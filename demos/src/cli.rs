use std::path::PathBuf;

use clap::Parser;
use pathfinder_core::Connectivity;

use crate::prefs::{AlgorithmChoice, Preferences};

/// Find the cheapest path between the `S` and `E` cells of an ASCII map.
///
/// Map cells: `.` open, `#` wall, `S` start, `E` end. Flags override values
/// from the preferences file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the ASCII map.
    pub map: PathBuf,

    /// Preferences file (TOML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Algorithm(s) to run.
    #[arg(short, long, value_enum)]
    pub algorithm: Option<AlgorithmChoice>,

    /// Only allow orthogonal moves.
    #[arg(long, default_value_t = false)]
    pub four: bool,

    /// Charge 1 for every step (Dijkstra only).
    #[arg(long, default_value_t = false)]
    pub unit_cost: bool,

    /// Do not print the map.
    #[arg(long, default_value_t = false)]
    pub no_path: bool,

    /// Log search details.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Overlay the flags that were given onto `prefs`.
    pub fn apply(&self, prefs: &mut Preferences) {
        if let Some(a) = self.algorithm {
            prefs.algorithm = a;
        }
        if self.four {
            prefs.connectivity = Connectivity::Four;
        }
        if self.unit_cost {
            prefs.unit_cost = true;
        }
        if self.no_path {
            prefs.show_path = false;
        }
    }
}
