//! Shortest-path search on grids.
//!
//! This crate implements two single-pair searches behind one
//! [`Pathfinder`] interface:
//!
//! - **Dijkstra** over any non-negative [`Graph`] ([`Dijkstra`])
//! - **Jump Point Search** over 8-connected uniform-cost grids
//!   ([`JumpPointSearch`]), built from [`NeighbourPruningRules`] and [`Jump`]
//!
//! Every run builds a fresh [`SearchState`] (distances, predecessors, settled
//! set) and reports either the path cost or [`NO_PATH`]. No search ever
//! returns an error.
//!
//! ```
//! use pathfinder_core::Grid;
//! use pathfinder_search::{Algorithm, NO_PATH};
//!
//! let grid = Grid::from_ascii("S.#\n..#\n..E").unwrap();
//! for algorithm in Algorithm::ALL {
//!     let mut pf = algorithm.build(&grid);
//!     let cost = pf.run();
//!     assert_ne!(cost, NO_PATH);
//!     assert_eq!(pf.path().first(), grid.start().as_ref());
//! }
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | Dijkstra |
//! | [`GridGraph`] : [`Graph`] | Jump Point Search |

mod dijkstra;
mod distance;
mod grid;
mod jps;
mod jump;
mod neighbors;
mod observer;
mod pathfinder;
mod pruning;
mod state;
mod traits;

pub use dijkstra::Dijkstra;
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use jps::JumpPointSearch;
pub use jump::Jump;
pub use neighbors::{push_all, push_cardinal};
pub use observer::{NoopObserver, SearchObserver, SettleLimit};
pub use pathfinder::{Algorithm, NO_PATH, ParseAlgorithmError, Pathfinder, SearchSummary};
pub use pruning::NeighbourPruningRules;
pub use state::{PriorityNode, SearchState};
pub use traits::{Graph, GridGraph, UnitCost};
