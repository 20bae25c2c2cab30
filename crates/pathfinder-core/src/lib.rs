//! **pathfinder-core**: leaf types for grid pathfinding.
//!
//! This crate provides the data the search algorithms operate on: grid
//! coordinates ([`Node`]), unit moves ([`Direction`]), rectangles
//! ([`Range`]) and a static obstacle map ([`Grid`]) that can be parsed from
//! ASCII art.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Node, Range, RangeIter};
pub use grid::{Connectivity, Grid, GridError};
