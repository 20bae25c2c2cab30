//! [`Graph`] implementation for the obstacle [`Grid`].

use std::f64::consts::SQRT_2;

use pathfinder_core::{Connectivity, Grid, Node};

use crate::neighbors;
use crate::traits::{Graph, GridGraph};

impl Graph for Grid {
    fn start(&self) -> Option<Node> {
        Grid::start(self)
    }

    fn end(&self) -> Option<Node> {
        Grid::end(self)
    }

    fn neighbours(&self, node: Node, buf: &mut Vec<Node>) {
        let open = |n: Node| !self.is_blocked(n);
        match self.connectivity() {
            Connectivity::Four => neighbors::push_cardinal(node, buf, open),
            Connectivity::Eight => neighbors::push_all(node, buf, open),
        }
    }

    #[inline]
    fn cost(&self, from: Node, to: Node) -> f64 {
        if from.x != to.x && from.y != to.y {
            SQRT_2
        } else {
            1.0
        }
    }

    #[inline]
    fn contains(&self, node: Node) -> bool {
        Grid::in_bounds(self, node)
    }
}

impl GridGraph for Grid {
    #[inline]
    fn in_bounds(&self, node: Node) -> bool {
        Grid::in_bounds(self, node)
    }

    #[inline]
    fn is_blocked(&self, node: Node) -> bool {
        Grid::is_blocked(self, node)
    }

    #[inline]
    fn diagonal_moves(&self) -> bool {
        self.connectivity() == Connectivity::Eight
    }
}
