//! The jump primitive: scan straight or diagonally to the next jump point.

use pathfinder_core::{Direction, Node};

use crate::pruning::NeighbourPruningRules;
use crate::traits::GridGraph;

/// Scans from a node along a fixed direction until it finds a jump point.
///
/// Scans are loops rather than recursion. A diagonal scan probes
/// horizontally and vertically at every step, and those probes are plain
/// straight scans, so the nesting depth is at most one. Every step moves one
/// cell further along a line, so on a finite grid each scan ends.
pub struct Jump<'g, G: ?Sized> {
    graph: &'g G,
    prune: NeighbourPruningRules<'g, G>,
}

impl<'g, G: GridGraph + ?Sized> Jump<'g, G> {
    pub fn new(graph: &'g G, prune: NeighbourPruningRules<'g, G>) -> Self {
        Self { graph, prune }
    }

    /// Next jump point from `from` along `dir`, or `None` if the scan leaves
    /// the grid or hits an obstacle first.
    ///
    /// A jump point is `goal` itself, a node with a forced neighbour, or (for
    /// diagonal scans) a node from which a straight probe along either
    /// component finds a jump point.
    pub fn jump(&self, from: Node, dir: Direction, goal: Node) -> Option<Node> {
        if dir.is_zero() {
            return None;
        }
        if !dir.is_diagonal() {
            return self.scan_straight(from, dir, goal);
        }

        let (h, v) = (dir.horizontal(), dir.vertical());
        let mut n = from;
        loop {
            n = n.step(dir);
            if !self.graph.is_open(n) {
                return None;
            }
            if n == goal || self.prune.has_forced(n, dir) {
                return Some(n);
            }
            if self.scan_straight(n, h, goal).is_some() || self.scan_straight(n, v, goal).is_some()
            {
                return Some(n);
            }
        }
    }

    fn scan_straight(&self, from: Node, dir: Direction, goal: Node) -> Option<Node> {
        let mut n = from;
        loop {
            n = n.step(dir);
            if !self.graph.is_open(n) {
                return None;
            }
            if n == goal || self.prune.has_forced(n, dir) {
                return Some(n);
            }
        }
    }
}
