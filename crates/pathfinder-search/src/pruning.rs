//! Symmetry-breaking neighbour rules for jump-point search.
//!
//! Moving from a parent `p` to a node `x` fixes a direction of travel. Only
//! the neighbours of `x` that cannot be reached at least as cheaply through
//! `p` without visiting `x` need to be considered:
//!
//! ```text
//!  straight (east)        diagonal (south-east)
//!
//!   . # F                  p . .
//!   p x n                  . x n
//!   . . .                  # n n
//!                          F
//! ```
//!
//! `n` marks natural neighbours and `F` a forced neighbour exposed by the
//! obstacle `#`.

use pathfinder_core::{Direction, Node};

use crate::traits::GridGraph;

/// Neighbour pruning for 8-connected grids where a diagonal move only needs
/// its target cell to be open.
pub struct NeighbourPruningRules<'g, G: ?Sized> {
    graph: &'g G,
}

// Manual impls: a derive would demand `G: Clone`.
impl<G: ?Sized> Clone for NeighbourPruningRules<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for NeighbourPruningRules<'_, G> {}

impl<'g, G: GridGraph + ?Sized> NeighbourPruningRules<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Append the pruned neighbour set of `node` to `out`.
    ///
    /// `parent` is the node `node` was reached from; `None` (the start node)
    /// yields every open neighbour. Blocked and off-grid cells are never
    /// returned.
    pub fn pruned_neighbours(&self, parent: Option<Node>, node: Node, out: &mut Vec<Node>) {
        let Some(parent) = parent else {
            for d in Direction::ALL {
                self.push_open(node.step(d), out);
            }
            return;
        };

        let dir = Direction::between(parent, node);
        if dir.is_zero() {
            return;
        }

        if dir.is_diagonal() {
            self.push_open(node.step(dir.vertical()), out);
            self.push_open(node.step(dir.horizontal()), out);
            self.push_open(node.step(dir), out);
        } else {
            self.push_open(node.step(dir), out);
        }
        for f in self.forced_directions(node, dir).into_iter().flatten() {
            out.push(node.step(f));
        }
    }

    /// Whether travelling through `node` in direction `dir` exposes a forced
    /// neighbour.
    pub fn has_forced(&self, node: Node, dir: Direction) -> bool {
        let [a, b] = self.forced_directions(node, dir);
        a.is_some() || b.is_some()
    }

    /// The (at most two) forced-neighbour directions of `node` when entered
    /// travelling along `dir`.
    fn forced_directions(&self, node: Node, dir: Direction) -> [Option<Direction>; 2] {
        let g = self.graph;
        let forced = |wall: Direction, target: Direction| {
            (!g.is_open(node.step(wall)) && g.is_open(node.step(target))).then_some(target)
        };

        if dir.is_diagonal() {
            let (dx, dy) = (dir.dx, dir.dy);
            [
                forced(Direction::new(-dx, 0), Direction::new(-dx, dy)),
                forced(Direction::new(0, -dy), Direction::new(dx, -dy)),
            ]
        } else if dir.dx != 0 {
            let dx = dir.dx;
            [
                forced(Direction::S, Direction::new(dx, 1)),
                forced(Direction::N, Direction::new(dx, -1)),
            ]
        } else {
            let dy = dir.dy;
            [
                forced(Direction::E, Direction::new(1, dy)),
                forced(Direction::W, Direction::new(-1, dy)),
            ]
        }
    }

    #[inline]
    fn push_open(&self, n: Node, out: &mut Vec<Node>) {
        if self.graph.is_open(n) {
            out.push(n);
        }
    }
}
