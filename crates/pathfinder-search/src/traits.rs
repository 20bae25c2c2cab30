use pathfinder_core::Node;

/// Read-only topology consumed by every pathfinder.
///
/// The graph must not change while a search is running. Edge costs must be
/// non-negative; this is a precondition and is not checked.
pub trait Graph {
    /// Node the search starts from, if the graph designates one.
    fn start(&self) -> Option<Node>;

    /// Node the search is looking for, if the graph designates one.
    fn end(&self) -> Option<Node>;

    /// Append the nodes directly reachable from `node` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbours(&self, node: Node, buf: &mut Vec<Node>);

    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Node, to: Node) -> f64;

    /// Whether `node` belongs to the graph. Unbounded graphs keep the
    /// default.
    #[inline]
    fn contains(&self, _node: Node) -> bool {
        true
    }

    /// Start and end, if both are designated and belong to the graph.
    fn endpoints(&self) -> Option<(Node, Node)> {
        let start = self.start().filter(|&n| self.contains(n))?;
        let end = self.end().filter(|&n| self.contains(n))?;
        Some((start, end))
    }
}

/// A [`Graph`] laid out on a bounded grid, as needed by jump-point search.
///
/// Jump-point search assumes 8-connected moves costing 1 orthogonally and
/// √2 diagonally, with a diagonal move allowed whenever its target is open.
pub trait GridGraph: Graph {
    /// Whether `node` lies on the grid. The grid must be finite.
    fn in_bounds(&self, node: Node) -> bool;

    /// Whether `node` is an obstacle.
    fn is_blocked(&self, node: Node) -> bool;

    /// Whether the graph's own neighbours include diagonal moves.
    /// Jump-point search moves diagonally either way.
    #[inline]
    fn diagonal_moves(&self) -> bool {
        true
    }

    /// Whether `node` is on the grid and passable.
    #[inline]
    fn is_open(&self, node: Node) -> bool {
        self.in_bounds(node) && !self.is_blocked(node)
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    fn start(&self) -> Option<Node> {
        (**self).start()
    }

    fn end(&self) -> Option<Node> {
        (**self).end()
    }

    fn neighbours(&self, node: Node, buf: &mut Vec<Node>) {
        (**self).neighbours(node, buf)
    }

    fn cost(&self, from: Node, to: Node) -> f64 {
        (**self).cost(from, to)
    }

    fn contains(&self, node: Node) -> bool {
        (**self).contains(node)
    }
}

impl<G: GridGraph + ?Sized> GridGraph for &G {
    fn in_bounds(&self, node: Node) -> bool {
        (**self).in_bounds(node)
    }

    fn is_blocked(&self, node: Node) -> bool {
        (**self).is_blocked(node)
    }

    fn diagonal_moves(&self) -> bool {
        (**self).diagonal_moves()
    }
}

/// Wraps a graph so every edge costs exactly 1.
///
/// This is the unit-cost flavour of Dijkstra: run [`Dijkstra`] over
/// `UnitCost(&graph)` to count steps instead of summing weights.
///
/// [`Dijkstra`]: crate::Dijkstra
#[derive(Debug, Clone, Copy)]
pub struct UnitCost<G>(pub G);

impl<G: Graph> Graph for UnitCost<G> {
    fn start(&self) -> Option<Node> {
        self.0.start()
    }

    fn end(&self) -> Option<Node> {
        self.0.end()
    }

    fn neighbours(&self, node: Node, buf: &mut Vec<Node>) {
        self.0.neighbours(node, buf)
    }

    #[inline]
    fn cost(&self, _from: Node, _to: Node) -> f64 {
        1.0
    }

    fn contains(&self, node: Node) -> bool {
        self.0.contains(node)
    }
}
