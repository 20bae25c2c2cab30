//! Per-run search state shared by every pathfinder.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use pathfinder_core::Node;

// ---------------------------------------------------------------------------
// PriorityNode
// ---------------------------------------------------------------------------

/// A frontier entry: a node and the priority it was pushed with.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the *smallest* priority
/// first. Equal priorities fall back to node order, which only makes pops
/// reproducible; any tie order is correct.
#[derive(Clone, Copy, Debug)]
pub struct PriorityNode {
    pub node: Node,
    pub priority: f64,
}

impl PriorityNode {
    #[inline]
    pub fn new(node: Node, priority: f64) -> Self {
        Self { node, priority }
    }
}

impl Ord for PriorityNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for PriorityNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PriorityNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityNode {}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Distance, predecessor and settled maps for one run.
///
/// A fresh `SearchState` is built at the top of every run, so nothing leaks
/// from one run into the next. Unset distances read as `+∞` and unset
/// predecessors as `None`. Once a node is settled its distance is final.
#[derive(Debug, Clone)]
pub struct SearchState {
    root: Node,
    dist: HashMap<Node, f64>,
    pred: HashMap<Node, Node>,
    visited: HashSet<Node>,
    path: Vec<Node>,
    pushed: usize,
    cancelled: bool,
}

impl SearchState {
    /// State for a run rooted at `start`, with `dist[start] = 0`.
    pub(crate) fn new(start: Node) -> Self {
        let mut dist = HashMap::new();
        dist.insert(start, 0.0);
        Self {
            root: start,
            dist,
            pred: HashMap::new(),
            visited: HashSet::new(),
            path: Vec::new(),
            pushed: 0,
            cancelled: false,
        }
    }

    /// The node this run started from.
    #[inline]
    pub fn root(&self) -> Node {
        self.root
    }

    /// Best known distance from the root, `+∞` if never reached.
    #[inline]
    pub fn dist(&self, node: Node) -> f64 {
        self.dist.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    /// Predecessor of `node` in the shortest-path tree.
    #[inline]
    pub fn pred(&self, node: Node) -> Option<Node> {
        self.pred.get(&node).copied()
    }

    /// Whether `node` has been settled.
    #[inline]
    pub fn is_visited(&self, node: Node) -> bool {
        self.visited.contains(&node)
    }

    /// Number of settled nodes.
    #[inline]
    pub fn settled(&self) -> usize {
        self.visited.len()
    }

    /// Number of frontier pushes, stale duplicates included.
    #[inline]
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Number of nodes that received a finite distance.
    #[inline]
    pub fn reached(&self) -> usize {
        self.dist.len()
    }

    /// Whether an observer stopped the run early.
    #[inline]
    pub fn cancelled(&self) -> bool {
        self.cancelled
    }

    /// Settled nodes, in no particular order.
    pub fn settled_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.visited.iter().copied()
    }

    /// The reconstructed path `[start, ..., end]`, empty unless the run
    /// found one.
    #[inline]
    pub fn path(&self) -> &[Node] {
        &self.path
    }

    /// Lower `dist[to]` to `alt` through `from` if that is an improvement.
    ///
    /// Settled nodes are never touched. Returns whether `to` changed.
    pub(crate) fn relax(&mut self, from: Node, to: Node, alt: f64) -> bool {
        if self.is_visited(to) || alt >= self.dist(to) {
            return false;
        }
        self.dist.insert(to, alt);
        self.pred.insert(to, from);
        true
    }

    /// Mark `node` settled. Returns `false` if it already was, i.e. the
    /// popped entry is stale.
    #[inline]
    pub(crate) fn settle(&mut self, node: Node) -> bool {
        self.visited.insert(node)
    }

    #[inline]
    pub(crate) fn count_push(&mut self) {
        self.pushed += 1;
    }

    #[inline]
    pub(crate) fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Close the run: return the cost to `end` or `None`, rebuilding the
    /// path when there is one.
    pub(crate) fn finish(&mut self, end: Node) -> Option<f64> {
        let d = self.dist(end);
        if self.cancelled || d.is_infinite() {
            self.path.clear();
            return None;
        }
        self.update_path(end);
        Some(d)
    }

    /// Replace the reconstructed path, e.g. with a step-by-step expansion.
    pub(crate) fn set_path(&mut self, path: Vec<Node>) {
        self.path = path;
    }

    /// Walk `pred` back from `end` to the root and store the reversed walk.
    fn update_path(&mut self, end: Node) {
        self.path.clear();
        let mut cur = end;
        self.path.push(cur);
        while cur != self.root {
            match self.pred(cur) {
                Some(p) => {
                    cur = p;
                    self.path.push(cur);
                }
                None => break,
            }
        }
        self.path.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_smallest_priority() {
        let mut heap = BinaryHeap::new();
        heap.push(PriorityNode::new(Node::new(0, 0), 3.5));
        heap.push(PriorityNode::new(Node::new(1, 0), 0.5));
        heap.push(PriorityNode::new(Node::new(2, 0), 2.0));
        let order: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|p| p.priority)).collect();
        assert_eq!(order, vec![0.5, 2.0, 3.5]);
    }

    #[test]
    fn fresh_state_has_only_root() {
        let s = SearchState::new(Node::new(2, 3));
        assert_eq!(s.dist(Node::new(2, 3)), 0.0);
        assert!(s.dist(Node::new(0, 0)).is_infinite());
        assert_eq!(s.pred(Node::new(2, 3)), None);
        assert_eq!(s.settled(), 0);
        assert!(s.path().is_empty());
    }

    #[test]
    fn relax_only_improves() {
        let root = Node::new(0, 0);
        let v = Node::new(1, 0);
        let mut s = SearchState::new(root);
        assert!(s.relax(root, v, 5.0));
        assert!(!s.relax(root, v, 5.0));
        assert!(!s.relax(root, v, 6.0));
        assert!(s.relax(Node::new(0, 1), v, 4.0));
        assert_eq!(s.dist(v), 4.0);
        assert_eq!(s.pred(v), Some(Node::new(0, 1)));
    }

    #[test]
    fn settled_nodes_are_frozen() {
        let root = Node::new(0, 0);
        let v = Node::new(1, 0);
        let mut s = SearchState::new(root);
        s.relax(root, v, 2.0);
        assert!(s.settle(v));
        assert!(!s.settle(v));
        assert!(!s.relax(root, v, 1.0));
        assert_eq!(s.dist(v), 2.0);
    }

    #[test]
    fn finish_rebuilds_path() {
        let a = Node::new(0, 0);
        let b = Node::new(1, 0);
        let c = Node::new(2, 1);
        let mut s = SearchState::new(a);
        s.relax(a, b, 1.0);
        s.relax(b, c, 2.0);
        assert_eq!(s.finish(c), Some(2.0));
        assert_eq!(s.path(), &[a, b, c]);
    }

    #[test]
    fn finish_unreachable_leaves_empty_path() {
        let mut s = SearchState::new(Node::new(0, 0));
        assert_eq!(s.finish(Node::new(4, 4)), None);
        assert!(s.path().is_empty());
    }

    #[test]
    fn finish_at_root() {
        let a = Node::new(1, 1);
        let mut s = SearchState::new(a);
        assert_eq!(s.finish(a), Some(0.0));
        assert_eq!(s.path(), &[a]);
    }

    #[test]
    fn cancelled_run_has_no_result() {
        let a = Node::new(0, 0);
        let mut s = SearchState::new(a);
        s.cancel();
        assert_eq!(s.finish(a), None);
        assert!(s.cancelled());
    }
}
