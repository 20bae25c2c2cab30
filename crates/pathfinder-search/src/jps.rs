//! Jump Point Search (JPS) on 8-connected uniform-cost grids.
//!
//! JPS is A* restricted to *jump points*: instead of pushing every adjacent
//! cell, each expansion keeps only the pruned neighbour directions and scans
//! along each of them with [`Jump`] until something interesting turns up.
//! Straight runs of open cells are crossed without touching the frontier.
//!
//! Reference: Harabor, D. and Grastien, A. (2011). "Online Graph Pruning for
//! Pathfinding on Grid Maps", AAAI.

use std::collections::BinaryHeap;

use pathfinder_core::Node;

use crate::distance::octile;
use crate::jump::Jump;
use crate::observer::SearchObserver;
use crate::pathfinder::{Algorithm, NO_PATH, Pathfinder};
use crate::pruning::NeighbourPruningRules;
use crate::state::{PriorityNode, SearchState};
use crate::traits::GridGraph;

/// Best-first search over jump points with the octile heuristic.
///
/// Edge costs come from the octile distance between jump points, not from
/// [`Graph::cost`](crate::Graph::cost): the grid is assumed to charge 1 per
/// orthogonal and √2 per diagonal step.
pub struct JumpPointSearch<'g, G: ?Sized> {
    graph: &'g G,
    prune: NeighbourPruningRules<'g, G>,
    jump: Jump<'g, G>,
    state: Option<SearchState>,
    jump_points: Vec<Node>,
}

impl<'g, G: GridGraph + ?Sized> JumpPointSearch<'g, G> {
    /// Search over `graph`.
    ///
    /// The search always moves 8-ways. On a graph whose
    /// [`diagonal_moves`](GridGraph::diagonal_moves) is `false` the returned
    /// path can contain diagonal steps that are not edges of the graph; use
    /// [`Dijkstra`](crate::Dijkstra) there.
    pub fn new(graph: &'g G) -> Self {
        let prune = NeighbourPruningRules::new(graph);
        Self {
            graph,
            prune,
            jump: Jump::new(graph, prune),
            state: None,
            jump_points: Vec::new(),
        }
    }

    /// The jump points of the last path found, `[start, ..., end]`.
    ///
    /// [`Pathfinder::path`] expands these into single steps.
    pub fn jump_points(&self) -> &[Node] {
        &self.jump_points
    }

    #[inline]
    fn heuristic(n: Node, goal: Node) -> f64 {
        octile(n, goal)
    }
}

impl<G: GridGraph + ?Sized> Pathfinder for JumpPointSearch<'_, G> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::JumpPointSearch
    }

    fn state(&self) -> Option<&SearchState> {
        self.state.as_ref()
    }

    fn run_observed(&mut self, observer: &mut dyn SearchObserver) -> f64 {
        self.state = None;
        self.jump_points.clear();
        let Some((start, end)) = self.graph.endpoints() else {
            log::debug!("jps: graph has no start or end");
            return NO_PATH;
        };
        if !self.graph.diagonal_moves() {
            log::debug!("jps: graph has no diagonal moves, path may cut through them anyway");
        }

        let mut state = SearchState::new(start);
        let mut open = BinaryHeap::new();
        open.push(PriorityNode::new(start, Self::heuristic(start, end)));
        state.count_push();

        let mut neighbours = Vec::with_capacity(8);

        while let Some(PriorityNode { node: u, .. }) = open.pop() {
            if state.is_visited(u) {
                continue;
            }
            if !observer.keep_going() {
                state.cancel();
                break;
            }
            state.settle(u);
            let du = state.dist(u);
            observer.settled(u, du);

            if u == end {
                break;
            }

            neighbours.clear();
            self.prune
                .pruned_neighbours(state.pred(u), u, &mut neighbours);

            for &nb in neighbours.iter() {
                let dir = u.direction_to(nb);
                let Some(jp) = self.jump.jump(u, dir, end) else {
                    continue;
                };
                let alt = du + octile(u, jp);
                if state.relax(u, jp, alt) {
                    log::trace!("jps: jump point {jp} via {u} at {alt}");
                    observer.relaxed(jp, alt);
                    open.push(PriorityNode::new(jp, alt + Self::heuristic(jp, end)));
                    state.count_push();
                }
            }
        }

        let cost = match state.finish(end) {
            Some(cost) => {
                self.jump_points = state.path().to_vec();
                state.set_path(interpolate(&self.jump_points));
                cost
            }
            None => NO_PATH,
        };
        log::debug!(
            "jps: {start} -> {end} cost {cost}, {} jump points settled, {} pushed",
            state.settled(),
            state.pushed()
        );
        self.state = Some(state);
        cost
    }
}

/// Expand consecutive jump points into single grid steps.
///
/// Consecutive jump points always lie on one straight or diagonal line.
fn interpolate(jump_points: &[Node]) -> Vec<Node> {
    let mut steps = Vec::with_capacity(jump_points.len());
    let Some(&first) = jump_points.first() else {
        return steps;
    };
    steps.push(first);
    for pair in jump_points.windows(2) {
        let (mut c, b) = (pair[0], pair[1]);
        let dir = c.direction_to(b);
        while c != b {
            c = c.step(dir);
            steps.push(c);
        }
    }
    steps
}
