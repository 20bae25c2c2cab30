use std::collections::BinaryHeap;

use crate::observer::SearchObserver;
use crate::pathfinder::{Algorithm, NO_PATH, Pathfinder};
use crate::state::{PriorityNode, SearchState};
use crate::traits::Graph;

/// Uniform-cost shortest-path search over any non-negative [`Graph`].
///
/// The frontier is a binary heap without decrease-key: improved nodes are
/// pushed again and the stale entries are dropped when popped.
pub struct Dijkstra<'g, G: ?Sized> {
    graph: &'g G,
    state: Option<SearchState>,
}

impl<'g, G: Graph + ?Sized> Dijkstra<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph, state: None }
    }
}

impl<G: Graph + ?Sized> Pathfinder for Dijkstra<'_, G> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn state(&self) -> Option<&SearchState> {
        self.state.as_ref()
    }

    fn run_observed(&mut self, observer: &mut dyn SearchObserver) -> f64 {
        self.state = None;
        let Some((start, end)) = self.graph.endpoints() else {
            log::debug!("dijkstra: graph has no start or end");
            return NO_PATH;
        };

        let mut state = SearchState::new(start);
        let mut open = BinaryHeap::new();
        open.push(PriorityNode::new(start, 0.0));
        state.count_push();

        let mut nbuf = Vec::with_capacity(8);

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

            nbuf.clear();
            self.graph.neighbours(u, &mut nbuf);

            for &v in nbuf.iter() {
                let alt = du + self.graph.cost(u, v);
                if state.relax(u, v, alt) {
                    log::trace!("dijkstra: relaxed {v} to {alt}");
                    observer.relaxed(v, alt);
                    open.push(PriorityNode::new(v, alt));
                    state.count_push();
                }
            }
        }

        let cost = state.finish(end).unwrap_or(NO_PATH);
        log::debug!(
            "dijkstra: {start} -> {end} cost {cost}, {} settled, {} pushed",
            state.settled(),
            state.pushed()
        );
        self.state = Some(state);
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::SettleLimit;
    use crate::traits::UnitCost;
    use pathfinder_core::{Connectivity, Grid, Node};
    use std::f64::consts::SQRT_2;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Small directed graph with explicit weights.
    struct Edges {
        start: Node,
        end: Node,
        edges: Vec<(Node, Node, f64)>,
    }

    impl Graph for Edges {
        fn start(&self) -> Option<Node> {
            Some(self.start)
        }

        fn end(&self) -> Option<Node> {
            Some(self.end)
        }

        fn neighbours(&self, node: Node, buf: &mut Vec<Node>) {
            buf.extend(self.edges.iter().filter(|e| e.0 == node).map(|e| e.1));
        }

        fn cost(&self, from: Node, to: Node) -> f64 {
            self.edges
                .iter()
                .find(|e| e.0 == from && e.1 == to)
                .map_or(f64::INFINITY, |e| e.2)
        }
    }

    fn n(x: i32) -> Node {
        Node::new(x, 0)
    }

    #[test]
    fn open_grid_diagonal() {
        let mut g = Grid::new(3, 3);
        g.set_start(Node::new(0, 0));
        g.set_end(Node::new(2, 2));
        let mut d = Dijkstra::new(&g);
        assert!(approx_eq(d.run(), 2.0 * SQRT_2));
        assert_eq!(
            d.path(),
            &[Node::new(0, 0), Node::new(1, 1), Node::new(2, 2)]
        );
    }

    #[test]
    fn weighted_detour_beats_heavy_edge() {
        let g = Edges {
            start: n(0),
            end: n(3),
            edges: vec![
                (n(0), n(3), 10.0),
                (n(0), n(1), 1.0),
                (n(1), n(2), 2.0),
                (n(2), n(3), 3.0),
            ],
        };
        let mut d = Dijkstra::new(&g);
        assert!(approx_eq(d.run(), 6.0));
        assert_eq!(d.path(), &[n(0), n(1), n(2), n(3)]);
    }

    #[test]
    fn zero_weight_edges() {
        let g = Edges {
            start: n(0),
            end: n(2),
            edges: vec![(n(0), n(1), 0.0), (n(1), n(2), 0.0), (n(0), n(2), 0.5)],
        };
        let mut d = Dijkstra::new(&g);
        assert_eq!(d.run(), 0.0);
        assert_eq!(d.path().len(), 3);
    }

    #[test]
    fn directed_edge_unreachable() {
        let g = Edges {
            start: n(0),
            end: n(1),
            edges: vec![(n(1), n(0), 1.0)],
        };
        let mut d = Dijkstra::new(&g);
        assert_eq!(d.run(), NO_PATH);
        assert!(d.path().is_empty());
        assert_eq!(d.state().map(|s| s.settled()), Some(1));
    }

    #[test]
    fn unit_cost_counts_steps() {
        let g = Grid::from_ascii("S...\n....\n...E").unwrap();
        let mut weighted = Dijkstra::new(&g);
        assert!(approx_eq(weighted.run(), 1.0 + 2.0 * SQRT_2));

        let unit = UnitCost(&g);
        let mut steps = Dijkstra::new(&unit);
        assert_eq!(steps.run(), 3.0);
        assert_eq!(steps.path().len(), 4);
    }

    #[test]
    fn four_connected_uses_manhattan_routes() {
        let g = Grid::from_ascii("S..\n...\n..E")
            .unwrap()
            .with_connectivity(Connectivity::Four);
        let mut d = Dijkstra::new(&g);
        assert_eq!(d.run(), 4.0);
        assert_eq!(d.path().len(), 5);
    }

    #[test]
    fn stops_when_end_is_settled() {
        let g = Grid::from_ascii("SE........\n..........\n..........").unwrap();
        let mut d = Dijkstra::new(&g);
        assert_eq!(d.run(), 1.0);
        let settled = d.state().map(|s| s.settled()).unwrap_or(0);
        assert!(settled < 30, "settled {settled} nodes");
        assert!(d.state().is_some_and(|s| s.is_visited(Node::new(1, 0))));
    }

    #[test]
    fn settle_limit_cancels() {
        let g = Grid::from_ascii("S.........E").unwrap();
        let mut d = Dijkstra::new(&g);
        assert_eq!(d.run_observed(&mut SettleLimit::new(3)), NO_PATH);
        assert!(d.path().is_empty());
        let state = d.state().unwrap();
        assert!(state.cancelled());
        assert_eq!(state.settled(), 3);

        assert_eq!(d.run(), 10.0);
        assert!(!d.state().unwrap().cancelled());
    }
}
