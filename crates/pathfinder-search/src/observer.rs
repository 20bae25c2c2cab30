use pathfinder_core::Node;

/// Hooks called from inside a search loop.
///
/// Every method has a no-op default. `keep_going` is polled once for each
/// non-stale frontier entry, before that entry is settled and expanded;
/// returning `false` stops the run, which then reports no path.
pub trait SearchObserver {
    fn keep_going(&mut self) -> bool {
        true
    }

    /// `node` received a new best distance `dist`.
    fn relaxed(&mut self, _node: Node, _dist: f64) {}

    /// `node` was settled with final distance `dist`.
    fn settled(&mut self, _node: Node, _dist: f64) {}
}

/// Observer that watches nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that stops a search after a fixed number of settled nodes.
#[derive(Debug, Clone, Copy)]
pub struct SettleLimit {
    remaining: usize,
}

impl SettleLimit {
    pub fn new(limit: usize) -> Self {
        Self { remaining: limit }
    }
}

impl SearchObserver for SettleLimit {
    fn keep_going(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
