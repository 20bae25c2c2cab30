use std::f64::consts::SQRT_2;

use pathfinder_core::Node;

/// Manhattan (L1) distance between two nodes.
#[inline]
pub fn manhattan(a: Node, b: Node) -> f64 {
    f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
}

/// Chebyshev (L∞) distance between two nodes.
#[inline]
pub fn chebyshev(a: Node, b: Node) -> f64 {
    f64::from((a.x - b.x).abs().max((a.y - b.y).abs()))
}

/// Straight-line (L2) distance between two nodes.
#[inline]
pub fn euclidean(a: Node, b: Node) -> f64 {
    f64::from(a.x - b.x).hypot(f64::from(a.y - b.y))
}

/// Octile distance: the cost of the cheapest obstacle-free route on an
/// 8-connected grid with orthogonal cost 1 and diagonal cost √2.
///
/// Admissible and consistent for that movement model.
#[inline]
pub fn octile(a: Node, b: Node) -> f64 {
    let dx = f64::from((b.x - a.x).abs());
    let dy = f64::from((b.y - a.y).abs());
    dx + dy + (SQRT_2 - 2.0) * dx.min(dy)
}
