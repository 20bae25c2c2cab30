//! Geometry primitives: [`Node`], [`Direction`] and [`Range`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// An immutable grid coordinate. X grows right, Y grows down.
///
/// Equality, hashing and identity are by the coordinate pair, so a `Node`
/// is usable directly as a map or set key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub x: i32,
    pub y: i32,
}

impl Node {
    /// Create a new node.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The node one step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        Self {
            x: self.x + dir.dx,
            y: self.y + dir.dy,
        }
    }

    /// Unit direction of travel from `self` towards `other`.
    #[inline]
    pub fn direction_to(self, other: Node) -> Direction {
        Direction::between(self, other)
    }

    /// All eight neighbours, clockwise from north.
    #[inline]
    pub fn neighbours_8(self) -> [Node; 8] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Direction> for Node {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Direction) -> Self {
        self.step(rhs)
    }
}

impl Sub for Node {
    type Output = (i32, i32);
    #[inline]
    fn sub(self, rhs: Self) -> (i32, i32) {
        (self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A unit step `(dx, dy)` with both components in `{-1, 0, 1}`.
///
/// The zero direction is representable (it is what [`Direction::between`]
/// returns for identical nodes) but is never produced as a move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const N: Self = Self::new(0, -1);
    pub const NE: Self = Self::new(1, -1);
    pub const E: Self = Self::new(1, 0);
    pub const SE: Self = Self::new(1, 1);
    pub const S: Self = Self::new(0, 1);
    pub const SW: Self = Self::new(-1, 1);
    pub const W: Self = Self::new(-1, 0);
    pub const NW: Self = Self::new(-1, -1);

    /// The four cardinal directions (up, right, down, left).
    pub const CARDINAL: [Self; 4] = [Self::N, Self::E, Self::S, Self::W];

    /// All eight directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Create a direction. Components are clamped to their sign.
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    /// Sign of the delta from `from` to `to`.
    #[inline]
    pub fn between(from: Node, to: Node) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Whether both components are non-zero.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }

    /// The horizontal component `(dx, 0)`.
    #[inline]
    pub const fn horizontal(self) -> Self {
        Self::new(self.dx, 0)
    }

    /// The vertical component `(0, dy)`.
    #[inline]
    pub const fn vertical(self) -> Self {
        Self::new(0, self.dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Node,
    pub max: Node,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Node::new(x0.min(x1), y0.min(y1)),
            max: Node::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Node) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every node in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Node;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the nodes in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Node,
}

impl Iterator for RangeIter {
    type Item = Node;

    #[inline]
    fn next(&mut self) -> Option<Node> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn node_step_and_delta() {
        let a = Node::new(1, 2);
        assert_eq!(a.step(Direction::SE), Node::new(2, 3));
        assert_eq!(a + Direction::W, Node::new(0, 2));
        assert_eq!(Node::new(4, 6) - a, (3, 4));
    }

    #[test]
    fn node_identity_is_coordinates() {
        let mut set = HashSet::new();
        set.insert(Node::new(3, 4));
        assert!(set.contains(&Node::new(3, 4)));
        assert!(!set.insert(Node::new(3, 4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn node_order_is_row_major() {
        let mut v = vec![Node::new(1, 1), Node::new(0, 1), Node::new(5, 0)];
        v.sort();
        assert_eq!(v, vec![Node::new(5, 0), Node::new(0, 1), Node::new(1, 1)]);
    }

    #[test]
    fn direction_between_takes_signs() {
        let d = Direction::between(Node::new(0, 0), Node::new(5, -3));
        assert_eq!(d, Direction::NE);
        assert!(d.is_diagonal());
        assert_eq!(d.horizontal(), Direction::E);
        assert_eq!(d.vertical(), Direction::N);
        assert!(Direction::between(Node::new(2, 2), Node::new(2, 2)).is_zero());
    }

    #[test]
    fn direction_to_matches_step() {
        let a = Node::new(4, 4);
        for d in Direction::ALL {
            assert_eq!(a.direction_to(a.step(d)), d);
        }
        assert_eq!(a.direction_to(Node::new(0, 9)), Direction::SW);
    }

    #[test]
    fn direction_new_clamps() {
        assert_eq!(Direction::new(7, -9), Direction::NE);
        assert!(!Direction::new(0, 4).is_diagonal());
    }

    #[test]
    fn neighbours_8_are_distinct() {
        let n: HashSet<_> = Node::new(0, 0).neighbours_8().into_iter().collect();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Node::new(0, 0)));
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Node::new(2, 1)));
        assert!(!r.contains(Node::new(3, 0)));
        assert!(!r.contains(Node::new(0, -1)));
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(r.iter().len(), 6);
        assert_eq!(pts[0], Node::new(0, 0));
        assert_eq!(pts[5], Node::new(2, 1));
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(2, 2, 2, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }
}
