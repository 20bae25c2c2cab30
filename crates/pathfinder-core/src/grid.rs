//! Obstacle grids.
//!
//! A [`Grid`] is a rectangle of open or blocked cells with optional start and
//! end markers. Grids can be built cell by cell or parsed from ASCII art:
//!
//! ```text
//! S..#.
//! .#.#.
//! .#...
//! ...#E
//! ```
//!
//! `.` is open, `#` is blocked, `S` and `E` are open cells marking the start
//! and end of a search.

use std::fmt::Write as _;

use thiserror::Error;

use crate::geom::{Node, Range};

/// Character for an open cell.
pub const OPEN: char = '.';
/// Character for a blocked cell.
pub const BLOCKED: char = '#';
/// Character marking the start node.
pub const START: char = 'S';
/// Character marking the end node.
pub const END: char = 'E';
/// Character used by [`Grid::render_path`] for path cells.
pub const PATH: char = '*';

/// Which moves are allowed between adjacent cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Connectivity {
    /// Orthogonal moves only.
    Four,
    /// Orthogonal and diagonal moves. A diagonal move only needs its target
    /// cell to be open.
    #[default]
    Eight,
}

/// Errors that can occur when building a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid: map is empty")]
    Empty,
    #[error("grid: row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },
    #[error("grid: invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Node },
    #[error("grid: second start marker at {second}, first at {first}")]
    DuplicateStart { first: Node, second: Node },
    #[error("grid: second end marker at {second}, first at {first}")]
    DuplicateEnd { first: Node, second: Node },
}

/// A rectangular obstacle grid anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    blocked: Vec<bool>,
    start: Option<Node>,
    end: Option<Node>,
    connectivity: Connectivity,
}

impl Grid {
    /// Create a `width` × `height` grid with every cell open.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            blocked: vec![false; bounds.len()],
            start: None,
            end: None,
            connectivity: Connectivity::default(),
        }
    }

    /// Parse a grid from ASCII art.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string and
    /// trailing whitespace from each line. All rows must share one width.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let rows: Vec<&str> = s.lines().map(str::trim_end).collect();
        let width = rows[0].chars().count() as i32;
        let mut grid = Self::new(width, rows.len() as i32);

        for (y, row) in rows.iter().enumerate() {
            let y = y as i32;
            let found = row.chars().count() as i32;
            if found != width {
                return Err(GridError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Node::new(x as i32, y);
                match ch {
                    OPEN => {}
                    BLOCKED => grid.set_blocked(pos, true),
                    START => {
                        if let Some(first) = grid.start {
                            return Err(GridError::DuplicateStart { first, second: pos });
                        }
                        grid.start = Some(pos);
                    }
                    END => {
                        if let Some(first) = grid.end {
                            return Err(GridError::DuplicateEnd { first, second: pos });
                        }
                        grid.end = Some(pos);
                    }
                    ch => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    /// Builder-style connectivity override.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn start(&self) -> Option<Node> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Node> {
        self.end
    }

    pub fn set_start(&mut self, node: Node) {
        self.start = Some(node);
    }

    pub fn set_end(&mut self, node: Node) {
        self.end = Some(node);
    }

    /// Whether `node` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, node: Node) -> bool {
        self.bounds.contains(node)
    }

    /// Whether `node` is blocked. Off-grid nodes count as blocked.
    #[inline]
    pub fn is_blocked(&self, node: Node) -> bool {
        match self.idx(node) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Mark a cell blocked or open. Off-grid nodes are ignored.
    pub fn set_blocked(&mut self, node: Node, blocked: bool) {
        if let Some(i) = self.idx(node) {
            self.blocked[i] = blocked;
        }
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Render the grid as ASCII art with `path` drawn over it.
    ///
    /// Start and end markers take precedence over path cells.
    pub fn render_path(&self, path: &[Node]) -> String {
        let mut chars: Vec<char> = self
            .blocked
            .iter()
            .map(|&b| if b { BLOCKED } else { OPEN })
            .collect();
        for &n in path {
            if let Some(i) = self.idx(n) {
                chars[i] = PATH;
            }
        }
        for (marker, ch) in [(self.start, START), (self.end, END)] {
            if let Some(i) = marker.and_then(|n| self.idx(n)) {
                chars[i] = ch;
            }
        }

        let w = self.width().max(1) as usize;
        let mut out = String::with_capacity(chars.len() + self.height() as usize);
        for row in chars.chunks(w) {
            for &c in row {
                out.push(c);
            }
            let _ = writeln!(out);
        }
        out
    }

    #[inline]
    fn idx(&self, node: Node) -> Option<usize> {
        if !self.bounds.contains(node) {
            return None;
        }
        Some(row_major(node, self.width()))
    }
}

/// Flat index of an in-bounds `node`, computed in `usize` so that grids
/// with more than `i32::MAX` cells still index correctly.
#[inline]
fn row_major(node: Node, width: i32) -> usize {
    node.y as usize * width as usize + node.x as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#.#
...E";

    #[test]
    fn index_does_not_wrap_on_huge_grids() {
        let w = 65_536;
        let n = Node::new(w - 1, 40_000);
        assert_eq!(row_major(n, w), 40_000 * 65_536 + 65_535);
        assert!(row_major(n, w) > i32::MAX as usize);
        assert_eq!(row_major(Node::new(2, 1), 4), 6);
    }

    #[test]
    fn parse_markers_and_walls() {
        let g = Grid::from_ascii(ROOM).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.start(), Some(Node::new(0, 0)));
        assert_eq!(g.end(), Some(Node::new(3, 2)));
        assert!(g.is_blocked(Node::new(3, 0)));
        assert!(g.is_blocked(Node::new(1, 1)));
        assert!(!g.is_blocked(Node::new(0, 0)));
        assert_eq!(g.blocked_count(), 3);
    }

    #[test]
    fn off_grid_is_blocked() {
        let g = Grid::new(2, 2);
        assert!(g.is_blocked(Node::new(-1, 0)));
        assert!(g.is_blocked(Node::new(0, 2)));
        assert!(!g.in_bounds(Node::new(2, 0)));
    }

    #[test]
    fn inconsistent_width_rejected() {
        let err = Grid::from_ascii("...\n..").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_char_rejected() {
        let err = Grid::from_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                pos: Node::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn duplicate_markers_rejected() {
        assert!(matches!(
            Grid::from_ascii("S.S"),
            Err(GridError::DuplicateStart { .. })
        ));
        assert!(matches!(
            Grid::from_ascii("E\nE"),
            Err(GridError::DuplicateEnd { .. })
        ));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Grid::from_ascii("  \n "), Err(GridError::Empty));
    }

    #[test]
    fn render_round_trips_markers() {
        let g = Grid::from_ascii(ROOM).unwrap();
        let path = [
            Node::new(0, 0),
            Node::new(0, 1),
            Node::new(1, 2),
            Node::new(2, 2),
            Node::new(3, 2),
        ];
        assert_eq!(g.render_path(&path), "S..#\n*#.#\n.**E\n");
        assert_eq!(g.render_path(&[]).trim(), ROOM);
    }

    #[test]
    fn set_blocked_ignores_off_grid() {
        let mut g = Grid::new(2, 1);
        g.set_blocked(Node::new(5, 5), true);
        g.set_blocked(Node::new(1, 0), true);
        assert_eq!(g.blocked_count(), 1);
        assert_eq!(g.connectivity(), Connectivity::Eight);
        let g = g.with_connectivity(Connectivity::Four);
        assert_eq!(g.connectivity(), Connectivity::Four);
    }
}
