//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Generation counter (simulation time unit)
pub type Tick = u64;

/// A cell coordinate on the board
///
/// Row 0 is the bottom row when rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by `(dx, dy)` and wrap it onto a `height` x `width` torus
    ///
    /// `dx` moves along columns, `dy` along rows. Uses Euclidean remainder so
    /// negative offsets never produce a negative index.
    #[inline]
    pub fn wrapped_offset(&self, dx: i64, dy: i64, height: usize, width: usize) -> Self {
        let row = (self.row as i64 + dy).rem_euclid(height as i64) as usize;
        let col = (self.col as i64 + dx).rem_euclid(width as i64) as usize;
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_offset_inside() {
        let c = Coord::new(2, 3);
        assert_eq!(c.wrapped_offset(1, -1, 5, 5), Coord::new(1, 4));
    }

    #[test]
    fn test_wrapped_offset_wraps_both_axes() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.wrapped_offset(-1, -1, 5, 7), Coord::new(4, 6));

        let corner = Coord::new(4, 6);
        assert_eq!(corner.wrapped_offset(1, 1, 5, 7), Coord::new(0, 0));
    }

    #[test]
    fn test_wrapped_offset_larger_than_board() {
        // Offsets several board-lengths away still land inside
        let c = Coord::new(1, 1);
        assert_eq!(c.wrapped_offset(10, -13, 4, 4), Coord::new(0, 3));
    }
}
