//! Toroidal neighbor counting
//!
//! Every offset is wrapped with a Euclidean remainder on both axes, so edges
//! and corners need no special cases: the top edge borders the bottom edge
//! and the left edge borders the right.

use crate::core::types::Coord;
use crate::spatial::grid::CellGrid;

/// `(dx, dy)` offsets of the eight Moore neighbors
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Number of live cells among the eight toroidal neighbors of `(row, col)`
///
/// Always in `0..=8`. Coordinates outside the grid are wrapped onto it as well.
pub fn count_alive_neighbors(grid: &CellGrid, row: usize, col: usize) -> u8 {
    neighbor_coords(grid, row, col)
        .iter()
        .filter(|n| grid.get(n.row, n.col).unwrap_or(false))
        .count() as u8
}

/// The eight wrapped neighbor coordinates of `(row, col)`
///
/// On boards narrower than three cells some coordinates repeat, and each
/// repeat is counted separately by `count_alive_neighbors`.
pub fn neighbor_coords(grid: &CellGrid, row: usize, col: usize) -> [Coord; 8] {
    let origin = Coord::new(row, col);
    NEIGHBOR_OFFSETS.map(|(dx, dy)| origin.wrapped_offset(dx, dy, grid.height(), grid.width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(height: usize, width: usize, alive: &[(usize, usize)]) -> CellGrid {
        let mut grid = CellGrid::blank(height, width).unwrap();
        for &(row, col) in alive {
            grid.set_alive(row, col).unwrap();
        }
        grid
    }

    #[test]
    fn test_isolated_cell_has_no_neighbors() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(count_alive_neighbors(&grid, 2, 2), 0);
    }

    #[test]
    fn test_interior_count() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 2), (1, 3), (2, 1), (3, 3)]);
        assert_eq!(count_alive_neighbors(&grid, 2, 2), 5);
    }

    #[test]
    fn test_full_neighborhood() {
        let mut grid = grid_with(5, 5, &[]);
        for &(dx, dy) in NEIGHBOR_OFFSETS.iter() {
            grid.set_alive((2 + dy) as usize, (2 + dx) as usize).unwrap();
        }
        grid.set_alive(2, 2).unwrap();
        assert_eq!(count_alive_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn test_corner_wraps_diagonally() {
        let grid = grid_with(5, 5, &[(0, 0)]);
        assert_eq!(count_alive_neighbors(&grid, 4, 4), 1);
        assert_eq!(count_alive_neighbors(&grid, 0, 4), 1);
        assert_eq!(count_alive_neighbors(&grid, 4, 0), 1);
        assert_eq!(count_alive_neighbors(&grid, 2, 2), 0);
    }

    #[test]
    fn test_edges_wrap() {
        // Live cells along the left edge are neighbors of the right edge
        let grid = grid_with(4, 6, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(count_alive_neighbors(&grid, 1, 5), 3);
        // Bottom row borders the top row
        let grid = grid_with(4, 6, &[(3, 2), (3, 3), (3, 4)]);
        assert_eq!(count_alive_neighbors(&grid, 0, 3), 3);
    }

    #[test]
    fn test_neighbor_coords_wrap() {
        let grid = grid_with(3, 4, &[]);
        let coords = neighbor_coords(&grid, 0, 0);
        assert!(coords.contains(&Coord::new(2, 3)));
        assert!(coords.contains(&Coord::new(0, 3)));
        assert!(coords.contains(&Coord::new(2, 0)));
        assert!(coords.contains(&Coord::new(1, 1)));
        assert!(!coords.contains(&Coord::new(0, 0)));
    }

    #[test]
    fn test_one_by_one_board_counts_itself() {
        // Every offset wraps back onto the only cell
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(count_alive_neighbors(&grid, 0, 0), 8);
    }
}
