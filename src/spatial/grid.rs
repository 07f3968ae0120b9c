//! Flat 2D grid of boolean cells

use crate::core::error::{LifeError, Result};
use crate::core::types::Coord;

/// Rectangular grid of alive/dead cells, stored row-major
///
/// The grid is the sole owner of cell state. Explicit accessors are
/// bounds-checked and never wrap; wrapping only happens inside the neighbor
/// counter and pattern placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl CellGrid {
    /// All-dead grid of the given size
    pub fn blank(height: usize, width: usize) -> Result<Self> {
        let len = check_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![false; len],
        })
    }

    /// Build a grid from explicit rows, validating the declared shape
    pub fn from_rows(height: usize, width: usize, rows: Vec<Vec<bool>>) -> Result<Self> {
        let len = check_dimensions(height, width)?;

        if rows.len() != height {
            return Err(LifeError::ShapeMismatch(format!(
                "expected {} rows, got {}",
                height,
                rows.len()
            )));
        }

        let mut cells = Vec::with_capacity(len);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::ShapeMismatch(format!(
                    "row {} has {} cells, expected {}",
                    row_idx,
                    row.len(),
                    width
                )));
            }
            cells.extend(row);
        }

        Ok(Self { height, width, cells })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Cell state, or `None` outside the grid
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Cell state, failing with `OutOfRange` outside the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<()> {
        self.set(row, col, true)
    }

    pub fn set_dead(&mut self, row: usize, col: usize) -> Result<()> {
        self.set(row, col, false)
    }

    /// Set a cell alive, wrapping the coordinate onto the grid
    pub fn set_alive_wrapped(&mut self, row: usize, col: usize) -> Coord {
        let coord = Coord::new(row % self.height, col % self.width);
        let idx = self.index(coord.row, coord.col);
        self.cells[idx] = true;
        coord
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Copy of the grid as one `Vec<bool>` per row, row 0 first
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.width).map(|row| row.to_vec()).collect()
    }

    /// Every cell in row-major order starting at row 0
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (Coord::new(idx / width, idx % width), alive))
    }

    /// Row-major cell slice
    #[inline]
    pub(crate) fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Replace every cell at once with a fully computed next state
    pub(crate) fn commit(&mut self, next: Vec<bool>) {
        debug_assert_eq!(next.len(), self.cells.len());
        self.cells = next;
    }
}

/// Cell count of a `height` x `width` grid, rejecting empty or overflowing shapes
pub(crate) fn check_dimensions(height: usize, width: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(LifeError::InvalidArgument(format!(
            "grid dimensions must be positive, got {}x{}",
            height, width
        )));
    }
    height.checked_mul(width).ok_or_else(|| {
        LifeError::InvalidArgument(format!("grid of {}x{} cells is too large", height, width))
    })
}
