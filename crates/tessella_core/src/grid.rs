//! Square binary cell grid.
//!
//! Cells are stored row-major in a flat buffer, 0 = dead and 1 = alive.
//! Dimensions are validated at construction and fixed for the lifetime of
//! the grid, so every grid the engine receives is square with side >= 2.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Minimum side length: the block rule needs at least one full 2x2 block.
pub const MIN_SIDE: usize = 2;

/// A square grid of binary cell states.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    side: usize,
}

impl Grid {
    /// Creates an all-dead grid of the given side length.
    pub fn new(side: usize) -> Result<Self> {
        if side < MIN_SIDE {
            return Err(EngineError::InvalidDimension {
                side,
                min: MIN_SIDE,
            });
        }
        Ok(Self {
            cells: vec![0; side * side],
            side,
        })
    }

    /// Builds a grid from a row-major cell buffer. Any non-zero value is
    /// treated as alive.
    pub fn from_cells(side: usize, cells: Vec<u8>) -> Result<Self> {
        if side < MIN_SIDE {
            return Err(EngineError::InvalidDimension {
                side,
                min: MIN_SIDE,
            });
        }
        if cells.len() != side * side {
            return Err(EngineError::NotSquare {
                side,
                len: cells.len(),
            });
        }
        let cells = cells.into_iter().map(|c| u8::from(c != 0)).collect();
        Ok(Self { cells, side })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (side squared).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: u8) {
        let idx = self.index(row, col);
        self.cells[idx] = u8::from(state != 0);
    }

    #[must_use]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 1
    }

    /// Number of live cells.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Row-major view of the raw cell states.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copies the cell states of `other` into this grid.
    pub fn copy_from(&mut self, other: &Grid) -> Result<()> {
        if self.side != other.side {
            return Err(EngineError::DimensionMismatch {
                expected: self.side,
                actual: other.side,
            });
        }
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.side(), 4);
        assert_eq!(grid.cell_count(), 16);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_side_below_minimum_rejected() {
        assert_eq!(
            Grid::new(1),
            Err(EngineError::InvalidDimension { side: 1, min: 2 })
        );
        assert!(Grid::new(0).is_err());
    }

    #[test]
    fn test_from_cells_rejects_non_square_buffer() {
        assert_eq!(
            Grid::from_cells(3, vec![0; 8]),
            Err(EngineError::NotSquare { side: 3, len: 8 })
        );
    }

    #[test]
    fn test_from_cells_normalizes_states() {
        let grid = Grid::from_cells(2, vec![0, 7, 1, 0]).unwrap();
        assert_eq!(grid.cells(), &[0, 1, 1, 0]);
        assert_eq!(grid.alive_count(), 2);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(1, 2, 1);
        assert!(grid.is_alive(1, 2));
        assert!(!grid.is_alive(2, 1));
    }

    #[test]
    fn test_copy_from_requires_matching_side() {
        let mut a = Grid::new(3).unwrap();
        let b = Grid::new(4).unwrap();
        assert_eq!(
            a.copy_from(&b),
            Err(EngineError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
    }
}
