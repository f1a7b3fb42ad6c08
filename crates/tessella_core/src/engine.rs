//! The block-partitioned update rule.
//!
//! The grid is tiled into disjoint 2x2 blocks whose origin alternates with
//! generation parity (a Margolus neighborhood): odd generations anchor block
//! corners at even indices, even generations shift the tiling by one row and
//! one column. Within a block the rule reads only pre-update state:
//!
//! - exactly 2 live cells: the block is left untouched;
//! - any other count: all four cells are inverted;
//! - exactly 3 live cells (counted before inversion): after inverting, the
//!   two diagonal pairs are swapped, which is what turns flicker into
//!   apparent motion.
//!
//! With wraparound enabled the tiling is toroidal; without it, blocks that
//! would overhang the boundary are skipped and their cells copy forward.
//!
//! `advance` is a pure function of `(grid, generation, wraparound)`: blocks
//! are disjoint and all reads come from the frozen input grid, so block
//! processing order cannot affect the result.

use crate::error::Result;
use crate::grid::Grid;

/// Advances `grid` by one generation, returning a newly allocated grid.
/// The input is never mutated.
pub fn advance(grid: &Grid, generation: u64, wraparound: bool) -> Result<Grid> {
    let mut next = grid.clone();
    advance_into(grid, &mut next, generation, wraparound)?;
    Ok(next)
}

/// Like [`advance`], but writes into `next`, reusing its allocation. The
/// driver keeps a previous/next buffer pair and swaps them each generation
/// instead of allocating.
///
/// Fails with `DimensionMismatch` when the two grids differ in side length.
pub fn advance_into(grid: &Grid, next: &mut Grid, generation: u64, wraparound: bool) -> Result<()> {
    next.copy_from(grid)?;
    let n = grid.side();

    // Odd generations tile from the origin, even generations offset by one.
    let start = if generation % 2 == 1 { 0 } else { 1 };

    for i in (start..n).step_by(2) {
        for j in (start..n).step_by(2) {
            if !wraparound && (i + 1 >= n || j + 1 >= n) {
                // Overhanging block: its cells keep their previous state.
                continue;
            }
            // Block cells in order: top-left, top-right, bottom-left,
            // bottom-right, wrapping modulo the side length.
            let coords = [
                (i % n, j % n),
                (i % n, (j + 1) % n),
                ((i + 1) % n, j % n),
                ((i + 1) % n, (j + 1) % n),
            ];
            let alive: u8 = coords.iter().map(|&(r, c)| grid.get(r, c)).sum();

            if alive != 2 {
                for &(r, c) in &coords {
                    next.set(r, c, 1 - grid.get(r, c));
                }
                if alive == 3 {
                    swap_cells(next, coords[0], coords[3]);
                    swap_cells(next, coords[1], coords[2]);
                }
            }
        }
    }
    Ok(())
}

fn swap_cells(grid: &mut Grid, a: (usize, usize), b: (usize, usize)) {
    let (va, vb) = (grid.get(a.0, a.1), grid.get(b.0, b.1));
    grid.set(a.0, a.1, vb);
    grid.set(b.0, b.1, va);
}
