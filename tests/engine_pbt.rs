//! Property-based tests of the block rule.

use proptest::prelude::*;
use tessella_core::{advance, Grid, StatsHistory};

/// The six 2-of-4 block patterns, all quiescent under the rule.
const QUIESCENT_PATTERNS: [[u8; 4]; 6] = [
    [1, 1, 0, 0],
    [1, 0, 1, 0],
    [1, 0, 0, 1],
    [0, 1, 1, 0],
    [0, 1, 0, 1],
    [0, 0, 1, 1],
];

/// Arbitrary even-sided grid with arbitrary cell states.
fn arb_even_grid() -> impl Strategy<Value = Grid> {
    (1usize..8).prop_flat_map(|half| {
        let side = half * 2;
        prop::collection::vec(0u8..=1, side * side)
            .prop_map(move |cells| Grid::from_cells(side, cells).unwrap())
    })
}

/// Arbitrary odd-sided grid with arbitrary cell states.
fn arb_odd_grid() -> impl Strategy<Value = Grid> {
    (1usize..8).prop_flat_map(|half| {
        let side = half * 2 + 1;
        prop::collection::vec(0u8..=1, side * side)
            .prop_map(move |cells| Grid::from_cells(side, cells).unwrap())
    })
}

/// Even-sided grid where every origin-anchored block holds exactly two live
/// cells.
fn arb_quiescent_grid() -> impl Strategy<Value = Grid> {
    (1usize..8).prop_flat_map(|half| {
        let side = half * 2;
        prop::collection::vec(0usize..QUIESCENT_PATTERNS.len(), half * half).prop_map(
            move |choices| {
                let mut grid = Grid::new(side).unwrap();
                for (block, &choice) in choices.iter().enumerate() {
                    let row = (block / half) * 2;
                    let col = (block % half) * 2;
                    let pattern = QUIESCENT_PATTERNS[choice];
                    grid.set(row, col, pattern[0]);
                    grid.set(row, col + 1, pattern[1]);
                    grid.set(row + 1, col, pattern[2]);
                    grid.set(row + 1, col + 1, pattern[3]);
                }
                grid
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn advance_is_deterministic(grid in arb_even_grid(), generation in 0u64..10, wraparound in any::<bool>()) {
        let a = advance(&grid, generation, wraparound).unwrap();
        let b = advance(&grid, generation, wraparound).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn advance_preserves_dimensions(grid in arb_even_grid(), generation in 0u64..10, wraparound in any::<bool>()) {
        let next = advance(&grid, generation, wraparound).unwrap();
        prop_assert_eq!(next.side(), grid.side());
    }

    #[test]
    fn quiescent_grids_are_fixed_points(grid in arb_quiescent_grid(), wraparound in any::<bool>()) {
        // Generation 1 tiles from the origin, exactly matching the blocks
        // the generator filled with 2-alive patterns.
        let next = advance(&grid, 1, wraparound).unwrap();
        prop_assert_eq!(next, grid);
    }

    #[test]
    fn uniform_grids_invert_completely(half in 1usize..8, alive in any::<bool>()) {
        // Every block of a uniform grid holds 0 or 4 live cells, so every
        // cell inverts regardless of parity on an even torus.
        let side = half * 2;
        let state = u8::from(alive);
        let grid = Grid::from_cells(side, vec![state; side * side]).unwrap();
        for generation in [1, 2] {
            let next = advance(&grid, generation, true).unwrap();
            let expected = usize::from(!alive) * side * side;
            prop_assert_eq!(next.alive_count(), expected);
        }
    }

    #[test]
    fn bounded_odd_grid_keeps_its_border(grid in arb_odd_grid()) {
        // Origin tiling on an odd side: blocks anchored at the last row or
        // column overhang and are skipped, so the border copies forward.
        let n = grid.side();
        let next = advance(&grid, 1, false).unwrap();
        for k in 0..n {
            prop_assert_eq!(next.get(n - 1, k), grid.get(n - 1, k));
            prop_assert_eq!(next.get(k, n - 1), grid.get(k, n - 1));
        }
    }

    #[test]
    fn stability_is_bounded(grid in arb_even_grid(), generation in 1u64..8, wraparound in any::<bool>()) {
        let next = advance(&grid, generation, wraparound).unwrap();
        let mut history = StatsHistory::new();
        let snapshot = history.observe(&grid, &next, generation).unwrap();
        prop_assert!((0.0..=1.0).contains(&snapshot.stability));
        prop_assert!((0.0..=1.0).contains(&snapshot.alive_fraction));
        prop_assert_eq!(snapshot.alive_count + snapshot.dead_count, grid.cell_count());
    }
}
