//! # Tessella Core
//!
//! The update engine for Tessella - a block-partitioned cellular automaton
//! laboratory.
//!
//! This crate contains the deterministic simulation logic, including:
//! - The alternating 2x2 block update rule (Margolus neighborhood)
//! - Square binary grid storage with validated dimensions
//! - Per-generation statistics with running stability aggregates
//! - Initial-state construction strategies
//! - Configuration, metrics collection and structured logging
//!
//! ## Architecture
//!
//! The engine is a pure function of `(grid, generation, wraparound)`: it
//! retains no state between calls and produces bit-identical output for
//! identical input. The driver owns the generation counter and the grid
//! buffers; statistics are derived from consecutive grid pairs and appended
//! to an ordered history.
//!
//! ## Example
//!
//! ```
//! use tessella_core::{advance, Grid, StatsHistory};
//!
//! // Every all-dead block inverts, so an empty grid flips entirely alive.
//! let grid = Grid::new(4).unwrap();
//! let next = advance(&grid, 1, true).unwrap();
//! assert_eq!(next.alive_count(), 16);
//!
//! let mut history = StatsHistory::new();
//! let snapshot = history.observe(&grid, &next, 1).unwrap();
//! assert_eq!(snapshot.stability, 0.0);
//! assert!(snapshot.alive_dead_ratio.is_infinite());
//! ```

/// Simulation run configuration loaded from `config.toml`
pub mod config;
/// The alternating block-partition update rule
pub mod engine;
/// Engine error taxonomy
pub mod error;
/// Square binary cell grid
pub mod grid;
/// Run metrics collection and logging
pub mod metrics;
/// Initial-state construction strategies
pub mod seed;
/// Per-generation statistics and running aggregates
pub mod stats;

pub use config::SimConfig;
pub use engine::{advance, advance_into};
pub use error::EngineError;
pub use grid::Grid;
pub use metrics::{init_logging, Metrics};
pub use seed::StartPattern;
pub use stats::StatsHistory;
