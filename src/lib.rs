//! Tessella driver library.
//!
//! Exposes the headless simulation runner so integration tests and the
//! binary share one driver loop.

pub mod runner;

pub use runner::Simulation;
