//! Run-history persistence for Tessella.
//!
//! This crate owns everything that touches the filesystem: the JSONL run
//! event log, snapshot readback, and gzip archives of finished runs. The
//! engine itself performs no I/O.

/// Error types for I/O operations
pub mod error;
/// JSONL run event log and archives
pub mod history;

pub use error::{IoError, Result};
pub use history::{now_rfc3339, HistoryLogger, RunEvent};
