//! Shared data types for the Tessella simulation.
//!
//! This crate holds the plain serializable records exchanged between the
//! engine, the history logger, and the driver. It contains no logic beyond
//! serialization glue.

use serde::{Deserialize, Serialize};

/// Statistics derived from one completed generation.
///
/// The per-generation fields describe the transition `previous -> next`;
/// `mean_stability` and `stddev_stability` are the running population
/// aggregates over every generation observed so far, frozen at the moment
/// this snapshot was taken.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Generation that produced this snapshot (counted from 1).
    pub generation: u64,
    /// Fraction of cells unchanged between the two grids, in [0, 1].
    pub stability: f64,
    /// Fraction of live cells in the new grid, in [0, 1].
    pub alive_fraction: f64,
    pub alive_count: usize,
    pub dead_count: usize,
    /// `alive_count / dead_count`; `f64::INFINITY` when no cell is dead.
    #[serde(with = "ratio")]
    pub alive_dead_ratio: f64,
    /// Population mean of `stability` over the history so far.
    pub mean_stability: f64,
    /// Population standard deviation of `stability` over the history so far.
    pub stddev_stability: f64,
}

/// Final aggregates reported when a run reaches its generation bound.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub generations: u64,
    pub mean_stability: f64,
    pub stddev_stability: f64,
    pub final_alive_fraction: f64,
}

/// JSON has no representation for non-finite floats; serde_json emits `null`
/// for them. The all-alive ratio sentinel must survive a round trip through
/// the history log, so `null` deserializes back to `f64::INFINITY`.
mod ratio {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
