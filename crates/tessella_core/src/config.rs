//! Configuration management for simulation parameters.
//!
//! This module provides a strongly-typed configuration structure that maps
//! to the `config.toml` file. The configuration is constructed once before
//! the simulation loop starts and is immutable afterwards; the engine never
//! reads shared mutable state.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! grid_size = 100
//! initial_alive_probability = 0.25
//! wraparound = true
//! max_generations = 250
//! pattern = "Random"
//! seed = 42
//! ```

use crate::grid::MIN_SIDE;
use crate::seed::StartPattern;
use serde::{Deserialize, Serialize};

/// Simulation run configuration.
///
/// Defaults mirror the reference run: a 100x100 torus filled with 25% live
/// cells, simulated for 250 generations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Grid side length N (the grid is always N x N).
    pub grid_size: usize,
    /// Probability that a cell starts alive; only used by the `Random`
    /// start pattern, never by the update rule.
    pub initial_alive_probability: f64,
    /// Toroidal edge topology when true, bounded edges when false.
    pub wraparound: bool,
    /// Loop bound owned by the driver, not the engine.
    pub max_generations: u64,
    /// Initial-state construction strategy.
    pub pattern: StartPattern,
    /// RNG seed; a random seed is drawn (and recorded) when absent.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            initial_alive_probability: 0.25,
            wraparound: true,
            max_generations: 250,
            pattern: StartPattern::Random,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.grid_size >= MIN_SIDE,
            "Grid size must be at least {}",
            MIN_SIDE
        );
        anyhow::ensure!(self.grid_size <= 1024, "Grid size too large (max 1024)");
        anyhow::ensure!(
            self.grid_size >= self.pattern.min_side(),
            "Grid size {} too small for pattern {:?} (needs {})",
            self.grid_size,
            self.pattern,
            self.pattern.min_side()
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.initial_alive_probability),
            "Initial alive probability must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.max_generations > 0,
            "Max generations must be positive"
        );
        anyhow::ensure!(
            self.max_generations <= 1_000_000,
            "Max generations too large (max 1000000)"
        );
        Ok(())
    }

    /// Parses and validates configuration from `config.toml` content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of the rule-relevant parameters, recorded in the run
    /// history header so a log file identifies the run that produced it.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{}", self.grid_size).as_bytes());
        hasher.update(format!("{:?}", self.pattern).as_bytes());
        hasher.update(format!("{}", self.initial_alive_probability).as_bytes());
        hasher.update(format!("{}", self.wraparound).as_bytes());
        hasher.update(format!("{:?}", self.seed).as_bytes());
        hex::encode(hasher.finalize())
    }
}
