use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_K1: f64 = 1.2;
pub const DEFAULT_B: f64 = 0.75;

/// Ranking parameters and result limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_results: usize,
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document-length normalization, 0 disables it.
    pub b: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_results: DEFAULT_MAX_RESULTS, k1: DEFAULT_K1, b: DEFAULT_B }
    }
}

impl EngineConfig {
    pub fn with_max_results(max_results: usize) -> Self {
        Self { max_results, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SearchError::InvalidConfig("max_results must be a positive integer".into()));
        }
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(SearchError::InvalidConfig(format!("k1 must be a non-negative number, got {}", self.k1)));
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(SearchError::InvalidConfig(format!("b must lie in [0, 1], got {}", self.b)));
        }
        Ok(())
    }
}
