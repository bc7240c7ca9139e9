// src/analysis/config.rs

use serde::Deserialize;

use crate::error::{InventoryError, InventoryResult};
use crate::model::params::LeadTimeConfig;
use crate::model::validation::require_positive;

/// Most samples a single curve may request.
pub const MAX_CURVE_SAMPLES: f64 = 1_000_000.0;

/// Settings for a batch analysis run over several models.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many days of inventory curve to sample.
    pub horizon_days: f64,
    pub step_days: f64,
    /// Directory receiving the CSV exports.
    pub output_dir: String,
    /// Route the order-quantity trace to the log.
    pub verbose: bool,
    pub reorder: LeadTimeConfig,
}

impl AnalysisConfig {
    pub fn validate(&self) -> InventoryResult<()> {
        require_positive("horizon_days", self.horizon_days)?;
        require_positive("step_days", self.step_days)?;
        let ratio = self.horizon_days / self.step_days;
        if ratio > MAX_CURVE_SAMPLES {
            return Err(InventoryError::invalid(
                "step_days",
                "horizon_days / step_days must not exceed 1e6 samples",
                self.step_days,
            ));
        }
        self.reorder.validate()
    }

    /// Samples needed to cover `[0, horizon_days]` inclusive.
    pub fn sample_count(&self) -> usize {
        (self.horizon_days / self.step_days).floor() as usize + 1
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            horizon_days: 365.0,
            step_days: 1.0,
            output_dir: "curves".to_string(),
            verbose: false,
            reorder: LeadTimeConfig::new(7.0),
        }
    }
}
