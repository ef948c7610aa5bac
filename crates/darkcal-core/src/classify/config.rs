use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HOT_THRESHOLD, DEFAULT_WARM_LOW};
use crate::error::{DarkCalError, Result};

use super::PixelLabel;

/// Intensity bands for anomalous-pixel classification, in detector counts.
///
/// `hot_threshold` is inclusive (a pixel exactly at the threshold is hot);
/// the warm band is open at both ends: `warm_low < v < hot_threshold`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Pixels at or above this value are hot.
    #[serde(default = "default_hot_threshold")]
    pub hot_threshold: f32,
    /// Lower bound (exclusive) of the warm band.
    #[serde(default = "default_warm_low")]
    pub warm_low: f32,
}

fn default_hot_threshold() -> f32 {
    DEFAULT_HOT_THRESHOLD
}
fn default_warm_low() -> f32 {
    DEFAULT_WARM_LOW
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            hot_threshold: DEFAULT_HOT_THRESHOLD,
            warm_low: DEFAULT_WARM_LOW,
        }
    }
}

impl ThresholdConfig {
    /// Build a validated band configuration.
    pub fn new(warm_low: f32, hot_threshold: f32) -> Result<Self> {
        let config = Self {
            hot_threshold,
            warm_low,
        };
        config.validate()?;
        Ok(config)
    }

    /// Bands must be disjoint and ordered: warm_low < hot_threshold.
    pub fn validate(&self) -> Result<()> {
        if !(self.warm_low < self.hot_threshold) {
            return Err(DarkCalError::InvalidThresholds {
                warm_low: self.warm_low,
                hot_threshold: self.hot_threshold,
            });
        }
        Ok(())
    }

    /// Classify a single intensity value.
    pub fn label(&self, value: f32) -> PixelLabel {
        if value >= self.hot_threshold {
            PixelLabel::Hot
        } else if value > self.warm_low {
            PixelLabel::Warm
        } else {
            PixelLabel::Normal
        }
    }
}
