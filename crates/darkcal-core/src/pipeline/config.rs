use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classify::ThresholdConfig;
use crate::consts::{DEFAULT_DISPLAY_CUTOFF, DEFAULT_HISTOGRAM_BINS};

/// Full analysis configuration, usually loaded from TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Optional master-frame preview output (TIFF or PNG by extension).
    pub preview: Option<PathBuf>,
    pub dark: DarkStackConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub histogram: HistogramConfig,
    pub bias: Option<BiasConfig>,
}

/// Where the dark-frame stack comes from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DarkStackConfig {
    /// Path pattern with one `{}` / `{:0N}` placeholder for the frame index.
    pub template: String,
    /// Number of frames to load, indices 0..frames.
    pub frames: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistogramConfig {
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Upper cutoff (counts) for the filtered histogram.
    #[serde(default = "default_display_cutoff")]
    pub display_cutoff: f32,
}

fn default_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}
fn default_display_cutoff() -> f32 {
    DEFAULT_DISPLAY_CUTOFF
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_HISTOGRAM_BINS,
            display_cutoff: DEFAULT_DISPLAY_CUTOFF,
        }
    }
}

/// The independent bias/dark combination series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BiasConfig {
    pub bias_file: PathBuf,
    /// Path pattern with one placeholder for the exposure time in seconds.
    pub dark_template: String,
    pub exposure_times: Vec<u32>,
}
