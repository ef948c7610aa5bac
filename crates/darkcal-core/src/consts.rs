/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default hot-pixel threshold in detector counts.
pub const DEFAULT_HOT_THRESHOLD: f32 = 20_000.0;

/// Default lower bound (exclusive) of the warm-pixel band in detector counts.
pub const DEFAULT_WARM_LOW: f32 = 10_000.0;

/// Default bin count for intensity histograms.
pub const DEFAULT_HISTOGRAM_BINS: usize = 200;

/// Default upper cutoff (counts) for the filtered intensity histogram.
pub const DEFAULT_DISPLAY_CUTOFF: f32 = 1_050.0;

/// Full scale of a 16-bit detector in counts, used for preview export.
pub const ADU_FULL_SCALE: f32 = 65_535.0;
