pub mod config;

pub use config::ThresholdConfig;

use ndarray::{Array2, Zip};
use tracing::debug;

use crate::error::{DarkCalError, Result};
use crate::frame::Frame;
use crate::stack::ensure_same_shape;

/// Master-frame label for a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLabel {
    Hot,
    Warm,
    Normal,
}

/// Cross-frame consistency of a flagged pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consistency {
    /// Every source frame matches the band at this pixel.
    AllFrames,
    /// Only the combined master matches; no single source frame does.
    MedianOnly,
    /// The master and some, but not all, source frames match.
    Partial,
}

/// Flagged coordinates for one intensity band. The three consistency
/// lists partition `flagged`.
#[derive(Clone, Debug, Default)]
pub struct BandReport {
    /// Every (row, col) the master frame places in the band, row-major.
    pub flagged: Vec<(usize, usize)>,
    pub all_frames: Vec<(usize, usize)>,
    pub median_only: Vec<(usize, usize)>,
    pub partial: Vec<(usize, usize)>,
}

impl BandReport {
    /// Consistency category of a coordinate, if it was flagged.
    pub fn consistency_of(&self, coord: (usize, usize)) -> Option<Consistency> {
        if self.all_frames.contains(&coord) {
            Some(Consistency::AllFrames)
        } else if self.median_only.contains(&coord) {
            Some(Consistency::MedianOnly)
        } else if self.partial.contains(&coord) {
            Some(Consistency::Partial)
        } else {
            None
        }
    }
}

/// Classification of a master frame against its source stack.
#[derive(Clone, Debug)]
pub struct ClassificationReport {
    pub hot: BandReport,
    pub warm: BandReport,
    /// (|hot| + |warm|) / total pixel count.
    pub rejected_fraction: f64,
    pub total_pixels: usize,
}

/// Classify every pixel of `master` against the threshold bands, then
/// cross-reference flagged pixels with the source stack.
///
/// Both bands are evaluated with one elementwise counting pass over the
/// stack instead of re-scanning frames per flagged pixel, so the cost is
/// O(H*W*N) regardless of how many pixels are flagged.
pub fn classify_pixels(
    master: &Frame,
    frames: &[Frame],
    config: &ThresholdConfig,
) -> Result<ClassificationReport> {
    config.validate()?;
    if frames.is_empty() {
        return Err(DarkCalError::EmptyStack);
    }
    for frame in frames {
        ensure_same_shape(master, frame)?;
    }

    let hot = band_report(master, frames, |v| v >= config.hot_threshold);
    let warm = band_report(master, frames, |v| {
        v > config.warm_low && v < config.hot_threshold
    });

    let total_pixels = master.data.len();
    let rejected = hot.flagged.len() + warm.flagged.len();
    let rejected_fraction = if total_pixels == 0 {
        0.0
    } else {
        rejected as f64 / total_pixels as f64
    };

    debug!(
        hot = hot.flagged.len(),
        warm = warm.flagged.len(),
        rejected_fraction,
        "classified master frame"
    );

    Ok(ClassificationReport {
        hot,
        warm,
        rejected_fraction,
        total_pixels,
    })
}

/// One counting pass: how many source frames fall in the band per pixel,
/// then bucket the master-flagged pixels by that count.
fn band_report<F>(master: &Frame, frames: &[Frame], in_band: F) -> BandReport
where
    F: Fn(f32) -> bool,
{
    let n = frames.len() as u32;
    let mut counts = Array2::<u32>::zeros(master.dim());
    for frame in frames {
        Zip::from(&mut counts).and(&frame.data).for_each(|count, &v| {
            if in_band(v) {
                *count += 1;
            }
        });
    }

    let mut report = BandReport::default();
    for ((row, col), &v) in master.data.indexed_iter() {
        if !in_band(v) {
            continue;
        }
        report.flagged.push((row, col));
        match counts[[row, col]] {
            c if c == n => report.all_frames.push((row, col)),
            0 => report.median_only.push((row, col)),
            _ => report.partial.push((row, col)),
        }
    }
    report
}
