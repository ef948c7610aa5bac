use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::frame::Frame;
use crate::io::fits::read_frame;
use crate::io::template::PathTemplate;
use crate::stack::ensure_same_shape;

/// Dark frames at increasing exposure times, each paired with its
/// bias-added combination. Order follows the input exposure list.
#[derive(Clone, Debug)]
pub struct BiasSeries {
    /// Elementwise dark + bias, one per exposure time.
    pub combined: Vec<Frame>,
    /// The raw dark frames, for comparison.
    pub darks: Vec<Frame>,
}

/// Add the bias frame to each dark frame, elementwise.
///
/// No statistical reduction happens here; this is per-exposure
/// bookkeeping, not combination.
pub fn combine_with_bias(bias: &Frame, darks: &[Frame]) -> Result<Vec<Frame>> {
    let mut combined = Vec::with_capacity(darks.len());
    for dark in darks {
        ensure_same_shape(bias, dark)?;
        let data = &dark.data + &bias.data;
        combined.push(Frame::with_metadata(data, dark.metadata.clone()));
    }
    Ok(combined)
}

/// Load the bias frame and one dark frame per exposure time, returning
/// raw and bias-added stacks in input order.
pub fn load_bias_series(
    bias_path: &Path,
    dark_template: &PathTemplate,
    exposure_times: &[u32],
) -> Result<BiasSeries> {
    let bias = read_frame(bias_path)?;
    info!(path = %bias_path.display(), "loaded bias frame");

    let mut darks = Vec::with_capacity(exposure_times.len());
    for (position, &exposure) in exposure_times.iter().enumerate() {
        let path = dark_template.resolve(exposure);
        let mut dark = read_frame(&path)?;
        dark.metadata.frame_index = position;
        if dark.metadata.exposure_secs.is_none() {
            dark.metadata.exposure_secs = Some(exposure as f64);
        }
        debug!(path = %path.display(), exposure, "loaded dark frame");
        darks.push(dark);
    }

    let combined = combine_with_bias(&bias, &darks)?;
    Ok(BiasSeries { combined, darks })
}
