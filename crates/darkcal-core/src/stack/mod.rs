pub mod median;

pub use median::median_combine;

use crate::error::{DarkCalError, Result};
use crate::frame::Frame;

/// Check that `frame` matches the reference frame's dimensions.
pub fn ensure_same_shape(reference: &Frame, frame: &Frame) -> Result<()> {
    let (h, w) = reference.dim();
    let (fh, fw) = frame.dim();
    if (fh, fw) != (h, w) {
        return Err(DarkCalError::ShapeMismatch {
            expected_height: h,
            expected_width: w,
            height: fh,
            width: fw,
        });
    }
    Ok(())
}

/// Validate that a stack is non-empty and uniformly shaped, returning the
/// common (height, width).
pub fn stack_dim(frames: &[Frame]) -> Result<(usize, usize)> {
    let first = frames.first().ok_or(DarkCalError::EmptyStack)?;
    for frame in &frames[1..] {
        ensure_same_shape(first, frame)?;
    }
    Ok(first.dim())
}
