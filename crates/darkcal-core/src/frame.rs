use ndarray::Array2;
use std::path::PathBuf;

/// A single calibration exposure.
/// Pixel values are raw detector counts (ADU) stored as f32.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Optional per-frame metadata
    pub metadata: FrameMetadata,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self {
            data,
            metadata: FrameMetadata::default(),
        }
    }

    pub fn with_metadata(data: Array2<f32>, metadata: FrameMetadata) -> Self {
        Self { data, metadata }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Shape as (height, width).
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    /// Position of the frame within its stack, in acquisition order.
    pub frame_index: usize,
    /// Exposure length in seconds, when the source header carries one.
    pub exposure_secs: Option<f64>,
    /// File the frame was decoded from.
    pub source: Option<PathBuf>,
}
