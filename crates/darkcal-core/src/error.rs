use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DarkCalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid FITS file: {0}")]
    InvalidFits(String),

    #[error("Unsupported BITPIX value: {0}")]
    UnsupportedBitpix(i64),

    #[error("Frame shape mismatch: expected {expected_height}x{expected_width}, got {height}x{width}")]
    ShapeMismatch {
        expected_height: usize,
        expected_width: usize,
        height: usize,
        width: usize,
    },

    #[error("Empty frame stack")]
    EmptyStack,

    #[error("Invalid threshold bands: warm_low {warm_low} must be below hot_threshold {hot_threshold}")]
    InvalidThresholds { warm_low: f32, hot_threshold: f32 },

    #[error("Invalid path template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DarkCalError>;
