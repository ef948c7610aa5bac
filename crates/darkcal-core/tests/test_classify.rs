use ndarray::{array, Array2};

use darkcal_core::classify::{classify_pixels, Consistency, PixelLabel, ThresholdConfig};
use darkcal_core::error::DarkCalError;
use darkcal_core::frame::Frame;
use darkcal_core::stack::median_combine;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_frame(h: usize, w: usize, fill: f32) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill))
}

fn config() -> ThresholdConfig {
    ThresholdConfig::default()
}

// ---------------------------------------------------------------------------
// ThresholdConfig — band boundaries
// ---------------------------------------------------------------------------

#[test]
fn test_label_boundaries() {
    let c = config();
    // Hot band is closed below, warm band open at both ends
    assert_eq!(c.label(20_000.0), PixelLabel::Hot);
    assert_eq!(c.label(25_000.0), PixelLabel::Hot);
    assert_eq!(c.label(19_999.0), PixelLabel::Warm);
    assert_eq!(c.label(10_001.0), PixelLabel::Warm);
    assert_eq!(c.label(10_000.0), PixelLabel::Normal);
    assert_eq!(c.label(0.0), PixelLabel::Normal);
}

#[test]
fn test_invalid_thresholds_rejected() {
    let err = ThresholdConfig::new(20_000.0, 10_000.0).unwrap_err();
    assert!(matches!(err, DarkCalError::InvalidThresholds { .. }));
    let err = ThresholdConfig::new(20_000.0, 20_000.0).unwrap_err();
    assert!(matches!(err, DarkCalError::InvalidThresholds { .. }));
}

// ---------------------------------------------------------------------------
// classify_pixels — consistency categories
// ---------------------------------------------------------------------------

#[test]
fn test_hot_in_all_frames() {
    // Exactly at the threshold in the master and in every frame
    let frames: Vec<Frame> = (0..3).map(|_| make_frame(2, 2, 20_000.0)).collect();
    let master = median_combine(&frames).unwrap();

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert_eq!(report.hot.flagged.len(), 4);
    assert_eq!(report.hot.all_frames.len(), 4);
    assert!(report.hot.median_only.is_empty());
    assert!(report.hot.partial.is_empty());
    assert!(report.warm.flagged.is_empty());
}

#[test]
fn test_hot_in_median_only() {
    // Master hot at (0, 0) while every source frame stays below the band
    let mut master = make_frame(2, 2, 100.0);
    master.data[[0, 0]] = 25_000.0;
    let frames: Vec<Frame> = (0..3).map(|_| make_frame(2, 2, 15_000.0)).collect();

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert_eq!(report.hot.flagged, vec![(0, 0)]);
    assert_eq!(report.hot.median_only, vec![(0, 0)]);
    assert!(report.hot.all_frames.is_empty());
    assert!(report.hot.partial.is_empty());
}

#[test]
fn test_hot_partial() {
    // Two of three frames hot at the flagged pixel
    let mut f1 = make_frame(2, 2, 100.0);
    let mut f2 = make_frame(2, 2, 100.0);
    let f3 = make_frame(2, 2, 100.0);
    f1.data[[1, 1]] = 22_000.0;
    f2.data[[1, 1]] = 21_000.0;
    let frames = vec![f1, f2, f3];
    let master = median_combine(&frames).unwrap();
    assert_eq!(master.data[[1, 1]], 21_000.0);

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert_eq!(report.hot.flagged, vec![(1, 1)]);
    assert_eq!(report.hot.partial, vec![(1, 1)]);
    assert!(report.hot.all_frames.is_empty());
    assert!(report.hot.median_only.is_empty());
}

#[test]
fn test_warm_median_only_from_real_median() {
    // Median of {9000, 25000} = 17000 lands in the warm band even though
    // neither source frame does
    let frames = vec![make_frame(1, 1, 9_000.0), make_frame(1, 1, 25_000.0)];
    let master = median_combine(&frames).unwrap();
    assert_eq!(master.data[[0, 0]], 17_000.0);

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert_eq!(report.warm.flagged, vec![(0, 0)]);
    assert_eq!(report.warm.median_only, vec![(0, 0)]);
    assert!(report.hot.flagged.is_empty());
}

#[test]
fn test_warm_band_excludes_hot_pixels() {
    let master = Frame::new(array![[25_000.0, 15_000.0], [100.0, 200.0]]);
    let frames = vec![master.clone()];

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert_eq!(report.hot.flagged, vec![(0, 0)]);
    assert_eq!(report.warm.flagged, vec![(0, 1)]);
}

#[test]
fn test_categories_partition_flagged() {
    // A mix of all three consistency cases in one warm band
    let mut master = make_frame(3, 3, 500.0);
    master.data[[0, 0]] = 12_000.0; // warm in all frames
    master.data[[1, 1]] = 12_000.0; // warm in some frames
    master.data[[2, 2]] = 12_000.0; // warm in no frame

    let mut f1 = make_frame(3, 3, 500.0);
    let mut f2 = make_frame(3, 3, 500.0);
    f1.data[[0, 0]] = 12_000.0;
    f2.data[[0, 0]] = 13_000.0;
    f1.data[[1, 1]] = 12_000.0;
    f2.data[[1, 1]] = 9_000.0;
    let frames = vec![f1, f2];

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert_eq!(report.warm.flagged.len(), 3);
    assert_eq!(report.warm.all_frames, vec![(0, 0)]);
    assert_eq!(report.warm.partial, vec![(1, 1)]);
    assert_eq!(report.warm.median_only, vec![(2, 2)]);
    assert_eq!(
        report.warm.all_frames.len() + report.warm.median_only.len() + report.warm.partial.len(),
        report.warm.flagged.len()
    );
    assert_eq!(report.warm.consistency_of((0, 0)), Some(Consistency::AllFrames));
    assert_eq!(report.warm.consistency_of((1, 1)), Some(Consistency::Partial));
    assert_eq!(
        report.warm.consistency_of((2, 2)),
        Some(Consistency::MedianOnly)
    );
    assert_eq!(report.warm.consistency_of((0, 1)), None);
}

#[test]
fn test_rejected_fraction() {
    let master = Frame::new(array![[25_000.0, 15_000.0], [100.0, 200.0]]);
    let frames = vec![master.clone()];

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert_eq!(report.total_pixels, 4);
    assert!((report.rejected_fraction - 0.5).abs() < 1e-12);
}

#[test]
fn test_clean_master_rejects_nothing() {
    let frames: Vec<Frame> = (0..3).map(|_| make_frame(4, 4, 900.0)).collect();
    let master = median_combine(&frames).unwrap();

    let report = classify_pixels(&master, &frames, &config()).unwrap();
    assert!(report.hot.flagged.is_empty());
    assert!(report.warm.flagged.is_empty());
    assert_eq!(report.rejected_fraction, 0.0);
}

// ---------------------------------------------------------------------------
// classify_pixels — input validation
// ---------------------------------------------------------------------------

#[test]
fn test_empty_stack_error() {
    let master = make_frame(2, 2, 0.0);
    let err = classify_pixels(&master, &[], &config()).unwrap_err();
    assert!(matches!(err, DarkCalError::EmptyStack));
}

#[test]
fn test_shape_mismatch_error() {
    let master = make_frame(2, 2, 0.0);
    let frames = vec![make_frame(3, 3, 0.0)];
    let err = classify_pixels(&master, &frames, &config()).unwrap_err();
    assert!(matches!(err, DarkCalError::ShapeMismatch { .. }));
}

#[test]
fn test_invalid_config_error() {
    let master = make_frame(2, 2, 0.0);
    let frames = vec![master.clone()];
    let bad = ThresholdConfig {
        hot_threshold: 1_000.0,
        warm_low: 2_000.0,
    };
    let err = classify_pixels(&master, &frames, &bad).unwrap_err();
    assert!(matches!(err, DarkCalError::InvalidThresholds { .. }));
}

#[test]
fn test_custom_bands() {
    let thresholds = ThresholdConfig::new(50.0, 100.0).unwrap();
    let master = Frame::new(array![[100.0, 75.0], [50.0, 25.0]]);
    let frames = vec![master.clone()];

    let report = classify_pixels(&master, &frames, &thresholds).unwrap();
    assert_eq!(report.hot.flagged, vec![(0, 0)]);
    assert_eq!(report.warm.flagged, vec![(0, 1)]);
}
