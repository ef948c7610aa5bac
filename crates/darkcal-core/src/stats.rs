use crate::frame::Frame;

/// Median of all pixel values in a frame.
pub fn median_value(frame: &Frame) -> f32 {
    let mut values: Vec<f32> = frame.data.iter().copied().collect();
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        *values.select_nth_unstable_by(n / 2, |a, b| a.total_cmp(b)).1
    } else {
        let mid = n / 2;
        values.select_nth_unstable_by(mid, |a, b| a.total_cmp(b));
        values[..mid].select_nth_unstable_by(mid - 1, |a, b| a.total_cmp(b));
        (values[mid - 1] + values[mid]) / 2.0
    }
}

/// Mean and standard deviation of pixel values.
pub fn mean_stddev(frame: &Frame) -> (f64, f64) {
    let n = frame.data.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let sum: f64 = frame.data.iter().map(|&v| v as f64).sum();
    let mean = sum / n;
    let var: f64 = frame
        .data
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}

/// Binned pixel-intensity distribution over the observed [min, max].
#[derive(Clone, Debug)]
pub struct Histogram {
    pub counts: Vec<u64>,
    pub min: f32,
    pub max: f32,
}

impl Histogram {
    /// Width of one bin in counts.
    pub fn bin_width(&self) -> f32 {
        (self.max - self.min) / self.counts.len() as f32
    }

    /// Lower and upper edge of bin `i`. The last bin is inclusive at max.
    pub fn bin_range(&self, i: usize) -> (f32, f32) {
        let width = self.bin_width();
        (
            self.min + i as f32 * width,
            self.min + (i + 1) as f32 * width,
        )
    }

    /// Total number of binned values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Histogram of all pixel intensities.
pub fn histogram(frame: &Frame, bins: usize) -> Histogram {
    bin_values(frame.data.iter().copied().collect(), bins)
}

/// Histogram restricted to intensities at or below `cutoff`, used to
/// inspect the bulk of the distribution without the hot-pixel tail.
pub fn histogram_below(frame: &Frame, bins: usize, cutoff: f32) -> Histogram {
    bin_values(
        frame.data.iter().copied().filter(|&v| v <= cutoff).collect(),
        bins,
    )
}

fn bin_values(values: Vec<f32>, bins: usize) -> Histogram {
    let bins = bins.max(1);
    let mut counts = vec![0u64; bins];
    if values.is_empty() {
        return Histogram {
            counts,
            min: 0.0,
            max: 0.0,
        };
    }

    let (mut min, mut max) = (f32::INFINITY, f32::NEG_INFINITY);
    for &v in &values {
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    for &v in &values {
        let bin = if range > 0.0 {
            (((v - min) / range) * bins as f32) as usize
        } else {
            0
        };
        counts[bin.min(bins - 1)] += 1;
    }
    Histogram { counts, min, max }
}
