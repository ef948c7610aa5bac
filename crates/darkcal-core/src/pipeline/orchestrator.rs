use tracing::info;

use crate::bias::{load_bias_series, BiasSeries};
use crate::classify::{classify_pixels, ClassificationReport};
use crate::error::Result;
use crate::frame::Frame;
use crate::io::loader::load_sequence;
use crate::io::preview::save_preview;
use crate::io::template::PathTemplate;
use crate::stack::median_combine;
use crate::stats::{histogram, histogram_below, median_value, Histogram};

use super::config::AnalysisConfig;

/// Everything the dark-frame pipeline produces for one run.
#[derive(Clone, Debug)]
pub struct DarkAnalysis {
    pub master: Frame,
    pub frames_loaded: usize,
    pub master_median: f32,
    pub histogram: Histogram,
    pub filtered_histogram: Histogram,
    pub report: ClassificationReport,
}

/// Load the dark stack, median-combine it and classify the master frame.
pub fn run_dark_analysis(config: &AnalysisConfig) -> Result<DarkAnalysis> {
    config.thresholds.validate()?;

    let template = PathTemplate::new(&config.dark.template)?;
    info!(
        template = %config.dark.template,
        frames = config.dark.frames,
        "loading dark stack"
    );
    let frames = load_sequence(&template, config.dark.frames)?;

    let master = median_combine(&frames)?;
    let master_median = median_value(&master);
    info!(master_median, "combined master dark frame");

    let hist = histogram(&master, config.histogram.bins);
    let filtered = histogram_below(&master, config.histogram.bins, config.histogram.display_cutoff);

    let report = classify_pixels(&master, &frames, &config.thresholds)?;
    info!(
        hot = report.hot.flagged.len(),
        warm = report.warm.flagged.len(),
        rejected_fraction = report.rejected_fraction,
        "classified master frame"
    );

    if let Some(ref path) = config.preview {
        save_preview(&master, path)?;
        info!(path = %path.display(), "saved master preview");
    }

    Ok(DarkAnalysis {
        master,
        frames_loaded: frames.len(),
        master_median,
        histogram: hist,
        filtered_histogram: filtered,
        report,
    })
}

/// Run the independent bias/dark combination series, if configured.
pub fn run_bias_series(config: &AnalysisConfig) -> Result<Option<BiasSeries>> {
    let Some(ref bias) = config.bias else {
        return Ok(None);
    };
    let template = PathTemplate::new(&bias.dark_template)?;
    info!(
        bias = %bias.bias_file.display(),
        exposures = bias.exposure_times.len(),
        "combining darks with bias"
    );
    let series = load_bias_series(&bias.bias_file, &template, &bias.exposure_times)?;
    Ok(Some(series))
}
