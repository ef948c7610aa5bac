use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use darkcal_core::pipeline::config::AnalysisConfig;
use darkcal_core::pipeline::{run_bias_series, run_dark_analysis};
use darkcal_core::stats::mean_stddev;

use crate::summary;

#[derive(Args)]
pub struct RunArgs {
    /// Analysis config file (TOML)
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: AnalysisConfig = toml::from_str(&contents).context("Invalid analysis config")?;

    summary::print_run_header(&config);

    let analysis = run_dark_analysis(&config)?;
    let (mean, stddev) = mean_stddev(&analysis.master);
    summary::print_master_summary(
        analysis.master.width(),
        analysis.master.height(),
        analysis.master_median,
        mean,
        stddev,
    );
    summary::print_histogram("Intensity distribution", &analysis.histogram);
    summary::print_histogram(
        &format!(
            "Intensity distribution (<= {})",
            config.histogram.display_cutoff
        ),
        &analysis.filtered_histogram,
    );
    summary::print_classification(&analysis.report, false);

    if let Some(ref path) = config.preview {
        println!("Saved master preview to {}", path.display());
    }

    if let Some(series) = run_bias_series(&config)? {
        summary::print_bias_series(&series);
    }

    Ok(())
}
