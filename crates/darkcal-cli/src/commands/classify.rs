use anyhow::Result;
use clap::Args;

use darkcal_core::classify::{classify_pixels, ThresholdConfig};
use darkcal_core::consts::{DEFAULT_HOT_THRESHOLD, DEFAULT_WARM_LOW};
use darkcal_core::io::loader::load_sequence;
use darkcal_core::io::template::PathTemplate;
use darkcal_core::stack::median_combine;

use crate::summary;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Dark-frame path pattern with one `{}` or `{:0N}` placeholder
    pub template: String,

    /// Number of frames to combine (indices 0..N)
    #[arg(long, default_value = "10")]
    pub frames: usize,

    /// Hot-pixel threshold in counts
    #[arg(long, default_value_t = DEFAULT_HOT_THRESHOLD)]
    pub hot: f32,

    /// Lower bound (exclusive) of the warm band in counts
    #[arg(long, default_value_t = DEFAULT_WARM_LOW)]
    pub warm_low: f32,

    /// List flagged pixel coordinates, not just counts
    #[arg(long)]
    pub list: bool,
}

pub fn run(args: &ClassifyArgs) -> Result<()> {
    let thresholds = ThresholdConfig::new(args.warm_low, args.hot)?;
    let template = PathTemplate::new(&args.template)?;

    println!("Reading {} dark frames...", args.frames);
    let frames = load_sequence(&template, args.frames)?;

    println!("Combining (median)...");
    let master = median_combine(&frames)?;

    let report = classify_pixels(&master, &frames, &thresholds)?;
    summary::print_classification(&report, args.list);

    Ok(())
}
