use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use darkcal_core::consts::{DEFAULT_DISPLAY_CUTOFF, DEFAULT_HISTOGRAM_BINS};
use darkcal_core::io::loader::load_stack_with_progress;
use darkcal_core::io::preview::save_preview;
use darkcal_core::io::template::PathTemplate;
use darkcal_core::stack::median_combine;
use darkcal_core::stats::{histogram, histogram_below, mean_stddev, median_value};

use crate::summary;

#[derive(Args)]
pub struct MasterArgs {
    /// Dark-frame path pattern with one `{}` or `{:0N}` placeholder
    pub template: String,

    /// Number of frames to combine (indices 0..N)
    #[arg(long, default_value = "10")]
    pub frames: usize,

    /// Histogram bin count
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub bins: usize,

    /// Upper cutoff (counts) for the filtered histogram
    #[arg(long, default_value_t = DEFAULT_DISPLAY_CUTOFF)]
    pub cutoff: f32,

    /// Save the master frame as a TIFF/PNG preview
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &MasterArgs) -> Result<()> {
    let template = PathTemplate::new(&args.template)?;

    let pb = ProgressBar::new(args.frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Loading [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let indices = (0..args.frames).map(|i| i as u32);
    let frames = load_stack_with_progress(&template, indices, |loaded| {
        pb.set_position(loaded as u64);
    })?;
    pb.finish();

    println!("Combining {} frames (median)...", frames.len());
    let master = median_combine(&frames)?;

    let (mean, stddev) = mean_stddev(&master);
    summary::print_master_summary(
        master.width(),
        master.height(),
        median_value(&master),
        mean,
        stddev,
    );

    let full = histogram(&master, args.bins);
    let filtered = histogram_below(&master, args.bins, args.cutoff);
    summary::print_histogram("Intensity distribution", &full);
    summary::print_histogram(
        &format!("Intensity distribution (<= {})", args.cutoff),
        &filtered,
    );

    if let Some(ref path) = args.output {
        save_preview(&master, path)?;
        println!("Saved master preview to {}", path.display());
    }

    Ok(())
}
