use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use darkcal_core::bias::load_bias_series;
use darkcal_core::io::template::PathTemplate;

use crate::summary;

#[derive(Args)]
pub struct BiasArgs {
    /// Dark-frame path pattern with one placeholder for the exposure time
    pub template: String,

    /// Bias frame FITS file
    #[arg(long)]
    pub bias: PathBuf,

    /// Comma-separated exposure times in seconds
    #[arg(long, value_delimiter = ',', required = true)]
    pub exposures: Vec<u32>,
}

pub fn run(args: &BiasArgs) -> Result<()> {
    let template = PathTemplate::new(&args.template)?;

    println!(
        "Combining {} dark frames with bias {}...",
        args.exposures.len(),
        args.bias.display()
    );
    let series = load_bias_series(&args.bias, &template, &args.exposures)?;
    summary::print_bias_series(&series);

    Ok(())
}
