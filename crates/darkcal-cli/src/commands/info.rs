use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use darkcal_core::io::fits::read_fits;
use darkcal_core::stats::{mean_stddev, median_value};

#[derive(Args)]
pub struct InfoArgs {
    /// Input FITS file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let (header, frame) = read_fits(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", header.width, header.height);
    println!("BITPIX:      {}", header.bitpix);
    if let Some(ref kind) = header.image_type {
        println!("Image type:  {}", kind);
    }
    if let Some(exp) = header.exposure_secs {
        println!("Exposure:    {} s", exp);
    }
    if let Some(ref inst) = header.instrument {
        println!("Instrument:  {}", inst);
    }
    if let Some(ref date) = header.date_obs {
        println!("Date:        {}", date);
    }

    let (mean, stddev) = mean_stddev(&frame);
    println!("Mean:        {:.1}", mean);
    println!("Std dev:     {:.1}", stddev);
    println!("Median:      {:.1}", median_value(&frame));

    let total_mb = header.data_byte_size() as f64 / (1024.0 * 1024.0);
    println!("Data size:   {:.1} MB", total_mb);

    Ok(())
}
