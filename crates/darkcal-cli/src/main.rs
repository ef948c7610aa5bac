mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "darkcal", about = "CCD calibration-frame analysis tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show FITS file metadata
    Info(commands::info::InfoArgs),
    /// Median-combine dark frames into a master dark
    Master(commands::master::MasterArgs),
    /// Classify hot and warm pixels in a master dark
    Classify(commands::classify::ClassifyArgs),
    /// Combine dark frames of increasing exposure with a bias frame
    Bias(commands::bias::BiasArgs),
    /// Run the full analysis pipeline from a TOML config
    Run(commands::run::RunArgs),
    /// Print or save a default analysis config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Master(args) => commands::master::run(args),
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Bias(args) => commands::bias::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
