use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use darkcal_core::classify::ThresholdConfig;
use darkcal_core::pipeline::config::{
    AnalysisConfig, BiasConfig, DarkStackConfig, HistogramConfig,
};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default AnalysisConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = AnalysisConfig {
        preview: Some(PathBuf::from("master.tiff")),
        dark: DarkStackConfig {
            template: "darks/frame.{:08}.DARK.FIT".to_string(),
            frames: 10,
        },
        thresholds: ThresholdConfig::default(),
        histogram: HistogramConfig::default(),
        bias: Some(BiasConfig {
            bias_file: PathBuf::from("bias/bias.00000000.BIAS.FIT"),
            dark_template: "darks/dark_{}_sec.00000000.DARK.FIT".to_string(),
            exposure_times: vec![10, 20, 30, 40, 50, 60],
        }),
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
