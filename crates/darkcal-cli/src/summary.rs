use console::Style;

use darkcal_core::bias::BiasSeries;
use darkcal_core::classify::{BandReport, ClassificationReport};
use darkcal_core::pipeline::config::AnalysisConfig;
use darkcal_core::stats::{mean_stddev, Histogram};

/// Rows a rendered histogram is condensed to.
const HISTOGRAM_ROWS: usize = 20;
/// Maximum bar width in characters.
const HISTOGRAM_BAR_WIDTH: usize = 40;
/// Flagged coordinates printed per consistency category in list mode.
const COORD_LIST_LIMIT: usize = 50;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    flag: Style,
    bar: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            flag: Style::new().red().bold(),
            bar: Style::new().blue(),
        }
    }
}

pub fn print_run_header(config: &AnalysisConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Calibration Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Darks"),
        s.value.apply_to(&config.dark.template)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(config.dark.frames)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Hot >="),
        s.value.apply_to(config.thresholds.hot_threshold)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Warm >"),
        s.value.apply_to(config.thresholds.warm_low)
    );
    if let Some(ref bias) = config.bias {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Bias"),
            s.value.apply_to(bias.bias_file.display())
        );
        println!(
            "  {:<14}{:?}",
            s.label.apply_to("Exposures"),
            bias.exposure_times
        );
    }
    println!();
}

pub fn print_master_summary(width: usize, height: usize, median: f32, mean: f64, stddev: f64) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Master Dark"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{width}x{height}"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Median"),
        s.value.apply_to(format!("{median:.1}"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mean"),
        s.value.apply_to(format!("{mean:.1}"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Std dev"),
        s.value.apply_to(format!("{stddev:.1}"))
    );
    println!();
}

/// Render a histogram as a condensed horizontal bar chart: bins are
/// grouped so the output never exceeds a fixed number of rows.
pub fn print_histogram(title: &str, hist: &Histogram) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to(title));
    let total = hist.total();
    if total == 0 {
        println!("    {}", s.label.apply_to("no values in range"));
        println!();
        return;
    }

    let group_size = hist.counts.len().div_ceil(HISTOGRAM_ROWS);
    let groups: Vec<u64> = hist
        .counts
        .chunks(group_size)
        .map(|chunk| chunk.iter().sum())
        .collect();
    let peak = groups.iter().copied().max().unwrap_or(1).max(1);

    for (g, &count) in groups.iter().enumerate() {
        let (lo, _) = hist.bin_range(g * group_size);
        let (_, hi) = hist.bin_range(((g + 1) * group_size).min(hist.counts.len()) - 1);
        let bar_len = ((count as f64 / peak as f64) * HISTOGRAM_BAR_WIDTH as f64).round() as usize;
        println!(
            "    {:>8.0}..{:<8.0} {:>9} {}",
            lo,
            hi,
            count,
            s.bar.apply_to("\u{2587}".repeat(bar_len))
        );
    }
    println!(
        "    {:<14}{}",
        s.label.apply_to("Total"),
        s.value.apply_to(total)
    );
    println!();
}

pub fn print_classification(report: &ClassificationReport, list: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Pixel Classification"));
    print_band(&s, "Hot", &report.hot, list);
    print_band(&s, "Warm", &report.warm, list);
    println!(
        "    {:<14}{}",
        s.label.apply_to("Total pixels"),
        s.value.apply_to(report.total_pixels)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Rejected"),
        s.flag
            .apply_to(format!("{:.6}%", report.rejected_fraction * 100.0))
    );
    println!();
}

fn print_band(s: &Styles, name: &str, band: &BandReport, list: bool) {
    println!("    {}", s.header.apply_to(name));
    println!(
        "      {:<12}{}",
        s.label.apply_to("Flagged"),
        s.flag.apply_to(band.flagged.len())
    );
    println!(
        "      {:<12}{}",
        s.label.apply_to("All frames"),
        s.value.apply_to(band.all_frames.len())
    );
    println!(
        "      {:<12}{}",
        s.label.apply_to("Median only"),
        s.value.apply_to(band.median_only.len())
    );
    println!(
        "      {:<12}{}",
        s.label.apply_to("Partial"),
        s.value.apply_to(band.partial.len())
    );

    if list {
        print_coords(s, "all frames", &band.all_frames);
        print_coords(s, "median only", &band.median_only);
        print_coords(s, "partial", &band.partial);
    }
}

fn print_coords(s: &Styles, label: &str, coords: &[(usize, usize)]) {
    if coords.is_empty() {
        return;
    }
    let shown: Vec<String> = coords
        .iter()
        .take(COORD_LIST_LIMIT)
        .map(|(row, col)| format!("({row}, {col})"))
        .collect();
    let suffix = if coords.len() > COORD_LIST_LIMIT {
        format!(" ... and {} more", coords.len() - COORD_LIST_LIMIT)
    } else {
        String::new()
    };
    println!(
        "      {:<12}{}{}",
        s.label.apply_to(label),
        shown.join(" "),
        s.label.apply_to(suffix)
    );
}

pub fn print_bias_series(series: &BiasSeries) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Bias Combination"));
    println!(
        "    {:>10}  {:>12}  {:>12}",
        s.label.apply_to("Exposure"),
        s.label.apply_to("Dark mean"),
        s.label.apply_to("Dark+bias")
    );
    for (dark, combined) in series.darks.iter().zip(&series.combined) {
        let exposure = dark.metadata.exposure_secs.unwrap_or_default();
        let (dark_mean, _) = mean_stddev(dark);
        let (combined_mean, _) = mean_stddev(combined);
        println!(
            "    {:>9}s  {:>12.1}  {:>12.1}",
            exposure, dark_mean, combined_mean
        );
    }
    println!();
}
