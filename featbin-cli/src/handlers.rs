use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use featbin_core::models::{ChromSizes, FeatureTable};
use featbin_io::write_window_counts;
use featbin_windows::WindowCounter;

/// Matches items from CLAP args before running the window counter
pub fn run_count(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a feature coordinates file is required.")?;

    let chrom_sizes_path = matches
        .get_one::<String>("chrom-sizes")
        .context("A path to a chrom sizes file is required.")?;

    let window_size = *matches
        .get_one::<u64>("window-size")
        .context("--window-size requires an integer value")?;

    let output = matches
        .get_one::<String>("output")
        .context("--output requires a value")?;

    let threads = *matches
        .get_one::<usize>("threads")
        .context("--threads requires an integer value")?;

    let quiet = matches.get_flag("quiet");

    // validate configuration before touching any input
    let counter = WindowCounter::new(window_size)?
        .with_threads(threads)
        .with_progress(!quiet);

    let chrom_sizes = ChromSizes::try_from(chrom_sizes_path.as_str())
        .with_context(|| format!("Failed to load chrom sizes file: {}", chrom_sizes_path))?;

    let features = FeatureTable::try_from(input.as_str())
        .with_context(|| format!("Failed to load feature coordinates file: {}", input))?;

    info!(
        "Counting {} features over {} chromosomes in {} bp windows",
        features.len(),
        chrom_sizes.len(),
        window_size
    );

    let counts = counter.count(&features, &chrom_sizes)?;

    write_window_counts(&counts, output)
        .with_context(|| format!("Failed to write output to {}", output))?;

    info!("Results saved to {}", output);

    Ok(())
}
