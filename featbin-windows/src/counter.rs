use fxhash::FxHashMap;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;

use featbin_core::models::{ChromSizes, FeatureTable, Window, WindowCount};
use featbin_core::{FeatbinError, Result};

use crate::tiling::ChromosomeTiles;

///
/// Count features in non-overlapping windows for each chromosome.
///
/// Chromosomes are visited in ascending name order. A feature is assigned to
/// the window containing its start (`start <= pos < end`); features on
/// chromosomes absent from `chrom_sizes`, or starting at or past the
/// chromosome end, are not counted.
///
/// # Arguments
/// - table: parsed features
/// - chrom_sizes: chromosomes to tile and their lengths
/// - window_size: window width, must be positive
///
pub fn count_features_in_windows(
    table: &FeatureTable,
    chrom_sizes: &ChromSizes,
    window_size: u64,
) -> Result<Vec<WindowCount>> {
    WindowCounter::new(window_size)?.count(table, chrom_sizes)
}

///
/// Windowed feature counter. Single threaded by default; with more than one
/// thread chromosomes are counted concurrently and merged back in sorted
/// order, so the output is the same either way.
///
#[derive(Debug, Clone)]
pub struct WindowCounter {
    window_size: u64,
    threads: usize,
    progress: bool,
}

impl WindowCounter {
    pub fn new(window_size: u64) -> Result<Self> {
        if window_size == 0 {
            return Err(FeatbinError::InvalidWindowSize(window_size));
        }
        Ok(WindowCounter {
            window_size,
            threads: 1,
            progress: false,
        })
    }

    /// Values below one are treated as one.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn count(&self, table: &FeatureTable, chrom_sizes: &ChromSizes) -> Result<Vec<WindowCount>> {
        let starts = table.starts_by_chromosome();
        log_skipped_chromosomes(&starts, chrom_sizes);

        let chroms: Vec<(&str, u64)> = chrom_sizes.iter().collect();
        let bar = self.progress_bar(chroms.len());
        let no_starts: Vec<u64> = Vec::new();

        let per_chrom = |&(chr, chrom_len): &(&str, u64)| -> Result<Vec<WindowCount>> {
            let chr_starts = starts.get(chr).unwrap_or(&no_starts);
            let counts = count_chromosome(chr, chrom_len, chr_starts, self.window_size);
            bar.inc(1);
            counts
        };

        let per_chrom_counts: Vec<Vec<WindowCount>> = if self.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()
                .map_err(|e| FeatbinError::ThreadPoolError(e.to_string()))?;

            // collect on an indexed parallel iterator keeps the input order
            pool.install(|| {
                chroms
                    .par_iter()
                    .map(per_chrom)
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            chroms.iter().map(per_chrom).collect::<Result<Vec<_>>>()?
        };

        bar.finish_and_clear();

        Ok(per_chrom_counts.into_iter().flatten().collect())
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        if let Ok(style) =
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        {
            bar.set_style(style.progress_chars("##-"));
        }
        bar
    }
}

///
/// Count the starts of a single chromosome into its windows.
///
/// Window `i` covers `[i * window_size, min((i + 1) * window_size, chrom_len))`,
/// so a start below `chrom_len` belongs to window `start / window_size`.
///
pub fn count_chromosome(
    chr: &str,
    chrom_len: u64,
    starts: &[u64],
    window_size: u64,
) -> Result<Vec<WindowCount>> {
    let tiles = ChromosomeTiles::new(chrom_len, window_size)?;
    let mut counts: Vec<u64> = vec![0; tiles.num_windows()];

    let mut out_of_range: usize = 0;
    for &start in starts {
        if start < chrom_len {
            counts[(start / window_size) as usize] += 1;
        } else {
            out_of_range += 1;
        }
    }

    if out_of_range > 0 {
        debug!(
            "{}: {} feature(s) start at or beyond the chromosome end ({}) and were not counted",
            chr, out_of_range, chrom_len
        );
    }

    Ok(tiles
        .zip(counts)
        .map(|((start, end), count)| {
            WindowCount::new(
                Window {
                    chr: chr.to_owned(),
                    start,
                    end,
                },
                count,
            )
        })
        .collect())
}

fn log_skipped_chromosomes(starts: &FxHashMap<&str, Vec<u64>>, chrom_sizes: &ChromSizes) {
    let mut skipped: Vec<(&str, usize)> = starts
        .iter()
        .filter(|(chr, _)| !chrom_sizes.contains(chr))
        .map(|(chr, chr_starts)| (*chr, chr_starts.len()))
        .collect();

    if skipped.is_empty() {
        return;
    }

    skipped.sort_unstable();
    for (chr, n) in skipped {
        debug!("Skipping {} feature(s) on '{}': not in chrom sizes", n, chr);
    }
}
