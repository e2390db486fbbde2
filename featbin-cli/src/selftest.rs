use std::io::{self, Cursor};

use anyhow::{Result, bail};
use log::info;

use featbin_core::models::{ChromSizes, FeatureTable, WindowCount};
use featbin_io::WindowCountWrite;
use featbin_windows::count_features_in_windows;

const SELF_TEST_FEATURES: &str = "Chr6\t1000\t2000\tID1\tTYPE1
Chr6\t2500\t3500\tID2\tTYPE1
Chr6\t9500\t11000\tID3\tTYPE1
Chr6\t9750\t10500\tID4\tTYPE1
Chr6\t15000\t16000\tID5\tTYPE1
Chr7\t500\t1500\tID6\tTYPE1
Chr7\t11000\t12000\tID7\tTYPE1";

const SELF_TEST_CHROM_SIZES: &str = "Chr6\t20000\nChr7\t15000\n";

const SELF_TEST_WINDOW_SIZE: u64 = 10000;

const SELF_TEST_EXPECTED: [(&str, u64, u64, u64); 4] = [
    ("Chr6", 0, 10000, 4),
    ("Chr6", 10000, 20000, 1),
    ("Chr7", 0, 10000, 1),
    ("Chr7", 10000, 15000, 1),
];

///
/// Count the embedded scenario in memory, print the table and check it.
/// Never reads or writes files.
///
pub fn run_self_test() -> Result<()> {
    info!("Running self-test with {} bp windows", SELF_TEST_WINDOW_SIZE);

    let features = FeatureTable::from_reader(Cursor::new(SELF_TEST_FEATURES))?;
    let chrom_sizes = ChromSizes::from_reader(Cursor::new(SELF_TEST_CHROM_SIZES))?;

    let counts = count_features_in_windows(&features, &chrom_sizes, SELF_TEST_WINDOW_SIZE)?;

    counts.write_tsv_to(io::stdout().lock())?;

    check_tiling(&counts, &chrom_sizes)?;

    let observed: Vec<(&str, u64, u64, u64)> = counts
        .iter()
        .map(|c| (c.chr.as_str(), c.start, c.end, c.count))
        .collect();
    if observed != SELF_TEST_EXPECTED {
        bail!(
            "Self-test failed: expected {:?}, got {:?}",
            SELF_TEST_EXPECTED,
            observed
        );
    }

    info!("All tests passed successfully!");

    Ok(())
}

///
/// Check that the windows of every chromosome tile `[0, length)` exactly.
///
pub fn check_tiling(counts: &[WindowCount], chrom_sizes: &ChromSizes) -> Result<()> {
    for (chr, chrom_len) in chrom_sizes.iter() {
        let windows: Vec<&WindowCount> = counts.iter().filter(|c| c.chr == chr).collect();

        let Some(last) = windows.last() else {
            bail!("No windows produced for {}", chr);
        };
        if last.end != chrom_len {
            bail!(
                "Last window for {} should end at {}, but ends at {}",
                chr,
                chrom_len,
                last.end
            );
        }
        if windows[0].start != 0 {
            bail!("First window for {} starts at {}", chr, windows[0].start);
        }
        for pair in windows.windows(2) {
            if pair[0].end != pair[1].start {
                bail!(
                    "Windows for {} are not contiguous: {}-{} then {}-{}",
                    chr,
                    pair[0].start,
                    pair[0].end,
                    pair[1].start,
                    pair[1].end
                );
            }
        }
        if let Some(w) = windows.iter().find(|w| w.end > chrom_len) {
            bail!(
                "Found window {}-{} extending beyond the length of {}",
                w.start,
                w.end,
                chr
            );
        }
    }

    Ok(())
}
