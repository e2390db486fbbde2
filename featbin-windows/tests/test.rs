use std::path::PathBuf;

use rstest::*;

use featbin_core::models::{ChromSizes, FeatureTable, WindowCount};
use featbin_windows::{WindowCounter, count_features_in_windows, tile_chromosome};

#[fixture]
fn path_to_data() -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/featbin")
}

fn rows(counts: &[WindowCount]) -> Vec<(&str, u64, u64, u64)> {
    counts
        .iter()
        .map(|c| (c.chr.as_str(), c.start, c.end, c.count))
        .collect()
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_count_from_files(path_to_data: PathBuf) {
        let table = FeatureTable::try_from(path_to_data.join("features.txt")).unwrap();
        let chrom_sizes = ChromSizes::try_from(path_to_data.join("chrom_sizes.txt")).unwrap();

        let counts = count_features_in_windows(&table, &chrom_sizes, 10000).unwrap();

        assert_eq!(
            rows(&counts),
            vec![
                ("Chr6", 0, 10000, 4),
                ("Chr6", 10000, 20000, 1),
                ("Chr7", 0, 10000, 1),
                ("Chr7", 10000, 15000, 1),
            ]
        );
    }

    #[rstest]
    fn test_gzipped_input_matches_plain(path_to_data: PathBuf) {
        let plain = FeatureTable::try_from(path_to_data.join("features.txt")).unwrap();
        let gzipped = FeatureTable::try_from(path_to_data.join("features.txt.gz")).unwrap();
        let chrom_sizes = ChromSizes::try_from(path_to_data.join("chrom_sizes.txt")).unwrap();

        assert_eq!(
            count_features_in_windows(&plain, &chrom_sizes, 2500).unwrap(),
            count_features_in_windows(&gzipped, &chrom_sizes, 2500).unwrap()
        );
    }

    #[rstest]
    fn test_edge_cases_from_files(path_to_data: PathBuf) {
        let table = FeatureTable::try_from(path_to_data.join("features_edge.txt")).unwrap();
        let chrom_sizes = ChromSizes::try_from(path_to_data.join("chrom_sizes_edge.txt")).unwrap();

        let counts = count_features_in_windows(&table, &chrom_sizes, 10000).unwrap();

        // chrA sorts before chrB even though it is listed second;
        // chrZ is not in the chrom sizes and start 25000 is past the end of chrA
        assert_eq!(
            rows(&counts),
            vec![
                ("chrA", 0, 10000, 1),
                ("chrA", 10000, 20000, 1),
                ("chrA", 20000, 25000, 1),
                ("chrB", 0, 3000, 2),
            ]
        );
    }

    #[rstest]
    fn test_counts_follow_tiling(
        path_to_data: PathBuf,
        #[values(1000, 4096, 10000, 100000)] window_size: u64,
    ) {
        let table = FeatureTable::try_from(path_to_data.join("features.txt")).unwrap();
        let chrom_sizes = ChromSizes::try_from(path_to_data.join("chrom_sizes.txt")).unwrap();

        let counts = WindowCounter::new(window_size)
            .unwrap()
            .with_threads(2)
            .count(&table, &chrom_sizes)
            .unwrap();

        for (chr, chrom_len) in chrom_sizes.iter() {
            let chr_counts: Vec<&WindowCount> = counts.iter().filter(|c| c.chr == chr).collect();
            let windows = tile_chromosome(chr, chrom_len, window_size).unwrap();

            assert_eq!(chr_counts.len(), windows.len());
            for (count, window) in chr_counts.iter().zip(&windows) {
                assert_eq!((count.start, count.end), (window.start, window.end));
            }

            let expected: u64 = table
                .records_for_chromosome(chr)
                .filter(|f| f.start < chrom_len)
                .count() as u64;
            assert_eq!(chr_counts.iter().map(|c| c.count).sum::<u64>(), expected);
        }
    }
}
