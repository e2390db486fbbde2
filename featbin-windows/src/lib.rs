//! Windowed feature counting.
//!
//! Each chromosome in a [ChromSizes](featbin_core::models::ChromSizes) map is
//! tiled into fixed-size, non-overlapping windows starting at 0; the last
//! window is clipped to the chromosome length. Every feature is counted in
//! the single window that contains its start coordinate.
//!
//! # Example
//!
//! ```no_run
//! use featbin_core::models::{ChromSizes, FeatureTable};
//! use featbin_windows::count_features_in_windows;
//!
//! let features = FeatureTable::try_from("features.txt").unwrap();
//! let chrom_sizes = ChromSizes::try_from("genome.chrom.sizes").unwrap();
//!
//! let counts = count_features_in_windows(&features, &chrom_sizes, 100_000).unwrap();
//! ```

pub mod counter;
pub mod tiling;

// re-exports
pub use counter::{WindowCounter, count_chromosome, count_features_in_windows};
pub use tiling::{ChromosomeTiles, tile_chromosome};
