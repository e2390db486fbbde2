pub mod chrom_sizes;
pub mod feature;
pub mod feature_table;
pub mod window;

// re-export for cleaner imports
pub use self::chrom_sizes::ChromSizes;
pub use self::feature::Feature;
pub use self::feature_table::FeatureTable;
pub use self::window::{Window, WindowCount};
