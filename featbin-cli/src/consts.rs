pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BIN_NAME: &str = "featbin";

pub const DEFAULT_WINDOW_SIZE: &str = "100000";
pub const DEFAULT_OUT: &str = "window_counts.tsv";
pub const DEFAULT_THREADS: &str = "1";
