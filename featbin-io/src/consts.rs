pub const TSV_HEADER: [&str; 4] = ["chromosome", "window_start", "window_end", "feature_count"];
pub const GZ_EXTENSION: &str = "gz";
