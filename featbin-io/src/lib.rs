//! # Output utilities for window counts.
//!
//! Writes the per-window count table as a tab-separated file with a
//! `chromosome window_start window_end feature_count` header, plain or gzipped.
//!
pub mod consts;
pub mod tsv;

// re-expose core functions
pub use consts::*;
pub use tsv::*;
