//! # featbin-core
//!
//! Data model shared by the featbin crates: parsed feature coordinates
//! ([models::FeatureTable]), chromosome lengths ([models::ChromSizes]) and the
//! window / window count records produced by the counter.
//!
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{FeatbinError, Result};
