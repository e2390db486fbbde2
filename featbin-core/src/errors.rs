use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatbinError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing feature on line {line}: {reason}")]
    FeatureParseError { line: usize, reason: String },

    #[error("Error parsing chrom sizes on line {line}: {reason}")]
    ChromSizesParseError { line: usize, reason: String },

    #[error("Window size must be a positive integer, got {0}")]
    InvalidWindowSize(u64),

    #[error("Chromosome length must be a positive integer: {0}")]
    InvalidChromLength(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPoolError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeatbinError>;
