use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::warn;

use crate::errors::{FeatbinError, Result};
use crate::utils::{get_dynamic_reader, is_skippable_line};

///
/// Mapping of chromosome name to length. This is the authoritative set of
/// chromosomes that get tiled; iteration is always in ascending name order.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChromSizes {
    sizes: BTreeMap<String, u64>,
}

impl ChromSizes {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Parse a chrom sizes file: one `name length` pair per line.
    /// If a name appears twice the last length wins.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut chrom_sizes = ChromSizes::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if is_skippable_line(&line) {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 2 {
                return Err(FeatbinError::ChromSizesParseError {
                    line: idx + 1,
                    reason: format!("expected 2 fields (name, length), found {}", parts.len()),
                });
            }

            let length = parts[1]
                .parse::<u64>()
                .map_err(|_| FeatbinError::ChromSizesParseError {
                    line: idx + 1,
                    reason: format!("invalid length '{}'", parts[1]),
                })?;

            if let Some(previous) = chrom_sizes.insert(parts[0], length)? {
                warn!(
                    "Chromosome '{}' listed more than once (line {}); using {} instead of {}",
                    parts[0],
                    idx + 1,
                    length,
                    previous
                );
            }
        }

        Ok(chrom_sizes)
    }

    ///
    /// Insert a chromosome, returning the previous length if it was present.
    ///
    /// # Arguments
    /// - chr: chromosome name
    /// - length: chromosome length, must be positive
    ///
    pub fn insert(&mut self, chr: &str, length: u64) -> Result<Option<u64>> {
        if length == 0 {
            return Err(FeatbinError::InvalidChromLength(chr.to_owned()));
        }
        Ok(self.sizes.insert(chr.to_owned(), length))
    }

    pub fn get(&self, chr: &str) -> Option<u64> {
        self.sizes.get(chr).copied()
    }

    pub fn contains(&self, chr: &str) -> bool {
        self.sizes.contains_key(chr)
    }

    ///
    /// Iterate `(name, length)` pairs in ascending lexicographic name order
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.sizes.iter().map(|(chr, len)| (chr.as_str(), *len))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl TryFrom<&Path> for ChromSizes {
    type Error = FeatbinError;

    fn try_from(value: &Path) -> Result<Self> {
        ChromSizes::from_reader(get_dynamic_reader(value)?)
    }
}

impl TryFrom<&str> for ChromSizes {
    type Error = FeatbinError;

    fn try_from(value: &str) -> Result<Self> {
        ChromSizes::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for ChromSizes {
    type Error = FeatbinError;

    fn try_from(value: PathBuf) -> Result<Self> {
        ChromSizes::try_from(value.as_path())
    }
}

impl TryFrom<Vec<(String, u64)>> for ChromSizes {
    type Error = FeatbinError;

    fn try_from(value: Vec<(String, u64)>) -> Result<Self> {
        let mut chrom_sizes = ChromSizes::new();
        for (chr, length) in value {
            chrom_sizes.insert(&chr, length)?;
        }
        Ok(chrom_sizes)
    }
}
