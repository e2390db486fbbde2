use std::fmt::{self, Display};
use std::str::FromStr;

///
/// Feature struct, one record of a feature coordinate file
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Feature {
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub id: String,
    pub feature_type: String,
}

impl Feature {
    ///
    /// Get the width of the feature
    ///
    pub fn width(&self) -> u64 {
        self.end - self.start
    }

    ///
    /// Get the tab-separated line representation of the feature
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.id, self.feature_type
        )
    }
}

impl FromStr for Feature {
    type Err = String;

    /// Parse a whitespace-delimited `chrom start end id type` line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() != 5 {
            return Err(format!(
                "expected 5 fields (chrom, start, end, id, type), found {}",
                parts.len()
            ));
        }

        let start = parts[1]
            .parse::<u64>()
            .map_err(|_| format!("invalid start coordinate '{}'", parts[1]))?;
        let end = parts[2]
            .parse::<u64>()
            .map_err(|_| format!("invalid end coordinate '{}'", parts[2]))?;

        if end < start {
            return Err(format!("end ({}) is smaller than start ({})", end, start));
        }

        Ok(Feature {
            chr: parts[0].to_owned(),
            start,
            end,
            id: parts[3].to_owned(),
            feature_type: parts[4].to_owned(),
        })
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
