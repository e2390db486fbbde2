use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use fxhash::FxHashMap;

use crate::errors::{FeatbinError, Result};
use crate::models::Feature;
use crate::utils::{get_dynamic_reader, get_dynamic_reader_w_stdin, is_skippable_line};

///
/// FeatureTable struct, the parsed, immutable representation of a
/// feature coordinate file.
///
#[derive(Clone, Debug, Default)]
pub struct FeatureTable {
    features: Vec<Feature>,
    path: Option<PathBuf>,
}

impl FeatureTable {
    ///
    /// Parse a feature table from any buffered reader.
    ///
    /// Blank, comment (`#`), `track` and `browser` lines are skipped. Any other
    /// malformed line aborts the parse.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut features: Vec<Feature> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if is_skippable_line(&line) {
                continue;
            }

            let feature =
                Feature::from_str(&line).map_err(|reason| FeatbinError::FeatureParseError {
                    line: idx + 1,
                    reason,
                })?;
            features.push(feature);
        }

        Ok(FeatureTable {
            features,
            path: None,
        })
    }

    ///
    /// Iterate through features located on a specific chromosome,
    /// in original input order.
    ///
    /// # Arguments
    /// - chr: chromosome name
    ///
    pub fn records_for_chromosome<'a>(&'a self, chr: &'a str) -> impl Iterator<Item = &'a Feature> {
        self.features.iter().filter(move |f| f.chr == chr)
    }

    ///
    /// Group start coordinates by chromosome in a single pass.
    /// Starts keep their input order within each chromosome.
    ///
    pub fn starts_by_chromosome(&self) -> FxHashMap<&str, Vec<u64>> {
        let mut starts: FxHashMap<&str, Vec<u64>> = FxHashMap::default();
        for feature in &self.features {
            starts
                .entry(feature.chr.as_str())
                .or_default()
                .push(feature.start);
        }
        starts
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl TryFrom<&Path> for FeatureTable {
    type Error = FeatbinError;

    ///
    /// Create a new [FeatureTable] from a coordinate file on disk.
    ///
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        let mut table = FeatureTable::from_reader(reader)?;
        table.path = Some(value.to_owned());
        Ok(table)
    }
}

impl TryFrom<&str> for FeatureTable {
    type Error = FeatbinError;

    /// `-` reads from stdin.
    fn try_from(value: &str) -> Result<Self> {
        let reader = get_dynamic_reader_w_stdin(value)?;
        let mut table = FeatureTable::from_reader(reader)?;
        if value != "-" {
            table.path = Some(PathBuf::from(value));
        }
        Ok(table)
    }
}

impl TryFrom<PathBuf> for FeatureTable {
    type Error = FeatbinError;

    fn try_from(value: PathBuf) -> Result<Self> {
        FeatureTable::try_from(value.as_path())
    }
}

impl From<Vec<Feature>> for FeatureTable {
    fn from(features: Vec<Feature>) -> Self {
        FeatureTable {
            features,
            path: None,
        }
    }
}

impl<'a> IntoIterator for &'a FeatureTable {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

impl Display for FeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureTable with {} features.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/featbin")
            .join(file_name)
    }

    #[fixture]
    fn table() -> FeatureTable {
        FeatureTable::try_from(get_test_path("features.txt")).unwrap()
    }

    #[rstest]
    fn test_open_from_path(table: FeatureTable) {
        assert_eq!(table.len(), 7);
        assert_eq!(table.path(), Some(get_test_path("features.txt").as_path()));
    }

    #[rstest]
    fn test_open_from_string() {
        let path = get_test_path("features.txt");
        let table = FeatureTable::try_from(path.to_str().unwrap()).unwrap();
        assert_eq!(table.len(), 7);
    }

    #[rstest]
    fn test_open_gzipped() {
        let table = FeatureTable::try_from(get_test_path("features.txt.gz")).unwrap();
        assert_eq!(table.len(), 7);
    }

    #[rstest]
    fn test_open_with_headers() {
        let table = FeatureTable::try_from(get_test_path("features_headers.txt")).unwrap();
        let ids: Vec<&str> = (&table).into_iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["g3", "g1", "g2"]);
    }

    #[rstest]
    fn test_contig_named_like_track_line_is_kept() {
        let input = "tracking_1\t5\t6\ta\tSNV\nchr1\t5\t6\tb\tSNV\n";
        let table = FeatureTable::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records_for_chromosome("tracking_1").count(), 1);
    }

    #[rstest]
    fn test_open_malformed_reports_line() {
        let err = FeatureTable::try_from(get_test_path("features_malformed.txt")).unwrap_err();
        match err {
            FeatbinError::FeatureParseError { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_open_missing_file() {
        let result = FeatureTable::try_from(get_test_path("no_such_file.txt"));
        assert!(matches!(result, Err(FeatbinError::FileReadError(_))));
    }

    #[rstest]
    fn test_records_for_chromosome_keeps_input_order(table: FeatureTable) {
        let ids: Vec<&str> = table
            .records_for_chromosome("Chr6")
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["ID1", "ID2", "ID3", "ID4", "ID5"]);
    }

    #[rstest]
    fn test_records_for_unknown_chromosome(table: FeatureTable) {
        assert_eq!(table.records_for_chromosome("ChrUn").count(), 0);
    }

    #[rstest]
    fn test_starts_by_chromosome(table: FeatureTable) {
        let starts = table.starts_by_chromosome();
        assert_eq!(starts.len(), 2);
        assert_eq!(starts["Chr6"], vec![1000, 2500, 9500, 9750, 15000]);
        assert_eq!(starts["Chr7"], vec![500, 11000]);
    }

    #[rstest]
    fn test_from_reader_empty() {
        let table = FeatureTable::from_reader(Cursor::new("")).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "FeatureTable with 0 features.");
    }

    #[rstest]
    fn test_from_vec() {
        let table = FeatureTable::from(vec![Feature {
            chr: "chrX".to_string(),
            start: 5,
            end: 9,
            id: "f1".to_string(),
            feature_type: "exon".to_string(),
        }]);
        assert_eq!((&table).into_iter().count(), 1);
        assert!(table.path().is_none());
    }
}
