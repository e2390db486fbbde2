use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use featbin_core::models::WindowCount;

use crate::consts::{GZ_EXTENSION, TSV_HEADER};

pub trait WindowCountWrite {
    ///
    /// Write the header and one row per record to any writer
    ///
    /// # Arguments
    /// - writer: destination of the table
    fn write_tsv_to<W: Write>(&self, writer: W) -> std::io::Result<()>;

    ///
    /// Write data to disk as tsv file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write data to disk as tsv.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl WindowCountWrite for [WindowCount] {
    fn write_tsv_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", TSV_HEADER.join("\t"))?;
        for record in self {
            writeln!(writer, "{}", record.as_string())?;
        }
        writer.flush()
    }

    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let file = create_with_parents(path.as_ref())?;
        self.write_tsv_to(BufWriter::new(file))
    }

    fn write_tsv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let file = create_with_parents(path.as_ref())?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        self.write_tsv_to(&mut encoder)?;

        encoder.finish()?.flush()
    }
}

///
/// Write window counts to `path`, gzipped when the path ends in `.gz`.
///
pub fn write_window_counts<T: AsRef<Path>>(counts: &[WindowCount], path: T) -> std::io::Result<()> {
    let path = path.as_ref();
    match path.extension() == Some(OsStr::new(GZ_EXTENSION)) {
        true => counts.write_tsv_gz(path),
        false => counts.write_tsv(path),
    }
}

fn create_with_parents(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path)
}
