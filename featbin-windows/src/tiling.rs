use featbin_core::models::Window;
use featbin_core::{FeatbinError, Result};

///
/// Lazily yields the `[start, end)` bounds tiling `[0, chrom_len)` with
/// windows of `window_size`. The last window is clipped to `chrom_len`.
///
#[derive(Debug, Clone)]
pub struct ChromosomeTiles {
    chrom_len: u64,
    window_size: u64,
    next_start: u64,
}

impl ChromosomeTiles {
    pub fn new(chrom_len: u64, window_size: u64) -> Result<Self> {
        if window_size == 0 {
            return Err(FeatbinError::InvalidWindowSize(window_size));
        }
        Ok(ChromosomeTiles {
            chrom_len,
            window_size,
            next_start: 0,
        })
    }

    /// `ceil(chrom_len / window_size)`
    pub fn num_windows(&self) -> usize {
        self.chrom_len.div_ceil(self.window_size) as usize
    }
}

impl Iterator for ChromosomeTiles {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_start >= self.chrom_len {
            return None;
        }
        let start = self.next_start;
        // saturating add keeps a huge window size from wrapping
        let end = start.saturating_add(self.window_size).min(self.chrom_len);
        self.next_start = end;
        Some((start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.chrom_len - self.next_start).div_ceil(self.window_size) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChromosomeTiles {}

///
/// Tile one chromosome into windows: `chrom_len / window_size` full windows,
/// then one partial window `[full * window_size, chrom_len)` if there is a
/// remainder.
///
/// # Arguments
/// - chr: chromosome name
/// - chrom_len: chromosome length
/// - window_size: window width, must be positive
///
pub fn tile_chromosome(chr: &str, chrom_len: u64, window_size: u64) -> Result<Vec<Window>> {
    let tiles = ChromosomeTiles::new(chrom_len, window_size)?;
    Ok(tiles
        .map(|(start, end)| Window {
            chr: chr.to_owned(),
            start,
            end,
        })
        .collect())
}
