//! Elevation data records.
//!
//! The elevation region of a DTED file is a sequence of fixed-size blocks,
//! one per longitude line, west to east. Each block holds:
//!
//! | Bytes            | Content                                   |
//! |------------------|-------------------------------------------|
//! | 1                | sentinel, always `0xAA`                   |
//! | 2..=4            | data block count                          |
//! | 5..=6            | longitude index (big-endian)              |
//! | 7..=8            | latitude index (big-endian)               |
//! | 9..              | one sign-magnitude sample per latitude    |
//! | last 4           | checksum (big-endian)                     |
//!
//! Samples within a block run south to north. [`DataRecord`] transposes the
//! blocks into a latitude-major grid, so `elevation[row][column]` is the
//! sample at latitude index `row` and longitude index `column`.

use serde::Serialize;

use crate::convert::sign_magnitude;
use crate::data_set::DataSetDescription;
use crate::error::{DtedError, Result};

/// First byte of every elevation block.
pub const BLOCK_SENTINEL: u8 = 0xAA;

/// Bytes in a block before the first sample.
const BLOCK_PREFIX_LEN: usize = 8;

/// Bytes of checksum trailing the samples.
const CHECKSUM_LEN: usize = 4;

/// Bytes per elevation sample.
const SAMPLE_LEN: usize = 2;

/// A latitude-major grid of elevation samples in meters; `None` is void.
pub type Grid = Vec<Vec<Option<i16>>>;

/// Size in bytes of one elevation block holding `latitude_points` samples.
pub const fn block_size(latitude_points: usize) -> usize {
    BLOCK_PREFIX_LEN + CHECKSUM_LEN + latitude_points * SAMPLE_LEN
}

/// Bookkeeping fields of a single elevation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    pub block_count: u32,
    pub longitude_index: u16,
    pub latitude_index: u16,
    /// Checksum as stored in the file. It is not verified.
    pub checksum: u32,
}

/// Summary statistics over a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElevationStats {
    pub min: Option<i16>,
    pub max: Option<i16>,
    pub void_count: usize,
    pub sample_count: usize,
}

/// Decoded elevation samples of a DTED file.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord {
    /// Samples indexed `[latitude][longitude]`, south to north, west to east.
    pub elevation: Grid,
    /// Per-block bookkeeping, one entry per longitude line.
    pub blocks: Vec<BlockInfo>,
}

impl DataRecord {
    /// Decode the elevation region using the grid dimensions of `dsi`.
    pub fn from_bytes(bytes: &[u8], dsi: &DataSetDescription) -> Result<Self> {
        Self::from_bytes_with_counts(
            bytes,
            dsi.number_of_longitude_lines as usize,
            dsi.number_of_latitude_lines as usize,
        )
    }

    /// Decode `longitude_lines` blocks of `latitude_points` samples each.
    ///
    /// # Errors
    ///
    /// Returns [`DtedError::Truncated`] if `bytes` is shorter than
    /// `longitude_lines` blocks, or [`DtedError::InvalidBlockIdentifier`] if a
    /// block does not start with `0xAA`.
    pub fn from_bytes_with_counts(
        bytes: &[u8],
        longitude_lines: usize,
        latitude_points: usize,
    ) -> Result<Self> {
        let stride = block_size(latitude_points);
        let needed = longitude_lines * stride;
        if bytes.len() < needed {
            return Err(DtedError::Truncated {
                region: "elevation data",
                needed,
                actual: bytes.len(),
            });
        }

        let mut elevation = vec![vec![None; longitude_lines]; latitude_points];
        let mut blocks = Vec::with_capacity(longitude_lines);

        for (column, block) in bytes[..needed].chunks_exact(stride).enumerate() {
            if block[0] != BLOCK_SENTINEL {
                return Err(DtedError::InvalidBlockIdentifier {
                    block: "elevation data",
                    expected: format!("{BLOCK_SENTINEL:#04X}"),
                });
            }

            let info = BlockInfo {
                block_count: u32::from_be_bytes([0, block[1], block[2], block[3]]),
                longitude_index: u16::from_be_bytes([block[4], block[5]]),
                latitude_index: u16::from_be_bytes([block[6], block[7]]),
                checksum: u32::from_be_bytes([
                    block[stride - 4],
                    block[stride - 3],
                    block[stride - 2],
                    block[stride - 1],
                ]),
            };
            tracing::trace!(
                column,
                longitude_index = info.longitude_index,
                latitude_index = info.latitude_index,
                "Read elevation block"
            );

            let samples = &block[BLOCK_PREFIX_LEN..stride - CHECKSUM_LEN];
            for (row, sample) in samples.chunks_exact(SAMPLE_LEN).enumerate() {
                let raw = u16::from_be_bytes([sample[0], sample[1]]);
                elevation[row][column] = sign_magnitude(raw);
            }
            blocks.push(info);
        }

        Ok(Self { elevation, blocks })
    }

    /// Number of rows (latitude points) in the grid.
    pub fn rows(&self) -> usize {
        self.elevation.len()
    }

    /// Number of columns (longitude lines) in the grid.
    pub fn columns(&self) -> usize {
        self.elevation.first().map_or(0, Vec::len)
    }

    /// The grid with its rows reversed, so that row 0 is the northern edge.
    pub fn elevation_north_south(&self) -> Grid {
        self.elevation.iter().rev().cloned().collect()
    }

    /// The north-up grid cropped to the smallest rectangle holding all
    /// non-void samples. See [`trim`].
    pub fn elevation_trimmed(&self) -> Grid {
        trim(&self.elevation_north_south())
    }

    /// Minimum, maximum and void counts over every sample.
    pub fn stats(&self) -> ElevationStats {
        stats(&self.elevation)
    }
}

/// Crop `grid` to the smallest rectangle containing every non-void sample.
///
/// Rows without any sample are dropped from the top and bottom; the column
/// range is the union of the first-to-last sample span of every row that has
/// data. A grid without any sample trims to an empty grid.
///
/// # Examples
///
/// ```
/// use dted::data::trim;
///
/// let grid = vec![
///     vec![None, None, None],
///     vec![None, Some(5), None],
///     vec![None, None, Some(7)],
/// ];
/// assert_eq!(trim(&grid), vec![vec![Some(5), None], vec![None, Some(7)]]);
/// ```
pub fn trim(grid: &[Vec<Option<i16>>]) -> Grid {
    let mut rows: Option<(usize, usize)> = None;
    let mut columns: Option<(usize, usize)> = None;

    for (r, row) in grid.iter().enumerate() {
        let (Some(first), Some(last)) = (
            row.iter().position(Option::is_some),
            row.iter().rposition(Option::is_some),
        ) else {
            continue;
        };

        rows = Some(rows.map_or((r, r), |(top, _)| (top, r)));
        columns = Some(columns.map_or((first, last), |(left, right)| {
            (left.min(first), right.max(last))
        }));
    }

    match (rows, columns) {
        (Some((top, bottom)), Some((left, right))) => grid[top..=bottom]
            .iter()
            .map(|row| row.iter().skip(left).take(right + 1 - left).copied().collect())
            .collect(),
        _ => Vec::new(),
    }
}

/// Minimum, maximum and void counts over `grid`.
pub fn stats(grid: &[Vec<Option<i16>>]) -> ElevationStats {
    grid.iter()
        .flatten()
        .fold(ElevationStats::default(), |mut acc, sample| {
            acc.sample_count += 1;
            match *sample {
                Some(v) => {
                    acc.min = Some(acc.min.map_or(v, |m| m.min(v)));
                    acc.max = Some(acc.max.map_or(v, |m| m.max(v)));
                }
                None => acc.void_count += 1,
            }
            acc
        })
}
