//! Whole-file decoding.
//!
//! This module provides [`Dted`], which splits a DTED file into its four
//! regions and hands each to its decoder.

use std::fs::File;
use std::ops::Range;
use std::path::Path;

use memmap2::Mmap;

use crate::accuracy::{self, AccuracyDescription};
use crate::data::DataRecord;
use crate::data_set::{self, DataSetDescription};
use crate::error::{DtedError, Result};
use crate::header::{self, Header};

/// Byte range of the user header block (0-based, half-open).
pub const HEADER_RANGE: Range<usize> = 0..header::LENGTH;

/// Byte range of the data set identification block.
pub const DATA_SET_RANGE: Range<usize> = HEADER_RANGE.end..HEADER_RANGE.end + data_set::LENGTH;

/// Byte range of the accuracy description block.
pub const ACCURACY_RANGE: Range<usize> =
    DATA_SET_RANGE.end..DATA_SET_RANGE.end + accuracy::LENGTH;

/// Offset of the first elevation block.
pub const DATA_OFFSET: usize = ACCURACY_RANGE.end; // 3428

/// A fully decoded DTED file.
///
/// # Example
///
/// ```ignore
/// use dted::Dted;
///
/// let dted = Dted::from_file("N59.DT2")?;
/// println!("Origin: {}, {}", dted.header.latitude, dted.header.longitude);
/// let north_up = dted.data.elevation_north_south();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dted {
    pub header: Header,
    pub data_set_description: DataSetDescription,
    pub accuracy_description: AccuracyDescription,
    pub data: DataRecord,
}

impl Dted {
    /// Load and decode a DTED file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or memory-mapped, or if
    /// any part of it fails to decode.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;

        // SAFETY: Memory mapping is safe as long as the file is not modified
        // while mapped. The mapping is read-only and dropped before returning.
        let mmap = unsafe { Mmap::map(&file)? };

        tracing::debug!(
            path = %path.as_ref().display(),
            size = mmap.len(),
            "Decoding DTED file"
        );
        Self::from_bytes(&mmap)
    }

    /// Decode a DTED file held in memory.
    ///
    /// Decoding stops at the first error; no partially decoded file is
    /// returned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < DATA_OFFSET {
            return Err(DtedError::Truncated {
                region: "DTED file header blocks",
                needed: DATA_OFFSET,
                actual: bytes.len(),
            });
        }

        let header = Header::from_bytes(&bytes[HEADER_RANGE])?;
        let data_set_description = DataSetDescription::from_bytes(&bytes[DATA_SET_RANGE])?;
        let accuracy_description = AccuracyDescription::from_bytes(&bytes[ACCURACY_RANGE])?;
        tracing::debug!(
            longitude = header.longitude,
            latitude = header.latitude,
            series = %data_set_description.dma_series_designator.trim(),
            "Decoded header blocks"
        );

        let data = DataRecord::from_bytes(&bytes[DATA_OFFSET..], &data_set_description)?;
        tracing::debug!(
            rows = data.rows(),
            columns = data.columns(),
            "Decoded elevation grid"
        );

        Ok(Self {
            header,
            data_set_description,
            accuracy_description,
            data,
        })
    }
}
