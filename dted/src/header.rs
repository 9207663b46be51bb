//! User Header Label (UHL) block.
//!
//! The first 80 bytes of every DTED file. It carries the cell origin, the
//! sample spacing and the grid dimensions.

use serde::Serialize;

use crate::error::Result;
use crate::layout::{decode_fields, expect_sentinel, Conversion, Field};

/// Recognition sentinel of the user header block.
pub const SENTINEL: &[u8] = b"UHL1";

/// Size of the user header block in bytes.
pub const LENGTH: usize = 80;

/// Byte layout of the user header block (1-based, inclusive).
pub const FIELDS: &[Field] = &[
    Field::new("longitude", 5, 12, Conversion::Degrees),
    Field::new("latitude", 13, 20, Conversion::Degrees),
    Field::new("longitude_interval", 21, 24, Conversion::Tenths),
    Field::new("latitude_interval", 25, 28, Conversion::Tenths),
    Field::new("absolute_vertical_accuracy", 29, 32, Conversion::NaOrInt),
    Field::new("unclassified_security_code", 33, 35, Conversion::Text),
    Field::new("unique_reference_number", 36, 47, Conversion::Text),
    Field::new("number_of_longitude_lines", 48, 51, Conversion::Integer),
    Field::new("number_of_latitude_points", 52, 55, Conversion::Integer),
    Field::new("multiple_accuracy", 56, 56, Conversion::Flag),
    Field::new("reserved", 57, 80, Conversion::Raw),
];

/// Decoded user header block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Longitude of the cell origin in degrees (west negative).
    pub longitude: f64,
    /// Latitude of the cell origin in degrees (south negative).
    pub latitude: f64,
    /// Longitude spacing in arc seconds.
    pub longitude_interval: f64,
    /// Latitude spacing in arc seconds.
    pub latitude_interval: f64,
    /// Absolute vertical accuracy in meters, `None` when given as `NA`.
    pub absolute_vertical_accuracy: Option<i64>,
    pub unclassified_security_code: String,
    pub unique_reference_number: String,
    pub number_of_longitude_lines: u32,
    pub number_of_latitude_points: u32,
    /// Whether the accuracy description holds multiple accuracy regions.
    pub multiple_accuracy: bool,
    #[serde(skip)]
    pub reserved: Vec<u8>,
}

impl Header {
    /// Decode a user header block.
    ///
    /// # Errors
    ///
    /// Returns [`DtedError::InvalidBlockIdentifier`](crate::DtedError::InvalidBlockIdentifier)
    /// if the block does not start with `UHL1`, or
    /// [`DtedError::FieldDecode`](crate::DtedError::FieldDecode) if a field
    /// is malformed or past the end of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_sentinel(bytes, SENTINEL, "user header")?;

        let mut f = decode_fields(FIELDS, bytes)?;
        Ok(Self {
            longitude: f.float("longitude")?,
            latitude: f.float("latitude")?,
            longitude_interval: f.float("longitude_interval")?,
            latitude_interval: f.float("latitude_interval")?,
            absolute_vertical_accuracy: f.opt_int("absolute_vertical_accuracy")?,
            unclassified_security_code: f.text("unclassified_security_code")?,
            unique_reference_number: f.text("unique_reference_number")?,
            number_of_longitude_lines: f.count("number_of_longitude_lines")?,
            number_of_latitude_points: f.count("number_of_latitude_points")?,
            multiple_accuracy: f.flag("multiple_accuracy")?,
            reserved: f.bytes("reserved")?,
        })
    }
}
