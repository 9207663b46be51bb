//! Accuracy Description (ACC) block.

use serde::Serialize;

use crate::error::Result;
use crate::layout::{decode_fields, expect_sentinel, Conversion, Field};

/// Recognition sentinel of the accuracy description block.
pub const SENTINEL: &[u8] = b"ACC";

/// Size of the accuracy description block in bytes.
pub const LENGTH: usize = 2700;

/// Byte layout of the accuracy description block (1-based, inclusive).
pub const FIELDS: &[Field] = &[
    Field::new("absolute_horizontal_accuracy", 4, 7, Conversion::NaOrInt),
    Field::new("absolute_vertical_accuracy", 8, 11, Conversion::NaOrInt),
    Field::new("relative_horizontal_accuracy", 12, 15, Conversion::NaOrInt),
    Field::new("relative_vertical_accuracy", 16, 19, Conversion::NaOrInt),
    Field::new("multiple_accuracy_outline_flag", 56, 57, Conversion::Text),
];

/// Decoded accuracy description block. Accuracies are in meters, `None`
/// where the file gives `NA`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyDescription {
    pub absolute_horizontal_accuracy: Option<i64>,
    pub absolute_vertical_accuracy: Option<i64>,
    pub relative_horizontal_accuracy: Option<i64>,
    pub relative_vertical_accuracy: Option<i64>,
    /// `00` for a single accuracy region, otherwise the number of outlines.
    pub multiple_accuracy_outline_flag: String,
}

impl AccuracyDescription {
    /// Decode an accuracy description block.
    ///
    /// # Errors
    ///
    /// Fails if the block does not start with `ACC` or any field is malformed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_sentinel(bytes, SENTINEL, "accuracy description")?;

        let mut f = decode_fields(FIELDS, bytes)?;
        Ok(Self {
            absolute_horizontal_accuracy: f.opt_int("absolute_horizontal_accuracy")?,
            absolute_vertical_accuracy: f.opt_int("absolute_vertical_accuracy")?,
            relative_horizontal_accuracy: f.opt_int("relative_horizontal_accuracy")?,
            relative_vertical_accuracy: f.opt_int("relative_vertical_accuracy")?,
            multiple_accuracy_outline_flag: f.text("multiple_accuracy_outline_flag")?,
        })
    }
}
