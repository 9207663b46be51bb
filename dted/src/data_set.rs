//! Data Set Identification (DSI) block.
//!
//! Bytes 81..=728 of a DTED file: security markings, production history,
//! the cell corners and the authoritative grid dimensions used to read the
//! elevation blocks.

use serde::Serialize;

use crate::error::Result;
use crate::layout::{decode_fields, expect_sentinel, Conversion, Field};

/// Recognition sentinel of the data set identification block.
pub const SENTINEL: &[u8] = b"DSI";

/// Size of the data set identification block in bytes.
pub const LENGTH: usize = 648;

/// Byte layout of the data set identification block (1-based, inclusive).
pub const FIELDS: &[Field] = &[
    Field::new("security_classification_code", 4, 4, Conversion::Text),
    Field::new("security_control_and_release", 5, 6, Conversion::Text),
    Field::new("security_handling_description", 7, 33, Conversion::Text),
    Field::new("dma_series_designator", 60, 64, Conversion::Text),
    Field::new("unique_reference_number", 65, 79, Conversion::Text),
    Field::new("data_edition_number", 88, 89, Conversion::Integer),
    Field::new("match_merge_version", 90, 90, Conversion::Text),
    Field::new("maintenance_date", 91, 94, Conversion::Text),
    Field::new("match_merge_date", 95, 98, Conversion::Text),
    Field::new("maintenance_description_code", 99, 102, Conversion::Integer),
    Field::new("producer_code", 103, 110, Conversion::Text),
    Field::new("product_specification", 127, 135, Conversion::Text),
    Field::new("product_specification_numeric", 136, 137, Conversion::Integer),
    Field::new("product_specification_date", 138, 141, Conversion::Text),
    Field::new("vertical_datum", 142, 144, Conversion::Text),
    Field::new("horizontal_datum", 145, 149, Conversion::Text),
    Field::new("collection_system", 150, 159, Conversion::Text),
    Field::new("compilation_date", 160, 163, Conversion::Text),
    Field::new("latitude_of_origin", 186, 194, Conversion::Degrees),
    Field::new("longitude_of_origin", 195, 204, Conversion::Degrees),
    Field::new("latitude_of_sw_corner", 205, 211, Conversion::Degrees),
    Field::new("longitude_of_sw_corner", 212, 219, Conversion::Degrees),
    Field::new("latitude_of_nw_corner", 220, 226, Conversion::Degrees),
    Field::new("longitude_of_nw_corner", 227, 234, Conversion::Degrees),
    Field::new("latitude_of_ne_corner", 235, 241, Conversion::Degrees),
    Field::new("longitude_of_ne_corner", 242, 249, Conversion::Degrees),
    Field::new("latitude_of_se_corner", 250, 256, Conversion::Degrees),
    Field::new("longitude_of_se_corner", 257, 264, Conversion::Degrees),
    Field::new("orientation_angle", 265, 273, Conversion::Float),
    Field::new("latitude_interval", 274, 277, Conversion::Tenths),
    Field::new("longitude_interval", 278, 281, Conversion::Tenths),
    Field::new("number_of_latitude_lines", 282, 285, Conversion::Integer),
    Field::new("number_of_longitude_lines", 286, 289, Conversion::Integer),
    Field::new("partial_cell", 290, 291, Conversion::Integer),
    Field::new("coverage_in_percent", 292, 392, Conversion::EmptyOrInt),
    Field::new("geoid_undulation", 393, 492, Conversion::Text),
];

/// Decoded data set identification block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSetDescription {
    pub security_classification_code: String,
    pub security_control_and_release: String,
    pub security_handling_description: String,
    /// Series designator, e.g. `DTED2`.
    pub dma_series_designator: String,

    pub unique_reference_number: String,
    pub data_edition_number: i64,
    pub match_merge_version: String,
    pub maintenance_date: String,
    pub match_merge_date: String,
    pub maintenance_description_code: i64,

    pub producer_code: String,
    pub product_specification: String,
    pub product_specification_numeric: i64,
    pub product_specification_date: String,
    pub vertical_datum: String,
    pub horizontal_datum: String,
    pub collection_system: String,
    pub compilation_date: String,

    pub latitude_of_origin: f64,
    pub longitude_of_origin: f64,
    pub latitude_of_sw_corner: f64,
    pub longitude_of_sw_corner: f64,
    pub latitude_of_nw_corner: f64,
    pub longitude_of_nw_corner: f64,
    pub latitude_of_ne_corner: f64,
    pub longitude_of_ne_corner: f64,
    pub latitude_of_se_corner: f64,
    pub longitude_of_se_corner: f64,

    pub orientation_angle: f64,
    /// Latitude spacing in arc seconds.
    pub latitude_interval: f64,
    /// Longitude spacing in arc seconds.
    pub longitude_interval: f64,

    /// Samples per longitude line (rows of the grid).
    pub number_of_latitude_lines: u32,
    /// Longitude lines in the file (columns of the grid).
    pub number_of_longitude_lines: u32,

    /// `0` for a complete cell, otherwise the percentage of coverage.
    pub partial_cell: i64,
    pub coverage_in_percent: Option<i64>,
    pub geoid_undulation: String,
}

impl DataSetDescription {
    /// Decode a data set identification block.
    ///
    /// # Errors
    ///
    /// Fails if the block does not start with `DSI` or any field is malformed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_sentinel(bytes, SENTINEL, "data set description")?;

        let mut f = decode_fields(FIELDS, bytes)?;
        Ok(Self {
            security_classification_code: f.text("security_classification_code")?,
            security_control_and_release: f.text("security_control_and_release")?,
            security_handling_description: f.text("security_handling_description")?,
            dma_series_designator: f.text("dma_series_designator")?,

            unique_reference_number: f.text("unique_reference_number")?,
            data_edition_number: f.int("data_edition_number")?,
            match_merge_version: f.text("match_merge_version")?,
            maintenance_date: f.text("maintenance_date")?,
            match_merge_date: f.text("match_merge_date")?,
            maintenance_description_code: f.int("maintenance_description_code")?,

            producer_code: f.text("producer_code")?,
            product_specification: f.text("product_specification")?,
            product_specification_numeric: f.int("product_specification_numeric")?,
            product_specification_date: f.text("product_specification_date")?,
            vertical_datum: f.text("vertical_datum")?,
            horizontal_datum: f.text("horizontal_datum")?,
            collection_system: f.text("collection_system")?,
            compilation_date: f.text("compilation_date")?,

            latitude_of_origin: f.float("latitude_of_origin")?,
            longitude_of_origin: f.float("longitude_of_origin")?,
            latitude_of_sw_corner: f.float("latitude_of_sw_corner")?,
            longitude_of_sw_corner: f.float("longitude_of_sw_corner")?,
            latitude_of_nw_corner: f.float("latitude_of_nw_corner")?,
            longitude_of_nw_corner: f.float("longitude_of_nw_corner")?,
            latitude_of_ne_corner: f.float("latitude_of_ne_corner")?,
            longitude_of_ne_corner: f.float("longitude_of_ne_corner")?,
            latitude_of_se_corner: f.float("latitude_of_se_corner")?,
            longitude_of_se_corner: f.float("longitude_of_se_corner")?,

            orientation_angle: f.float("orientation_angle")?,
            latitude_interval: f.float("latitude_interval")?,
            longitude_interval: f.float("longitude_interval")?,

            number_of_latitude_lines: f.count("number_of_latitude_lines")?,
            number_of_longitude_lines: f.count("number_of_longitude_lines")?,

            partial_cell: f.int("partial_cell")?,
            coverage_in_percent: f.opt_int("coverage_in_percent")?,
            geoid_undulation: f.text("geoid_undulation")?,
        })
    }
}
