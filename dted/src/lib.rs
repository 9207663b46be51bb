//! # DTED - Digital Terrain Elevation Data decoder
//!
//! Decodes DTED Level 1 and Level 2 files (`.dt1`, `.dt2`) into their header
//! records and a grid of elevation samples.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dted::Dted;
//!
//! let dted = Dted::from_file("/data/N59.DT2")?;
//! assert_eq!(dted.header.number_of_longitude_lines, 1801);
//!
//! // North-up grid cropped to the samples that carry data
//! let grid = dted.data.elevation_trimmed();
//! println!("{} x {} samples", grid.len(), grid[0].len());
//! ```
//!
//! ## DTED File Layout
//!
//! | Bytes        | Block                                  |
//! |--------------|----------------------------------------|
//! | 1..=80       | User Header Label, `UHL1`              |
//! | 81..=728     | Data Set Identification, `DSI`         |
//! | 729..=3428   | Accuracy Description, `ACC`            |
//! | 3429..       | Elevation blocks, each starting `0xAA` |
//!
//! The three header blocks are fixed-width ASCII described by the static
//! field tables in [`header::FIELDS`], [`data_set::FIELDS`] and
//! [`accuracy::FIELDS`]. Elevation blocks hold one longitude line each, with
//! big-endian sign-magnitude samples running south to north.

pub mod accuracy;
pub mod convert;
pub mod data;
pub mod data_set;
pub mod error;
pub mod file;
pub mod header;
pub mod layout;

// Re-export main types at crate root for convenience
pub use accuracy::AccuracyDescription;
pub use data::{BlockInfo, DataRecord, ElevationStats, Grid};
pub use data_set::DataSetDescription;
pub use error::{ConversionError, DtedError, Result};
pub use file::Dted;
pub use header::Header;
