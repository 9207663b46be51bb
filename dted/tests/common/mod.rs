//! Synthetic DTED files for integration tests.
//!
//! The header blocks reproduce the N59.DT2 reference cell (origin 59N 10E,
//! 1801 longitude lines of 3601 points).

#![allow(dead_code)]

pub const LONGITUDE_LINES: usize = 1801;
pub const LATITUDE_POINTS: usize = 3601;

pub fn header_block() -> Vec<u8> {
    let block = [
        "UHL1",
        "0100000E",
        "0590000N",
        "0020",
        "0010",
        "NA  ",
        "U  ",
        "            ",
        "1801",
        "3601",
        "0",
    ]
    .concat();
    format!("{block:<80}").into_bytes()
}

pub fn data_set_block() -> Vec<u8> {
    let block = [
        "DSIU",
        " ".repeat(55).as_str(),
        "DTED2",
        "000000000000000",
        " ".repeat(8).as_str(),
        "01A000000000000",
        " ".repeat(24).as_str(),
        "PRF89020B000005MSLWGS84",
        " ".repeat(36).as_str(),
        "590000.0N0100000.0E",
        "590000N0100000E600000N0100000E600000N0110000E590000N0110000E",
        "0000000.0",
        "001000203601180101",
    ]
    .concat();
    format!("{block:<648}").into_bytes()
}

pub fn accuracy_block() -> Vec<u8> {
    format!("{:<2700}", format!("ACCNA  NA  NA  NA  {}00", " ".repeat(36))).into_bytes()
}

/// Elevation of the sample at longitude line `column`, latitude point `row`.
///
/// The westernmost line and southernmost point are void; everything else is
/// a repeating ramp that dips below sea level.
pub fn sample(column: usize, row: usize) -> Option<i16> {
    if column == 0 || row == 0 {
        return None;
    }
    Some(((row + column) % 2000) as i16 - 10)
}

fn encode(sample: Option<i16>) -> [u8; 2] {
    let raw = match sample {
        None => 0xFFFF,
        Some(v) if v < 0 => 0x8000 | v.unsigned_abs(),
        Some(v) => v as u16,
    };
    raw.to_be_bytes()
}

pub fn elevation_blocks(longitude_lines: usize, latitude_points: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(longitude_lines * (12 + 2 * latitude_points));
    for column in 0..longitude_lines {
        out.push(0xAA);
        out.extend_from_slice(&(column as u32).to_be_bytes()[1..]);
        out.extend_from_slice(&(column as u16).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        for row in 0..latitude_points {
            out.extend_from_slice(&encode(sample(column, row)));
        }
        out.extend_from_slice(&0u32.to_be_bytes());
    }
    out
}

/// A complete N59.DT2-shaped file.
pub fn n59_file() -> Vec<u8> {
    let mut out = header_block();
    out.extend(data_set_block());
    out.extend(accuracy_block());
    out.extend(elevation_blocks(LONGITUDE_LINES, LATITUDE_POINTS));
    out
}
