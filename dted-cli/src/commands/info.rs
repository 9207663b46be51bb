use anyhow::{bail, Context, Result};
use dted::{AccuracyDescription, DataSetDescription, Dted, ElevationStats, Header};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct InfoOutput<'a> {
    path: String,
    rows: usize,
    columns: usize,
    header: &'a Header,
    data_set_description: &'a DataSetDescription,
    accuracy_description: &'a AccuracyDescription,
    elevation: ElevationStats,
}

pub fn run(data_dir: Option<PathBuf>, cell: String, level: u8, json: bool) -> Result<()> {
    let path = resolve_cell_path(data_dir, &cell, level)?;
    tracing::debug!(path = %path.display(), "Resolved cell path");

    if !path.exists() {
        bail!("Cell not found: {}", path.display());
    }

    let dted = Dted::from_file(&path)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    let stats = dted.data.stats();

    if json {
        let output = InfoOutput {
            path: path.display().to_string(),
            rows: dted.data.rows(),
            columns: dted.data.columns(),
            header: &dted.header,
            data_set_description: &dted.data_set_description,
            accuracy_description: &dted.accuracy_description,
            elevation: stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let header = &dted.header;
    let dsi = &dted.data_set_description;
    let acc = &dted.accuracy_description;

    println!("Cell: {}", path.display());
    println!("Series: {}", dsi.dma_series_designator.trim());
    println!(
        "Origin: {} {}",
        format_coordinate(header.latitude, 'N', 'S'),
        format_coordinate(header.longitude, 'E', 'W')
    );
    println!(
        "Coverage: {}-{}, {}-{}",
        format_coordinate(dsi.latitude_of_sw_corner, 'N', 'S'),
        format_coordinate(dsi.latitude_of_nw_corner, 'N', 'S'),
        format_coordinate(dsi.longitude_of_sw_corner, 'E', 'W'),
        format_coordinate(dsi.longitude_of_se_corner, 'E', 'W')
    );
    println!(
        "Spacing: {}\" latitude x {}\" longitude",
        dsi.latitude_interval, dsi.longitude_interval
    );
    println!(
        "Grid: {} latitude points x {} longitude lines",
        dsi.number_of_latitude_lines, dsi.number_of_longitude_lines
    );
    println!(
        "Datum: {} / {}",
        dsi.horizontal_datum.trim(),
        dsi.vertical_datum.trim()
    );
    println!();

    println!(
        "Absolute accuracy: {} horizontal, {} vertical",
        format_accuracy(acc.absolute_horizontal_accuracy),
        format_accuracy(acc.absolute_vertical_accuracy)
    );
    println!(
        "Relative accuracy: {} horizontal, {} vertical",
        format_accuracy(acc.relative_horizontal_accuracy),
        format_accuracy(acc.relative_vertical_accuracy)
    );
    println!();

    if let (Some(min), Some(max)) = (stats.min, stats.max) {
        println!("Min elevation: {}m", min);
        println!("Max elevation: {}m", max);
    }

    if stats.void_count > 0 {
        let void_pct = (stats.void_count as f64 / stats.sample_count as f64) * 100.0;
        println!("Void samples: {} ({:.1}%)", stats.void_count, void_pct);
    }

    Ok(())
}

fn resolve_cell_path(data_dir: Option<PathBuf>, cell: &str, level: u8) -> Result<PathBuf> {
    if has_dted_extension(Path::new(cell)) {
        return Ok(PathBuf::from(cell));
    }

    let filename = format!("{}.DT{}", cell, level);
    match data_dir {
        Some(dir) => Ok(dir.join(filename)),
        None => {
            let dir = std::env::var("DTED_DATA_DIR").context(
                "DTED_DATA_DIR environment variable not set. Use --data-dir or set DTED_DATA_DIR",
            )?;
            Ok(PathBuf::from(dir).join(filename))
        }
    }
}

fn has_dted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "dt0" | "dt1" | "dt2"))
        .unwrap_or(false)
}

fn format_coordinate(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value >= 0.0 { positive } else { negative };
    format!("{:.4}°{}", value.abs(), hemisphere)
}

fn format_accuracy(value: Option<i64>) -> String {
    match value {
        Some(meters) => format!("{}m", meters),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_path() {
        let path = resolve_cell_path(None, "/data/N59.DT2", 2).unwrap();
        assert_eq!(path, PathBuf::from("/data/N59.DT2"));

        let path = resolve_cell_path(None, "e010/n59.dt1", 2).unwrap();
        assert_eq!(path, PathBuf::from("e010/n59.dt1"));
    }

    #[test]
    fn test_resolve_cell_name() {
        let path = resolve_cell_path(Some(PathBuf::from("/data")), "N59", 1).unwrap();
        assert_eq!(path, PathBuf::from("/data/N59.DT1"));
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(59.0, 'N', 'S'), "59.0000°N");
        assert_eq!(format_coordinate(-77.5, 'E', 'W'), "77.5000°W");
    }

    #[test]
    fn test_format_accuracy() {
        assert_eq!(format_accuracy(Some(25)), "25m");
        assert_eq!(format_accuracy(None), "n/a");
    }
}
