// src/io/reporting.rs

use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::analysis::curve::CurveSample;
use crate::analysis::engine::SummaryRecord;
use crate::error::InventoryResult;

/// Writes inventory curve samples to a CSV file (`model,day,level`).
///
/// This is the hand-off point for external plotting tools.
pub fn write_inventory_curve<P: AsRef<Path>>(path: P, data: &[CurveSample]) -> InventoryResult<()> {
    write_records(path.as_ref(), data)
}

/// Writes one summary row per analysed model.
pub fn write_summary<P: AsRef<Path>>(path: P, data: &[SummaryRecord]) -> InventoryResult<()> {
    write_records(path.as_ref(), data)
}

fn write_records<T: Serialize>(path: &Path, data: &[T]) -> InventoryResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(rows = data.len(), path = %path.display(), "exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn curve_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.csv");
        let samples = vec![
            CurveSample { model: "basic", day: 0.0, level: 100.0 },
            CurveSample { model: "basic", day: 1.0, level: 96.5 },
        ];

        write_inventory_curve(&path, &samples).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "model,day,level");
        assert_eq!(lines[1], "basic,0.0,100.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn summary_leaves_missing_costs_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let rows = vec![SummaryRecord {
            model: "basic".to_string(),
            order_quantity: 244.5,
            total_cost: None,
            unit_price: None,
            reorder_point: 23.0,
        }];

        write_summary(&path, &rows).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("basic,244.5,,,23.0"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("curve.csv");
        assert!(write_inventory_curve(&path, &[]).is_err());
    }
}
