//! CSV-Reader für Punktdaten.

use glam::DVec2;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Fehler beim Lesen einer Punktdatei.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("cannot read header: {0}")]
    Header(#[source] csv::Error),
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("malformed row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("non-finite value in row {row}")]
    NonFinite { row: usize },
}

/// Eine Zeile der Punktdatei; weitere Spalten werden ignoriert.
#[derive(Debug, Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

/// Liest alle Punkte aus einer CSV-Datei in Datei-Reihenfolge.
pub fn read_points_from_path(path: &Path) -> Result<Vec<DVec2>, DataSourceError> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| DataSourceError::Open {
            path: path.display().to_string(),
            source,
        })?;
    let points = collect_points(reader)?;
    log::info!("{} Punkte gelesen aus: {}", points.len(), path.display());
    Ok(points)
}

/// Liest alle Punkte aus einer beliebigen CSV-Quelle.
pub fn read_points<R: Read>(source: R) -> Result<Vec<DVec2>, DataSourceError> {
    collect_points(reader_builder().from_reader(source))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn collect_points<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<DVec2>, DataSourceError> {
    let headers = reader.headers().map_err(DataSourceError::Header)?;
    for column in ["x", "y"] {
        if !headers.iter().any(|h| h == column) {
            return Err(DataSourceError::MissingColumn(column));
        }
    }

    let mut points = Vec::new();
    for (index, record) in reader.deserialize::<PointRecord>().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| DataSourceError::Malformed { row, source })?;
        let point = DVec2::new(record.x, record.y);
        if !point.is_finite() {
            return Err(DataSourceError::NonFinite { row });
        }
        points.push(point);
    }
    Ok(points)
}
