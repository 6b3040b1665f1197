//! Datenquelle: tabellarische Punktdateien (CSV mit `x`/`y`-Spalten).
//!
//! Der Kern bekommt nur bereits geparste Punktpaare, alle Datei-I/O liegt hier.

pub mod reader;

pub use reader::{read_points, read_points_from_path, DataSourceError};
