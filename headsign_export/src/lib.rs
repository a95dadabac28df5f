// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headsign Export: the JSON artifact format for route display
//! configurations.
//!
//! An artifact is a JSON array holding exactly one configuration record,
//! pretty-printed with two-space indentation. The array wrapper and the
//! `route_config_<number>_<date>.json` naming both match what deployed
//! boards already ingest, so artifacts written here drop into existing
//! provisioning flows unchanged.
//!
//! ## Minimal example
//!
//! ```
//! use headsign_config::{DraftConfig, Language, Route};
//! use headsign_export::{read_config, write_config};
//!
//! let route = Route {
//!     route_number: "300".to_string(),
//!     ..Route::default()
//! };
//! let config = DraftConfig::new(route, Language::En).to_config();
//!
//! let mut artifact = Vec::new();
//! write_config(&config, &mut artifact).unwrap();
//! assert!(artifact.starts_with(b"[\n  {"));
//!
//! let back = read_config(artifact.as_slice()).unwrap();
//! assert_eq!(back, config);
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use headsign_config::DisplayConfig;
use log::info;
use thiserror::Error;

/// File name used when the route context is unknown.
pub const GENERIC_FILE_NAME: &str = "route.json";

/// Why an artifact could not be produced or ingested.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The artifact could not be read or written.
    #[error("artifact I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The artifact is not valid JSON for a configuration record.
    #[error("artifact is not a configuration record: {0}")]
    Json(#[from] serde_json::Error),
    /// The artifact parsed but is not a one-record array.
    #[error("expected a one-record array, found {0} records")]
    Shape(usize),
}

/// Writes `config` as a one-record artifact.
pub fn write_config<W: Write>(config: &DisplayConfig, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, std::slice::from_ref(config))?;
    Ok(())
}

/// Renders `config` as the artifact text, for on-screen preview.
pub fn config_json(config: &DisplayConfig) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(std::slice::from_ref(config))?)
}

/// Reads a one-record artifact back into a configuration.
///
/// Anything other than an array of exactly one record is rejected with
/// [`ExportError::Shape`].
pub fn read_config<R: Read>(reader: R) -> Result<DisplayConfig, ExportError> {
    let mut records: Vec<DisplayConfig> = serde_json::from_reader(reader)?;
    if records.len() != 1 {
        return Err(ExportError::Shape(records.len()));
    }
    // Exactly one record, checked above.
    Ok(records.swap_remove(0))
}

/// The artifact name for a route: `route_config_<number>_<date>.json`,
/// with `new` standing in while the route has no number yet.
#[must_use]
pub fn export_file_name(route_number: &str, date: NaiveDate) -> String {
    let number = if route_number.is_empty() {
        "new"
    } else {
        route_number
    };
    format!("route_config_{number}_{}.json", date.format("%Y-%m-%d"))
}

/// Writes `config` into `dir` under its [`export_file_name`] and returns
/// the full path.
pub fn write_config_to(
    dir: &Path,
    config: &DisplayConfig,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(&config.route.route_number, date));
    let mut file = BufWriter::new(File::create(&path)?);
    write_config(config, &mut file)?;
    file.flush()?;
    info!("exported route configuration to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn march_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
    }

    #[test]
    fn file_name_carries_route_number_and_date() {
        assert_eq!(
            export_file_name("300", march_5()),
            "route_config_300_2026-03-05.json",
            "number and ISO date are embedded"
        );
    }

    #[test]
    fn unnumbered_routes_export_as_new() {
        assert_eq!(
            export_file_name("", march_5()),
            "route_config_new_2026-03-05.json",
            "an empty number falls back to `new`"
        );
    }

    #[test]
    fn generic_name_is_fixed() {
        assert_eq!(GENERIC_FILE_NAME, "route.json", "boards look for this exact name");
    }
}
