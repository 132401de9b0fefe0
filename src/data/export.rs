use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::model::RetainedPair;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No data to save. Plot at least two columns first.")]
    NoData,
    #[error("Could not write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One spreadsheet row. Field names become the header.
#[derive(Serialize)]
struct ExportRow {
    x_data: f64,
    y_data: f64,
}

/// Write the retained pair as a two-column CSV at `path`.
///
/// Returns the number of data rows written (header excluded).
pub fn export_pair(pair: Option<&RetainedPair>, path: &Path) -> Result<usize, ExportError> {
    let pair = pair.ok_or(ExportError::NoData)?;
    let write_error = |source: csv::Error| ExportError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_error)?;
    for (&x_data, &y_data) in pair.x.iter().zip(pair.y.iter()) {
        writer
            .serialize(ExportRow { x_data, y_data })
            .map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|e| write_error(csv::Error::from(e)))?;

    Ok(pair.len())
}
