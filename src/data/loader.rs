use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LoadedFile, Matrix};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{path}' not found or not readable: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File '{path}' contains invalid data at line {line}: {reason}. Make sure it's in numerical format with spaces or tabs as separators.")]
    InvalidFormat {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a whitespace/tab separated numeric matrix from `path`.
pub fn load_file(path: &Path) -> Result<LoadedFile, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        // Non UTF-8 content is a format problem, not a missing file.
        io::ErrorKind::InvalidData => LoadError::InvalidFormat {
            path: path.to_path_buf(),
            line: 0,
            reason: "file is not valid text".to_string(),
        },
        _ => LoadError::FileNotFound {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let matrix = parse_matrix(&text).map_err(|(line, reason)| LoadError::InvalidFormat {
        path: path.to_path_buf(),
        line,
        reason,
    })?;

    Ok(LoadedFile {
        path: path.to_path_buf(),
        matrix,
    })
}

// ---------------------------------------------------------------------------
// Text parser
// ---------------------------------------------------------------------------

/// Parse the matrix body. Blank lines and `#` comment lines are skipped.
///
/// On failure returns the 1-based line number and a reason.
pub fn parse_matrix(text: &str) -> Result<Matrix, (usize, String)> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = trimmed
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| (line_no, format!("'{tok}' is not a number")))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err((
                    line_no,
                    format!("expected {w} columns but found {}", row.len()),
                ));
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    let last_line = text.lines().count();
    Matrix::from_rows(rows).ok_or((last_line, "no data rows".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("frog_viewer_loader_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_parse_spaces_and_tabs() {
        let m = parse_matrix("0.0 1.0\t2.0  3.0\n1.0\t2.0 3.0 4.0\n").unwrap();
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_cols(), 4);
        assert_eq!(m.column(0), Some(vec![0.0, 1.0]));
        assert_eq!(m.column(3), Some(vec![3.0, 4.0]));
    }

    #[test]
    fn test_parse_scientific_notation() {
        let m = parse_matrix("-1.5E2 2.5e-3\n").unwrap();
        assert_eq!(m.column(0), Some(vec![-150.0]));
        assert_eq!(m.column(1), Some(vec![0.0025]));
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let m = parse_matrix("# t I\n\n0 1\n   \n1 2\n").unwrap();
        assert_eq!(m.n_rows(), 2);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = parse_matrix("0 1 2\n1 2\n").unwrap_err();
        assert_eq!(err.0, 2);
        assert!(err.1.contains("expected 3 columns"));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_matrix("0 1\n1 abc\n").unwrap_err();
        assert_eq!(err.0, 2);
        assert!(err.1.contains("abc"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse_matrix("").is_err());
        assert!(parse_matrix("# only a comment\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(&temp_path("does_not_exist.dat")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let path = temp_path("invalid.dat");
        std::fs::write(&path, "0 1\nnot numbers\n").unwrap();
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, LoadError::InvalidFormat { line: 2, .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let path = temp_path("valid.dat");
        std::fs::write(&path, "0\t1\t2\t3\n1\t2\t3\t4\n").unwrap();
        let loaded = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.matrix.n_cols(), 4);
        assert_eq!(loaded.path, path);
    }
}
