use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Matrix – one loaded data file
// ---------------------------------------------------------------------------

/// Rectangular block of samples: rows are samples, columns are quantities
/// (time, intensity, phase, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
    n_cols: usize,
}

impl Matrix {
    /// Build a matrix from parsed rows.
    ///
    /// Returns `None` when there are no rows or when the rows do not all
    /// have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n_cols = rows.first()?.len();
        if rows.iter().any(|r| r.len() != n_cols) {
            return None;
        }
        Some(Matrix { rows, n_cols })
    }

    /// Number of samples.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of measured quantities per sample.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Copy out column `idx` (all rows), or `None` if the matrix is narrower.
    pub fn column(&self, idx: usize) -> Option<Vec<f64>> {
        if idx >= self.n_cols {
            return None;
        }
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }
}

// ---------------------------------------------------------------------------
// LoadedFile – a matrix together with where it came from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub matrix: Matrix,
}

impl LoadedFile {
    /// File name shown in chart titles (falls back to the full path).
    pub fn display_name(&self) -> String {
        file_name_of(&self.path)
    }
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// PanelKind – the two independent chart areas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Time,
    Spectral,
}

impl PanelKind {
    pub const ALL: [PanelKind; 2] = [PanelKind::Time, PanelKind::Spectral];

    /// Logical column names, in the fixed display order of the checkboxes.
    pub fn slot_labels(self) -> &'static [&'static str] {
        match self {
            PanelKind::Time => &["Time", "Intensity", "Phase", "Real part", "Imaginary part"],
            PanelKind::Spectral => &["Wavelength", "Spectral Intensity", "Spectral Phase"],
        }
    }

    /// Axis labels used when a selected slot has no name.
    pub fn fallback_labels(self) -> (&'static str, &'static str) {
        match self {
            PanelKind::Time => ("Time", "Intensity"),
            PanelKind::Spectral => ("Wavelength", "Intensity"),
        }
    }

    /// Only the time-domain panel overlays a third series on a twin axis.
    pub fn supports_secondary_axis(self) -> bool {
        matches!(self, PanelKind::Time)
    }

    /// Short tag used in ids and default export file names.
    pub fn tag(self) -> &'static str {
        match self {
            PanelKind::Time => "time",
            PanelKind::Spectral => "spectral",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelKind::Time => write!(f, "Time domain"),
            PanelKind::Spectral => write!(f, "Spectral"),
        }
    }
}

// ---------------------------------------------------------------------------
// RetainedPair – what the exporter writes
// ---------------------------------------------------------------------------

/// The most recently plotted x/y series of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RetainedPair {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl RetainedPair {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
