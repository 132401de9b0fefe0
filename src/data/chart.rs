use super::model::{LoadedFile, PanelKind, RetainedPair};
use super::selection::{pick_series, ColumnSelection, SelectionError};

// ---------------------------------------------------------------------------
// RenderedChart – everything the plot widget needs, independent of egui
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub title: String,
    pub x: Series,
    pub y: Series,
    /// Drawn against `x` on the secondary (right-hand) axis.
    pub z: Option<Series>,
    /// Non-fatal notes produced while building the chart.
    pub warnings: Vec<String>,
}

impl RenderedChart {
    /// The x/y pair the exporter writes. `z` is never exported.
    pub fn retained_pair(&self) -> RetainedPair {
        RetainedPair {
            x: self.x.values.clone(),
            y: self.y.values.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Plot engine
// ---------------------------------------------------------------------------

/// Build a chart for `panel` from the loaded file and the current checkboxes.
///
/// Full recomputation on every call. Nothing is mutated, so a failure leaves
/// the caller's previous chart and retained pair untouched.
pub fn build_chart(
    file: &LoadedFile,
    selection: &ColumnSelection,
    panel: PanelKind,
    min_columns: usize,
) -> Result<RenderedChart, SelectionError> {
    let matrix = &file.matrix;
    let required = min_columns.max(2);
    if matrix.n_cols() < required {
        return Err(SelectionError::InsufficientColumns {
            required,
            found: matrix.n_cols(),
        });
    }

    let pick = pick_series(selection, panel.supports_secondary_axis())?;

    let column = |idx: usize| {
        matrix.column(idx).ok_or(SelectionError::ColumnOutOfRange {
            column: idx + 1,
            available: matrix.n_cols(),
        })
    };
    let x_values = column(pick.x)?;
    let y_values = column(pick.y)?;
    let z_values = pick.z.map(column).transpose()?;

    let (x_fallback, y_fallback) = panel.fallback_labels();
    let label = |idx: usize, fallback: &str| {
        selection
            .label(idx)
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    };

    let mut warnings = Vec::new();
    if !pick.ignored.is_empty() {
        let names: Vec<String> = pick
            .ignored
            .iter()
            .map(|&i| label(i, &format!("Column {}", i + 1)))
            .collect();
        warnings.push(format!(
            "{panel}: more columns selected than can be shown, ignoring {}",
            names.join(", ")
        ));
    }

    Ok(RenderedChart {
        title: format!("Data from file {}", file.display_name()),
        x: Series {
            label: label(pick.x, x_fallback),
            values: x_values,
        },
        y: Series {
            label: label(pick.y, y_fallback),
            values: y_values,
        },
        z: match (pick.z, z_values) {
            (Some(idx), Some(values)) => Some(Series {
                label: label(idx, y_fallback),
                values,
            }),
            _ => None,
        },
        warnings,
    })
}
