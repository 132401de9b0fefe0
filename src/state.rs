use std::path::{Path, PathBuf};

use crate::config::ViewerConfig;
use crate::data::chart::{build_chart, RenderedChart};
use crate::data::export::{export_pair, ExportError};
use crate::data::loader::{load_file, LoadError};
use crate::data::model::{LoadedFile, PanelKind, RetainedPair};
use crate::data::selection::{ColumnSelection, SelectionError};

// ---------------------------------------------------------------------------
// Per-panel state
// ---------------------------------------------------------------------------

/// One chart area: its file, its checkboxes, what is drawn, what gets saved.
pub struct PanelState {
    pub kind: PanelKind,
    /// Loaded file (None until the user opens one).
    pub source: Option<LoadedFile>,
    pub selection: ColumnSelection,
    /// Last successfully built chart.
    pub chart: Option<RenderedChart>,
    /// x/y of the last successful plot, used only for export.
    pub retained: Option<RetainedPair>,
}

impl PanelState {
    /// Fresh panel with the first two slots checked.
    pub fn new(kind: PanelKind) -> Self {
        let labels = kind.slot_labels();
        let flags: Vec<bool> = (0..labels.len()).map(|i| i < 2).collect();
        Self {
            kind,
            source: None,
            selection: ColumnSelection::with_flags(labels, &flags),
            chart: None,
            retained: None,
        }
    }

    /// Replace the held matrix with the one at `path`.
    ///
    /// On failure the previously loaded file stays in place.
    pub fn load(&mut self, path: &Path) -> Result<&LoadedFile, LoadError> {
        let file = load_file(path)?;
        Ok(self.source.insert(file))
    }

    /// Recompute the chart from scratch.
    ///
    /// Returns the warnings of the new chart. Without a loaded file this is
    /// a no-op. On error neither `chart` nor `retained` change.
    pub fn replot(&mut self, min_columns: usize) -> Result<Vec<String>, SelectionError> {
        let Some(file) = &self.source else {
            return Ok(Vec::new());
        };
        let chart = build_chart(file, &self.selection, self.kind, min_columns)?;
        let warnings = chart.warnings.clone();
        self.retained = Some(chart.retained_pair());
        self.chart = Some(chart);
        Ok(warnings)
    }

    pub fn export(&self, path: &Path) -> Result<usize, ExportError> {
        export_pair(self.retained.as_ref(), path)
    }

    /// Suggested file name for the save dialog.
    pub fn default_export_name(&self) -> String {
        let stem = self
            .source
            .as_ref()
            .and_then(|f| f.path.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frog".to_string());
        format!("{stem}_{}.csv", self.kind.tag())
    }
}

// ---------------------------------------------------------------------------
// Notices shown to the user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,
    pub time: PanelState,
    pub spectral: PanelState,

    /// Error waiting to be acknowledged in the modal.
    pub pending_error: Option<String>,

    /// Status line (warnings and confirmations).
    pub status: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            time: PanelState::new(PanelKind::Time),
            spectral: PanelState::new(PanelKind::Spectral),
            pending_error: None,
            status: None,
        }
    }

    pub fn panel(&self, kind: PanelKind) -> &PanelState {
        match kind {
            PanelKind::Time => &self.time,
            PanelKind::Spectral => &self.spectral,
        }
    }

    pub fn panel_mut(&mut self, kind: PanelKind) -> &mut PanelState {
        match kind {
            PanelKind::Time => &mut self.time,
            PanelKind::Spectral => &mut self.spectral,
        }
    }

    /// Open a data file for `kind` and re-plot that panel.
    pub fn open_file(&mut self, kind: PanelKind, path: &Path) {
        match self.panel_mut(kind).load(path) {
            Ok(file) => {
                log::info!(
                    "Loaded {} rows x {} columns from {}",
                    file.matrix.n_rows(),
                    file.matrix.n_cols(),
                    file.path.display()
                );
                self.status = None;
                self.replot(kind);
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Flip one checkbox and re-plot when the state actually changed.
    pub fn set_column_checked(&mut self, kind: PanelKind, slot: usize, checked: bool) {
        if self.panel_mut(kind).selection.set_checked(slot, checked) {
            self.replot(kind);
        }
    }

    pub fn replot(&mut self, kind: PanelKind) {
        let min_columns = self.config.min_columns;
        match self.panel_mut(kind).replot(min_columns) {
            Ok(warnings) if warnings.is_empty() => {
                if matches!(&self.status, Some(n) if n.level == NoticeLevel::Warning) {
                    self.status = None;
                }
            }
            Ok(warnings) => {
                let message = warnings.join("; ");
                log::warn!("{message}");
                self.status = Some(Notice {
                    level: NoticeLevel::Warning,
                    message,
                });
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Save the retained pair of `kind` to `path`.
    pub fn save_selection(&mut self, kind: PanelKind, path: PathBuf) {
        match self.panel(kind).export(&path) {
            Ok(rows) => {
                log::info!("Exported {rows} rows to {}", path.display());
                self.status = Some(Notice {
                    level: NoticeLevel::Info,
                    message: format!("Data saved to {}", path.display()),
                });
            }
            Err(e) => self.report_error(&e),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.pending_error = None;
    }

    fn report_error(&mut self, err: &dyn std::error::Error) {
        let message = err.to_string();
        log::error!("{message}");
        self.pending_error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("frog_viewer_state_{}_{name}", std::process::id()))
    }

    fn write_file(name: &str, body: &str) -> PathBuf {
        let path = temp_path(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_open_file_plots_immediately() {
        let path = write_file("open.dat", "0 1 2 3\n1 2 3 4\n");
        let mut state = AppState::default();
        state.open_file(PanelKind::Time, &path);
        std::fs::remove_file(&path).ok();

        assert!(state.pending_error.is_none());
        let retained = state.time.retained.as_ref().unwrap();
        assert_eq!(retained.x, vec![0.0, 1.0]);
        assert_eq!(retained.y, vec![1.0, 2.0]);
        assert!(state.spectral.source.is_none());
    }

    #[test]
    fn test_insufficient_selection_keeps_retained_pair() {
        let path = write_file("keep.dat", "0 1 2 3\n1 2 3 4\n");
        let mut state = AppState::default();
        state.open_file(PanelKind::Time, &path);
        std::fs::remove_file(&path).ok();
        let before = state.time.retained.clone();
        let chart_before = state.time.chart.clone();

        state.set_column_checked(PanelKind::Time, 0, false);

        assert!(state.pending_error.as_deref().unwrap().contains("at least two"));
        assert_eq!(state.time.retained, before);
        assert_eq!(state.time.chart, chart_before);
    }

    #[test]
    fn test_toggle_replots() {
        let path = write_file("toggle.dat", "0 1 2 3\n1 2 3 4\n");
        let mut state = AppState::default();
        state.open_file(PanelKind::Time, &path);
        std::fs::remove_file(&path).ok();

        state.set_column_checked(PanelKind::Time, 1, false);
        state.set_column_checked(PanelKind::Time, 3, true);
        state.dismiss_error();

        let retained = state.time.retained.as_ref().unwrap();
        assert_eq!(retained.y, vec![3.0, 4.0]);
    }

    #[test]
    fn test_extra_selection_is_warning_only() {
        let path = write_file("extra.dat", "0 1 2 3 4\n1 2 3 4 5\n");
        let mut state = AppState::default();
        state.open_file(PanelKind::Time, &path);
        std::fs::remove_file(&path).ok();
        for slot in 2..5 {
            state.set_column_checked(PanelKind::Time, slot, true);
        }

        assert!(state.pending_error.is_none());
        assert_eq!(state.status.as_ref().unwrap().level, NoticeLevel::Warning);
        let chart = state.time.chart.as_ref().unwrap();
        assert_eq!(chart.z.as_ref().unwrap().values, vec![2.0, 3.0]);
    }

    #[test]
    fn test_malformed_reload_keeps_previous_matrix() {
        let good = write_file("good.dat", "0 1\n1 2\n");
        let bad = write_file("bad.dat", "5 6\n7\n");
        let mut state = AppState::default();
        state.open_file(PanelKind::Spectral, &good);
        state.open_file(PanelKind::Spectral, &bad);
        std::fs::remove_file(&good).ok();
        std::fs::remove_file(&bad).ok();

        assert!(state.pending_error.is_some());
        let source = state.spectral.source.as_ref().unwrap();
        assert_eq!(source.path, good);
        assert_eq!(source.matrix.column(0), Some(vec![0.0, 1.0]));
        assert_eq!(state.spectral.retained.as_ref().unwrap().y, vec![1.0, 2.0]);
    }

    #[test]
    fn test_save_without_plot_is_no_data() {
        let mut state = AppState::default();
        state.save_selection(PanelKind::Time, temp_path("nothing.csv"));
        assert!(state.pending_error.as_deref().unwrap().contains("No data"));
        assert!(!temp_path("nothing.csv").exists());
    }

    #[test]
    fn test_save_confirms_path() {
        let data = write_file("save.dat", "0 1\n1 2\n2 3\n");
        let out = temp_path("save.csv");
        let mut state = AppState::default();
        state.open_file(PanelKind::Time, &data);
        state.save_selection(PanelKind::Time, out.clone());
        let written = std::fs::read_to_string(&out).unwrap();
        std::fs::remove_file(&data).ok();
        std::fs::remove_file(&out).ok();

        assert_eq!(written.lines().count(), 4);
        assert_eq!(state.status.as_ref().unwrap().level, NoticeLevel::Info);
    }

    #[test]
    fn test_default_export_name() {
        let data = write_file("Ek.dat", "0 1\n");
        let mut state = AppState::default();
        state.open_file(PanelKind::Time, &data);
        std::fs::remove_file(&data).ok();
        let stem = data.file_stem().unwrap().to_string_lossy().into_owned();
        assert_eq!(state.time.default_export_name(), format!("{stem}_time.csv"));
        assert_eq!(state.spectral.default_export_name(), "frog_spectral.csv");
    }
}
