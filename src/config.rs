// ---------------------------------------------------------------------------
// Viewer configuration (in-code defaults, nothing is persisted)
// ---------------------------------------------------------------------------

/// Tunables shared by the plot engine and the UI.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Minimum number of columns a data file needs before anything is plotted.
    pub min_columns: usize,
    /// Radius of the circular markers on the primary series.
    pub marker_radius: f32,
    /// Stroke width of every plotted line.
    pub line_width: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_columns: 2,
            marker_radius: 2.5,
            line_width: 1.5,
            window_size: [1200.0, 800.0],
            min_window_size: [700.0, 500.0],
        }
    }
}
