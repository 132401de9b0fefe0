use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (hue_offset + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Colours for the primary and secondary series of a chart.
#[derive(Debug, Clone, Copy)]
pub struct SeriesColors {
    pub primary: Color32,
    pub secondary: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        // Blue-ish primary, orange-ish secondary.
        let palette = generate_palette(2, 210.0);
        Self {
            primary: palette[0],
            secondary: palette[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_len_and_distinct() {
        assert!(generate_palette(0, 0.0).is_empty());
        let p = generate_palette(3, 0.0);
        assert_eq!(p.len(), 3);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
    }

    #[test]
    fn test_series_colors_differ() {
        let c = SeriesColors::default();
        assert_ne!(c.primary, c.secondary);
    }
}
