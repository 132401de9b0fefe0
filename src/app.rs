use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::model::PanelKind;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FrogViewerApp {
    pub state: AppState,
}

impl FrogViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for FrogViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column checkboxes ----
        egui::SidePanel::left("column_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: time-domain chart above spectral chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let spacing = ui.spacing().item_spacing.y;
            let height = ((ui.available_height() - 4.0 * spacing - 40.0) / 2.0).max(120.0);
            for kind in PanelKind::ALL {
                plot::panel_plot(ui, self.state.panel(kind), &self.state.config, height);
                if kind == PanelKind::Time {
                    ui.separator();
                }
            }
        });

        panels::error_modal(ctx, &mut self.state);
    }
}
