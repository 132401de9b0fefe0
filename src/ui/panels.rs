use eframe::egui::{self, Align2, Color32, RichText, Ui};

use crate::data::model::{file_name_of, PanelKind};
use crate::state::{AppState, NoticeLevel};

// ---------------------------------------------------------------------------
// Left side panel – column checkboxes
// ---------------------------------------------------------------------------

/// Render the column selection groups, one per chart panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Columns");
    ui.separator();

    for kind in PanelKind::ALL {
        column_group(ui, state, kind);
        ui.add_space(8.0);
    }
}

fn column_group(ui: &mut Ui, state: &mut AppState, kind: PanelKind) {
    let panel = state.panel(kind);
    ui.strong(kind.to_string());
    match &panel.source {
        Some(file) => ui.label(format!(
            "{}  ({} × {})",
            file.display_name(),
            file.matrix.n_rows(),
            file.matrix.n_cols()
        )),
        None => ui.label(RichText::new("No file loaded.").color(Color32::GRAY)),
    };

    // Collect changes first, apply after the immutable borrow ends.
    let mut changes: Vec<(usize, bool)> = Vec::new();
    for (idx, slot) in panel.selection.slots().iter().enumerate() {
        let mut checked = slot.checked;
        if ui.checkbox(&mut checked, slot.label.as_str()).changed() {
            changes.push((idx, checked));
        }
    }
    for (idx, checked) in changes {
        state.set_column_checked(kind, idx, checked);
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Open…").clicked() {
            open_file_dialog(state, kind);
        }
        let can_save = state
            .panel(kind)
            .retained
            .as_ref()
            .is_some_and(|pair| !pair.is_empty());
        if ui
            .add_enabled(can_save, egui::Button::new("Save…"))
            .clicked()
        {
            save_file_dialog(state, kind);
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            for kind in PanelKind::ALL {
                if ui
                    .button(format!("Open {} file…", kind.to_string().to_lowercase()))
                    .clicked()
                {
                    open_file_dialog(state, kind);
                    ui.close_menu();
                }
            }
            ui.separator();
            for kind in PanelKind::ALL {
                if ui
                    .button(format!("Save {} selection…", kind.to_string().to_lowercase()))
                    .clicked()
                {
                    save_file_dialog(state, kind);
                    ui.close_menu();
                }
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(notice) = &state.status {
            let color = match notice.level {
                NoticeLevel::Info => Color32::LIGHT_GREEN,
                NoticeLevel::Warning => Color32::YELLOW,
            };
            ui.label(RichText::new(&notice.message).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Error modal
// ---------------------------------------------------------------------------

/// Show the pending error, if any, until the user acknowledges it.
pub fn error_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.pending_error.clone() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(RichText::new(message).color(Color32::RED));
            ui.add_space(6.0);
            ui.vertical_centered(|ui: &mut Ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.dismiss_error();
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, kind: PanelKind) {
    let file = rfd::FileDialog::new()
        .set_title(format!("Open {} data", kind.to_string().to_lowercase()))
        .add_filter("Data files", &["dat", "txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        log::debug!("Opening {} for {kind} panel", file_name_of(&path));
        state.open_file(kind, &path);
    }
}

pub fn save_file_dialog(state: &mut AppState, kind: PanelKind) {
    let file = rfd::FileDialog::new()
        .set_title(format!("Save {} selection", kind.to_string().to_lowercase()))
        .add_filter("CSV", &["csv"])
        .set_file_name(state.panel(kind).default_export_name())
        .save_file();

    if let Some(path) = file {
        state.save_selection(kind, path);
    }
}
