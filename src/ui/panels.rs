use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export::write_export;
use crate::state::AppState;
use crate::ui::table::DUPLICATE_COLOR;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let loaded = state.sheet.is_some();
            if ui
                .add_enabled(loaded, egui::Button::new("Export CSV…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.add_enabled(loaded, egui::Button::new("Clear")).clicked() {
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(sheet) = &state.sheet {
            ui.label(format!(
                "{} line entries, {} duplicates",
                sheet.len(),
                sheet.duplicate_count
            ));

            ui.separator();

            if ui
                .selectable_label(state.show_duplicates_only, "Duplicates Only")
                .clicked()
            {
                state.toggle_duplicates_only();
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – review summary
// ---------------------------------------------------------------------------

/// Render the summary panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Summary");
    ui.separator();

    let sheet = match &state.sheet {
        Some(sheet) => sheet,
        None => {
            ui.label("No file loaded.");
            ui.add_space(8.0);
            ui.small("Expected layout:");
            ui.small("• Row 1: area name (e.g. \"055 LINE LIST\")");
            ui.small("• Column A: P&ID No. — blank cells inherit the value above");
            ui.small("• Column B: Line No.");
            return;
        }
    };

    egui::Grid::new("summary_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Area");
            ui.strong(&sheet.area_name);
            ui.end_row();

            ui.label("Total rows");
            ui.strong(sheet.len().to_string());
            ui.end_row();

            ui.label("Unique P&ID No.");
            ui.strong(sheet.unique_pid_count().to_string());
            ui.end_row();

            ui.label("Unique Line No.");
            ui.strong(sheet.unique_line_count().to_string());
            ui.end_row();

            ui.label("Duplicates");
            let mut count = RichText::new(sheet.duplicate_count.to_string()).strong();
            if sheet.duplicate_count > 0 {
                count = count.color(DUPLICATE_COLOR);
            }
            ui.label(count);
            ui.end_row();
        });

    if sheet.duplicate_count > 0 {
        ui.add_space(8.0);
        ui.small(
            RichText::new("Duplicate line numbers are highlighted in the table.")
                .color(DUPLICATE_COLOR),
        );
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open line list")
        .add_filter("Supported files", &["xlsx", "xlsm", "xls", "ods", "csv"])
        .add_filter("Excel / ODS", &["xlsx", "xlsm", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let Some(sheet) = &state.sheet else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export reviewed line list")
        .set_file_name(suggested_export_name(&sheet.area_name))
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let area_name = sheet.area_name.clone();
    let records = state.visible_records();
    match write_export(&area_name, &records, &path) {
        Ok(()) => {
            log::info!("Exported {} rows to {}", records.len(), path.display());
        }
        Err(e) => {
            log::error!("Failed to export: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

/// Suggested export file name: the area name with every non-alphanumeric
/// character replaced by `_`. The core never sees file names; this policy
/// belongs to the shell.
fn suggested_export_name(area_name: &str) -> String {
    let stem: String = area_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}_processed.csv")
}
