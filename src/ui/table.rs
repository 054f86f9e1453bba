use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::group::display_rows;
use crate::state::AppState;

/// Highlight for duplicate line numbers, in the table and the summary.
pub const DUPLICATE_COLOR: Color32 = Color32::from_rgb(0x7b, 0xd8, 0x7b);

// ---------------------------------------------------------------------------
// Grouped results table (central panel)
// ---------------------------------------------------------------------------

/// Render the reviewed line list as a grouped table.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    if state.sheet.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a line list to review it  (File → Open…, or drop a file here)");
        });
        return;
    }

    let rows = display_rows(&state.visible_groups);

    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(if state.show_duplicates_only {
                "No duplicate line numbers."
            } else {
                "No usable rows in this sheet."
            });
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(48.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Row");
            });
            header.col(|ui| {
                ui.strong("P&ID No.");
            });
            header.col(|ui| {
                ui.strong("Line No.");
            });
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut table_row| {
                let row = &rows[table_row.index()];

                table_row.col(|ui| {
                    // +2: 1-based and counting the title row, so the number
                    // matches the row in the source spreadsheet.
                    ui.weak((row.record.source_row + 2).to_string());
                });

                table_row.col(|ui| {
                    // Continuation rows leave the P&ID cell blank.
                    if row.first_in_group {
                        ui.strong(&row.record.pid_no);
                    }
                });

                table_row.col(|ui| {
                    if row.record.is_duplicate {
                        ui.label(
                            RichText::new(&row.record.line_no)
                                .color(DUPLICATE_COLOR)
                                .strong(),
                        );
                    } else {
                        ui.label(&row.record.line_no);
                    }
                });
            });
        });
}
