use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LineListApp {
    pub state: AppState,
}

impl eframe::App for LineListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: summary ----
        egui::SidePanel::left("summary_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: grouped results table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::results_table(ui, &self.state);
        });

        self.drop_hint(ctx);
    }
}

impl LineListApp {
    /// Review the first file dragged onto the window, same path as
    /// File → Open.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            self.state.load_path(&path);
        }
    }

    /// Dim the window and show a hint while a file hovers over it.
    fn drop_hint(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("drop_hint")));
        let rect = ctx.screen_rect();
        painter.rect_filled(rect, 0, Color32::from_black_alpha(128));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drop line list to review",
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}
