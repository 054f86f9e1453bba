use std::path::Path;

use crate::data::group::{group_by_pid, PidGroup};
use crate::data::loader::load_grid;
use crate::data::model::{LineRecord, ReviewedSheet};
use crate::data::review_grid;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Reviewed sheet (None until the user loads a file).
    pub sheet: Option<ReviewedSheet>,

    /// When set, the table and the export only contain duplicate records.
    pub show_duplicates_only: bool,

    /// Grouped view of the currently visible records (cached).
    pub visible_groups: Vec<PidGroup>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sheet: None,
            show_duplicates_only: false,
            visible_groups: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly reviewed sheet, replacing the previous one wholesale.
    pub fn set_sheet(&mut self, sheet: ReviewedSheet) {
        self.sheet = Some(sheet);
        self.show_duplicates_only = false;
        self.status_message = None;
        self.regroup();
    }

    /// Decode and review a file. State is only replaced when the whole
    /// pipeline succeeds; on failure the previous sheet stays visible.
    pub fn load_path(&mut self, path: &Path) {
        let reviewed =
            load_grid(path).and_then(|grid| review_grid(&grid).map_err(anyhow::Error::from));

        match reviewed {
            Ok(sheet) => {
                log::info!(
                    "Reviewed {}: {} line entries, {} duplicates, area '{}'",
                    path.display(),
                    sheet.len(),
                    sheet.duplicate_count,
                    sheet.area_name
                );
                self.set_sheet(sheet);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Records currently in view: all of them, or only the duplicates when
    /// the toggle is on. The CSV export uses this same selection.
    pub fn visible_records(&self) -> Vec<LineRecord> {
        match &self.sheet {
            Some(sheet) if self.show_duplicates_only => sheet
                .records
                .iter()
                .filter(|r| r.is_duplicate)
                .cloned()
                .collect(),
            Some(sheet) => sheet.records.clone(),
            None => Vec::new(),
        }
    }

    /// Recompute the cached grouping after a filter change.
    pub fn regroup(&mut self) {
        self.visible_groups = group_by_pid(&self.visible_records());
    }

    /// Flip the duplicates-only filter.
    pub fn toggle_duplicates_only(&mut self) {
        self.show_duplicates_only = !self.show_duplicates_only;
        self.regroup();
    }

    /// Drop the loaded sheet so a new file can be reviewed from scratch.
    pub fn clear(&mut self) {
        self.sheet = None;
        self.show_duplicates_only = false;
        self.visible_groups.clear();
        self.status_message = None;
    }
}
