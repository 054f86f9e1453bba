use super::model::LineRecord;

/// Area name used when the title row has no usable text.
pub const FALLBACK_AREA_NAME: &str = "Unknown Area";

// ---------------------------------------------------------------------------
// Area name extraction
// ---------------------------------------------------------------------------

/// Extract the area name from the sheet's title row: the first cell whose
/// trimmed text is non-empty, or [`FALLBACK_AREA_NAME`] when the whole row
/// is blank. Only the title row is ever inspected.
pub fn extract_area_name(title_row: &[String]) -> String {
    title_row
        .iter()
        .map(|cell| cell.trim())
        .find(|cell| !cell.is_empty())
        .map_or_else(|| FALLBACK_AREA_NAME.to_string(), str::to_string)
}

// ---------------------------------------------------------------------------
// Row normalization (forward-fill)
// ---------------------------------------------------------------------------

/// Normalize the post-title rows into candidate records, in source order,
/// with `is_duplicate` left false for the detector to stamp.
///
/// Column A (P&ID No.) is forward-filled: a row with an empty P&ID cell
/// inherits the last non-empty value seen above it. A row is dropped when it
/// is entirely blank, has no line number, or precedes the first P&ID. A row
/// with a P&ID but no line number emits nothing but still moves the fill
/// cursor, so later line-only rows inherit from it.
///
/// The cursor lives entirely within one call; repeated invocations are
/// independent.
pub fn normalize_rows(rows: &[Vec<String>]) -> Vec<LineRecord> {
    let mut records = Vec::new();
    let mut current_pid: Option<String> = None;

    for (row_idx, row) in rows.iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let pid_cell = row.first().map(|c| c.trim()).unwrap_or("");
        let line_cell = row.get(1).map(|c| c.trim()).unwrap_or("");

        if !pid_cell.is_empty() {
            current_pid = Some(pid_cell.to_string());
        }

        // A row with no line number carries no entry of its own.
        if line_cell.is_empty() {
            continue;
        }

        if let Some(pid) = &current_pid {
            records.push(LineRecord {
                pid_no: pid.clone(),
                line_no: line_cell.to_string(),
                source_row: row_idx,
                is_duplicate: false,
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn area_name_is_first_non_empty_cell() {
        let title = vec!["".to_string(), "  ".to_string(), " 055 LINE LIST ".to_string()];
        assert_eq!(extract_area_name(&title), "055 LINE LIST");
    }

    #[test]
    fn area_name_falls_back_when_title_row_is_blank() {
        assert_eq!(extract_area_name(&[]), FALLBACK_AREA_NAME);
        let blank = vec!["".to_string(), "   ".to_string()];
        assert_eq!(extract_area_name(&blank), FALLBACK_AREA_NAME);
    }

    #[test]
    fn empty_pid_cells_inherit_the_value_above() {
        let records = normalize_rows(&rows(&[
            &["PID-1", "L-100"],
            &["", "L-200"],
            &["", "L-300"],
            &["PID-2", "L-400"],
        ]));

        let pids: Vec<&str> = records.iter().map(|r| r.pid_no.as_str()).collect();
        assert_eq!(pids, ["PID-1", "PID-1", "PID-1", "PID-2"]);
    }

    #[test]
    fn rows_before_the_first_pid_are_dropped() {
        let records = normalize_rows(&rows(&[&["", "L-1"], &["P-1", "L-2"]]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid_no, "P-1");
        assert_eq!(records[0].line_no, "L-2");
        assert_eq!(records[0].source_row, 1);
    }

    #[test]
    fn rows_without_a_line_number_emit_nothing() {
        let records = normalize_rows(&rows(&[&["P-1", ""], &["P-2"]]));
        assert!(records.is_empty());
    }

    #[test]
    fn line_less_rows_still_move_the_fill_cursor() {
        // P-1 sits on a header-ish row with no line number of its own; the
        // line-only row below must still inherit it.
        let records = normalize_rows(&rows(&[&["P-1", ""], &["", "L-1"]]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid_no, "P-1");
        assert_eq!(records[0].line_no, "L-1");
        assert_eq!(records[0].source_row, 1);
    }

    #[test]
    fn blank_rows_are_skipped_but_keep_source_indices() {
        let records = normalize_rows(&rows(&[
            &["P-1", "L-1"],
            &["", "  "],
            &[],
            &["", "L-2"],
        ]));

        let indices: Vec<usize> = records.iter().map(|r| r.source_row).collect();
        assert_eq!(indices, [0, 3]);
    }

    #[test]
    fn cells_are_trimmed_and_whitespace_only_counts_as_empty() {
        let records = normalize_rows(&rows(&[
            &[" P-1 ", " L-1 "],
            &["   ", "L-2"],
        ]));

        assert_eq!(records[0].pid_no, "P-1");
        assert_eq!(records[0].line_no, "L-1");
        assert_eq!(records[1].pid_no, "P-1", "whitespace-only P&ID cell must inherit");
    }

    #[test]
    fn short_rows_are_treated_as_missing_cells() {
        // A one-cell row has no line column at all.
        let records = normalize_rows(&rows(&[&["P-1"], &["", "L-1"]]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid_no, "P-1");
    }
}
