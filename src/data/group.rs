use std::collections::BTreeMap;

use super::model::LineRecord;

// ---------------------------------------------------------------------------
// PidGroup – records clustered under one P&ID number
// ---------------------------------------------------------------------------

/// A cluster of records sharing one P&ID number, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PidGroup {
    pub pid_no: String,
    /// Member records, keeping their relative order from the input sequence.
    pub rows: Vec<LineRecord>,
}

/// Group records by P&ID number.
///
/// Group order is the order in which each P&ID first appears in the input,
/// never alphabetical or hash order; rows inside a group keep their relative
/// input order. Both the results table and the CSV export derive from this
/// one function, so the two presentations always agree on grouping and
/// ordering.
pub fn group_by_pid(records: &[LineRecord]) -> Vec<PidGroup> {
    let mut groups: Vec<PidGroup> = Vec::new();
    let mut slot_by_pid: BTreeMap<&str, usize> = BTreeMap::new();

    for record in records {
        let slot = match slot_by_pid.get(record.pid_no.as_str()) {
            Some(&slot) => slot,
            None => {
                groups.push(PidGroup {
                    pid_no: record.pid_no.clone(),
                    rows: Vec::new(),
                });
                slot_by_pid.insert(record.pid_no.as_str(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].rows.push(record.clone());
    }

    groups
}

// ---------------------------------------------------------------------------
// Display rows – flattened grouping for the table
// ---------------------------------------------------------------------------

/// One row of the grouped display. Only the row that leads its group shows
/// the P&ID cell; later rows leave it blank to read as continuations.
#[derive(Debug, Clone, Copy)]
pub struct DisplayRow<'a> {
    pub record: &'a LineRecord,
    pub first_in_group: bool,
}

/// Flatten groups into display order.
pub fn display_rows(groups: &[PidGroup]) -> Vec<DisplayRow<'_>> {
    groups
        .iter()
        .flat_map(|group| {
            group.rows.iter().enumerate().map(|(idx, record)| DisplayRow {
                record,
                first_in_group: idx == 0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: &str, line: &str, source_row: usize) -> LineRecord {
        LineRecord {
            pid_no: pid.to_string(),
            line_no: line.to_string(),
            source_row,
            is_duplicate: false,
        }
    }

    #[test]
    fn groups_follow_first_seen_order_not_alphabetical() {
        let records = vec![
            record("P-9", "L-1", 0),
            record("P-1", "L-2", 1),
            record("P-9", "L-3", 2),
        ];

        let groups = group_by_pid(&records);
        let pids: Vec<&str> = groups.iter().map(|g| g.pid_no.as_str()).collect();
        assert_eq!(pids, ["P-9", "P-1"]);

        let p9_lines: Vec<&str> = groups[0].rows.iter().map(|r| r.line_no.as_str()).collect();
        assert_eq!(p9_lines, ["L-1", "L-3"]);
    }

    #[test]
    fn rows_keep_their_relative_order_inside_a_group() {
        let records = vec![
            record("P-1", "L-3", 0),
            record("P-2", "L-9", 1),
            record("P-1", "L-1", 2),
            record("P-1", "L-2", 3),
        ];

        let groups = group_by_pid(&records);
        let p1_rows: Vec<usize> = groups[0].rows.iter().map(|r| r.source_row).collect();
        assert_eq!(p1_rows, [0, 2, 3], "stable, not re-sorted by line number");
    }

    #[test]
    fn grouping_is_idempotent() {
        let records = vec![
            record("P-2", "L-1", 0),
            record("P-1", "L-2", 1),
            record("P-2", "L-3", 2),
        ];

        assert_eq!(group_by_pid(&records), group_by_pid(&records));
    }

    #[test]
    fn display_rows_flag_only_group_leaders() {
        let records = vec![
            record("P-1", "L-1", 0),
            record("P-1", "L-2", 1),
            record("P-2", "L-3", 2),
        ];

        let groups = group_by_pid(&records);
        let rows = display_rows(&groups);
        let flags: Vec<bool> = rows.iter().map(|r| r.first_in_group).collect();
        assert_eq!(flags, [true, false, true]);
        assert_eq!(rows[1].record.line_no, "L-2");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_pid(&[]).is_empty());
        assert!(display_rows(&[]).is_empty());
    }
}
