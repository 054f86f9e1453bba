use std::collections::BTreeMap;

use super::model::LineRecord;

// ---------------------------------------------------------------------------
// Duplicate detection – two passes over the normalized sequence
// ---------------------------------------------------------------------------

/// First pass: every position at which each line number occurs, in ascending
/// order. Matching is exact and case-sensitive on the already-trimmed value.
pub fn line_no_occurrences(records: &[LineRecord]) -> BTreeMap<String, Vec<usize>> {
    let mut occurrences: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        occurrences
            .entry(record.line_no.clone())
            .or_default()
            .push(idx);
    }
    occurrences
}

/// Second pass: flag every record whose line number already appeared at a
/// lower position. The earliest occurrence of each line number stays
/// unflagged, every later one is a duplicate, regardless of which P&ID it
/// sits under. Returns the stamped sequence (original order preserved) and
/// the number of flagged records.
pub fn mark_duplicates(records: Vec<LineRecord>) -> (Vec<LineRecord>, usize) {
    let occurrences = line_no_occurrences(&records);
    let mut duplicate_count = 0;

    let stamped = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let is_duplicate = occurrences[record.line_no.as_str()][0] != idx;
            if is_duplicate {
                duplicate_count += 1;
            }
            LineRecord {
                is_duplicate,
                ..record
            }
        })
        .collect();

    (stamped, duplicate_count)
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
    fn occurrence_index_lists_positions_in_order() {
        let records = vec![
            record("P-1", "L-1", 0),
            record("P-1", "L-2", 1),
            record("P-2", "L-1", 2),
        ];

        let occurrences = line_no_occurrences(&records);
        assert_eq!(occurrences["L-1"], [0, 2]);
        assert_eq!(occurrences["L-2"], [1]);
    }

    #[test]
    fn only_the_first_occurrence_stays_unflagged() {
        let records = vec![
            record("P-1", "L-1", 0),
            record("P-2", "L-1", 3),
            record("P-3", "L-1", 7),
        ];

        let (stamped, count) = mark_duplicates(records);
        let flags: Vec<bool> = stamped.iter().map(|r| r.is_duplicate).collect();
        assert_eq!(flags, [false, true, true]);
        assert_eq!(count, 2);
    }

    #[test]
    fn unique_line_numbers_are_never_flagged() {
        let records = vec![record("P-1", "L-1", 0), record("P-1", "L-2", 1)];

        let (stamped, count) = mark_duplicates(records);
        assert!(stamped.iter().all(|r| !r.is_duplicate));
        assert_eq!(count, 0);
    }

    #[test]
    fn duplicates_cross_pid_groups() {
        // Line numbers are globally unique identifiers; the P&ID a record
        // sits under does not matter for duplicate detection.
        let records = vec![record("P-1", "L-100", 0), record("P-2", "L-100", 1)];

        let (stamped, count) = mark_duplicates(records);
        assert!(!stamped[0].is_duplicate);
        assert!(stamped[1].is_duplicate);
        assert_eq!(count, 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let records = vec![record("P-1", "L-1", 0), record("P-1", "l-1", 1)];

        let (stamped, count) = mark_duplicates(records);
        assert!(stamped.iter().all(|r| !r.is_duplicate));
        assert_eq!(count, 0);
    }

    #[test]
    fn stamping_preserves_order_and_fields() {
        let records = vec![
            record("P-1", "L-1", 2),
            record("P-1", "L-1", 5),
            record("P-2", "L-2", 9),
        ];

        let (stamped, _) = mark_duplicates(records);
        let rows: Vec<usize> = stamped.iter().map(|r| r.source_row).collect();
        assert_eq!(rows, [2, 5, 9]);
        assert_eq!(stamped[1].pid_no, "P-1");
    }
}
