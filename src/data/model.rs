use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// RawGrid – a decoded spreadsheet, before any interpretation
// ---------------------------------------------------------------------------

/// Rows of text cells in physical sheet order. Rows may be ragged and cells
/// may be empty strings; the normalizer deals with both.
pub type RawGrid = Vec<Vec<String>>;

// ---------------------------------------------------------------------------
// LineRecord – one surviving row of the line list
// ---------------------------------------------------------------------------

/// A normalized line-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// P&ID number, forward-filled from the last non-empty column-A cell.
    pub pid_no: String,
    /// Line number, taken verbatim (trimmed) from column B of this row.
    pub line_no: String,
    /// 0-based offset of the source row within the post-title rows.
    pub source_row: usize,
    /// True when an earlier record carries the same line number.
    pub is_duplicate: bool,
}

// ---------------------------------------------------------------------------
// ReviewedSheet – the complete reviewed line list
// ---------------------------------------------------------------------------

/// The fully reviewed sheet: normalized records plus sheet-level metadata.
/// A new file load replaces the whole value; nothing is patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewedSheet {
    /// All records in source order, duplicate flags stamped.
    pub records: Vec<LineRecord>,
    /// Area name taken from the sheet's title row.
    pub area_name: String,
    /// Number of records flagged as duplicates.
    pub duplicate_count: usize,
}

impl ReviewedSheet {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sheet produced any records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct P&ID numbers across all records.
    pub fn unique_pid_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.pid_no.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of distinct line numbers across all records.
    pub fn unique_line_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.line_no.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
