use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::group::group_by_pid;
use super::model::LineRecord;

// ---------------------------------------------------------------------------
// Grouped CSV report
// ---------------------------------------------------------------------------

/// Build the export document: area name, summary block, then the records
/// grouped by P&ID with a blank row between groups. Every field is
/// double-quoted; rows are `\n`-joined UTF-8.
///
/// Groups come from the same [`group_by_pid`] the table uses, so the file
/// reads exactly like the on-screen view: the P&ID appears only on the
/// first row of its group.
pub fn export_document(area_name: &str, records: &[LineRecord]) -> Result<String> {
    let groups = group_by_pid(records);
    let unique_lines: BTreeSet<&str> = records.iter().map(|r| r.line_no.as_str()).collect();
    let duplicate_count = records.iter().filter(|r| r.is_duplicate).count();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record([area_name])?;
    writer.write_record([""])?;

    writer.write_record(["SUMMARY STATISTICS"])?;
    let total = records.len().to_string();
    writer.write_record(["Total Rows:", total.as_str()])?;
    let pid_count = groups.len().to_string();
    writer.write_record(["Unique P&ID Numbers:", pid_count.as_str()])?;
    let line_count = unique_lines.len().to_string();
    writer.write_record(["Unique Line Numbers:", line_count.as_str()])?;
    let dup_count = duplicate_count.to_string();
    writer.write_record(["Duplicate Line Numbers:", dup_count.as_str()])?;
    writer.write_record([""])?;

    writer.write_record(["P&ID No.", "Line No.", "Is Duplicate"])?;

    for (group_idx, group) in groups.iter().enumerate() {
        if group_idx > 0 {
            writer.write_record([""])?;
        }
        for (row_idx, record) in group.rows.iter().enumerate() {
            let pid = if row_idx == 0 { group.pid_no.as_str() } else { "" };
            let flag = if record.is_duplicate { "Yes" } else { "No" };
            writer.write_record([pid, record.line_no.as_str(), flag])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finishing export document: {e}"))?;
    String::from_utf8(bytes).context("export document is not UTF-8")
}

/// Write the export document for `records` to `path`.
pub fn write_export(area_name: &str, records: &[LineRecord], path: &Path) -> Result<()> {
    let document = export_document(area_name, records)?;
    std::fs::write(path, document).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
