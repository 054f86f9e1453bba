use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use super::model::RawGrid;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Decode a spreadsheet file into a grid of text cells. Dispatch by
/// extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – first worksheet, via calamine
/// * `.csv`  – comma-separated, ragged rows tolerated
pub fn load_grid(path: &Path) -> Result<RawGrid> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Excel / ODS loader
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path) -> Result<RawGrid> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;

    // The line list always lives on the first sheet.
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("workbook contains no sheets")?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("reading sheet '{sheet_name}'"))?;

    let grid = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Ok(grid)
}

/// Render one worksheet cell the way it displays.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<RawGrid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let mut grid = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}
