//! Data layer: core types, file decoding, and the review pipeline.
//!
//! ```text
//!  .xlsx / .xls / .ods / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  decode file → RawGrid
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ normalize  │  title row → area name, forward-fill → LineRecords
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  dedupe   │  flag repeated line numbers, count them
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  group    │  first-seen P&ID groups → table rows / CSV export
//!   └──────────┘
//! ```

pub mod dedupe;
pub mod export;
pub mod group;
pub mod loader;
pub mod model;
pub mod normalize;

use thiserror::Error;

use self::dedupe::mark_duplicates;
use self::model::ReviewedSheet;
use self::normalize::{extract_area_name, normalize_rows};

/// A grid that cannot be reviewed at all. Anything less drastic (blank rows,
/// missing cells, stray formatting) is filtered row by row instead of
/// failing the whole file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("file must contain at least 2 rows (title + data), got {0}")]
    TooFewRows(usize),
}

/// Run the full review pipeline over a decoded grid.
///
/// Row 0 is the title row (area name); every later row is normalized,
/// forward-filled and checked for duplicate line numbers. The result is a
/// self-contained snapshot: loading the next file replaces it wholesale.
pub fn review_grid(grid: &[Vec<String>]) -> Result<ReviewedSheet, GridError> {
    if grid.len() < 2 {
        return Err(GridError::TooFewRows(grid.len()));
    }

    let area_name = extract_area_name(&grid[0]);
    let candidates = normalize_rows(&grid[1..]);
    let (records, duplicate_count) = mark_duplicates(candidates);

    Ok(ReviewedSheet {
        records,
        area_name,
        duplicate_count,
    })
}
