use chrono::{Datelike, NaiveDate};

use crate::model::Invoice;

const ID_PREFIX: &str = "BL";

/// Prefix for ids issued in the month of `reference`, e.g. `BL-25-06`.
pub fn month_prefix(reference: NaiveDate) -> String {
    format!(
        "{}-{:02}-{:02}",
        ID_PREFIX,
        reference.year() % 100,
        reference.month()
    )
}

/// Derive the next invoice id for the month of `reference`.
///
/// Ids are monthly-scoped: the numeric suffix restarts at `01` whenever no
/// existing record matches the current `BL-YY-MM` prefix. Existing ids that
/// are malformed (missing segments, non-numeric tail) are skipped rather than
/// treated as an error.
pub fn next_id(existing: &[Invoice], reference: NaiveDate) -> String {
    let prefix = month_prefix(reference);

    let max_suffix = existing
        .iter()
        .filter_map(|inv| inv.id.strip_prefix(&prefix))
        .filter_map(|rest| rest.strip_prefix('-'))
        .filter_map(|tail| tail.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    format!("{}-{:02}", prefix, max_suffix + 1)
}
