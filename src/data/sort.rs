use std::cmp::Ordering;

use log::debug;

use super::model::{Record, SortKey};

// ---------------------------------------------------------------------------
// Key parsing
// ---------------------------------------------------------------------------

/// Surrounding whitespace is ignored.  Empty, absent, non-numeric and NaN
/// cells give `None`.
fn parse_cell(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

/// Parse a cell as a float, falling back to negative infinity so that
/// unusable cells sort last under a descending order.
pub fn parse_numeric(raw: Option<&str>) -> f64 {
    parse_cell(raw).unwrap_or(f64::NEG_INFINITY)
}

/// Sort key of a cell: its [`parse_numeric`] value, plus whether the cell
/// was a number in the first place.
pub fn sort_key(raw: Option<&str>) -> SortKey {
    SortKey {
        value: parse_numeric(raw),
        numeric: parse_cell(raw).is_some(),
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Stable descending sort of `records` by the numeric value of the cell at
/// `key_index`.  Records without a usable value end up last, in input order.
pub fn sort_records(records: Vec<Record>, key_index: usize) -> Vec<Record> {
    let mut keyed: Vec<(SortKey, Record)> = records
        .into_iter()
        .map(|record| (sort_key(record.get(key_index)), record))
        .collect();

    let missing = keyed.iter().filter(|(key, _)| key.is_missing()).count();
    if missing > 0 {
        debug!("{missing} rows have no numeric value in column {key_index}");
    }

    // `sort_by` is stable; comparing b to a gives descending order.
    keyed.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    keyed.into_iter().map(|(_, record)| record).collect()
}
