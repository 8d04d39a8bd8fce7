//! Query result model structs.

use serde::Serialize;
use std::collections::BTreeMap;

/// One pivoted row: every indicator value reported for a (country, year).
///
/// Indicators the country did not report that year are simply absent from
/// `values`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WideRow {
    pub country: String,
    pub year: i32,
    /// Indicator long name -> value.
    pub values: BTreeMap<String, f64>,
}

/// Counts reported by [`Database::load_indicators`](crate::Database::load_indicators).
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows inserted.
    pub loaded: usize,
    /// Rows skipped for an empty name or a non-numeric year or value.
    pub skipped: usize,
}
