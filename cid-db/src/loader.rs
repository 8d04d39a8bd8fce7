//! CSV data loading for populating the in-memory SQLite database.
//!
//! # CSV Format
//!
//! Long form with headers: `Country Name,Indicator Name,Year,Value`.
//! Columns are located by header name, so their order does not matter.
//!
//! ```text
//! Country Name,Indicator Name,Year,Value
//! Arab World,"Agriculture, value added (% of GDP)",1962,
//! France,"GDP growth (annual %)",2007,2.3
//! ```

use crate::models::LoadSummary;
use crate::Database;
use anyhow::Context;
use rusqlite::{params, ErrorCode};

pub const COUNTRY_COLUMN: &str = "Country Name";
pub const INDICATOR_COLUMN: &str = "Indicator Name";
pub const YEAR_COLUMN: &str = "Year";
pub const VALUE_COLUMN: &str = "Value";

/// Parse a year cell. Accepts "2007" as well as "2007.0".
fn parse_year(s: &str) -> Option<i32> {
    s.parse::<i32>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|y| y.fract() == 0.0).map(|y| y as i32))
}

impl Database {
    /// Load the long-form indicators dataset from a CSV string.
    ///
    /// Rows with an empty country or indicator, or with a non-numeric year or
    /// value (the source leaves missing values empty), are skipped and
    /// counted. A duplicate (country, year, indicator) triple is an error.
    pub fn load_indicators(&self, csv_data: &str) -> anyhow::Result<LoadSummary> {
        let mut conn = self.conn.borrow_mut();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let column = |name: &str| -> anyhow::Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .with_context(|| format!("dataset is missing the {:?} column", name))
        };
        let country_idx = column(COUNTRY_COLUMN)?;
        let indicator_idx = column(INDICATOR_COLUMN)?;
        let year_idx = column(YEAR_COLUMN)?;
        let value_idx = column(VALUE_COLUMN)?;

        let tx = conn.transaction()?;
        let mut summary = LoadSummary::default();
        {
            let mut next_position: i64 =
                tx.query_row("SELECT COUNT(*) FROM indicators", [], |row| row.get(0))?;
            let mut insert_indicator =
                tx.prepare("INSERT OR IGNORE INTO indicators (name, position) VALUES (?1, ?2)")?;
            let mut insert_key = tx.prepare(
                "INSERT INTO source_keys (country, year, indicator) VALUES (?1, ?2, ?3)",
            )?;
            let mut insert_value = tx.prepare(
                "INSERT INTO indicator_values (country, year, indicator, value)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            for result in rdr.records() {
                let r = result?;
                let country = r.get(country_idx).unwrap_or("").trim();
                let indicator = r.get(indicator_idx).unwrap_or("").trim();
                if country.is_empty() || indicator.is_empty() {
                    summary.skipped += 1;
                    continue;
                }

                // Indicators are registered even when this row has no value,
                // so the dropdowns list every indicator the source names.
                if insert_indicator.execute(params![indicator, next_position])? > 0 {
                    next_position += 1;
                }

                let year = match parse_year(r.get(year_idx).unwrap_or("").trim()) {
                    Some(y) => y,
                    None => {
                        summary.skipped += 1;
                        continue;
                    }
                };
                // Every row with a year claims its key, with or without a value.
                match insert_key.execute(params![country, year, indicator]) {
                    Ok(_) => {}
                    Err(rusqlite::Error::SqliteFailure(e, _))
                        if e.code == ErrorCode::ConstraintViolation =>
                    {
                        anyhow::bail!(
                            "duplicate entry for ({}, {}, {}); cannot pivot",
                            country,
                            year,
                            indicator
                        );
                    }
                    Err(e) => return Err(e.into()),
                }

                let value: f64 = match r.get(value_idx).unwrap_or("").trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        summary.skipped += 1;
                        continue;
                    }
                };

                insert_value.execute(params![country, year, indicator, value])?;
                summary.loaded += 1;
            }
        }
        tx.commit()?;

        log::info!(
            "loader: Loaded {} indicator values, skipped {} empty or non-numeric",
            summary.loaded,
            summary.skipped
        );
        Ok(summary)
    }
}
