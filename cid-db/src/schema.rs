//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `indicators` - Indicator names with the position of their first appearance
///   in the source CSV, so dropdowns can list them in source order.
/// - `source_keys` - Every (country, year, indicator) the source names,
///   including rows with an empty value. The primary key rejects duplicate
///   triples, which would make the wide-form pivot ambiguous.
/// - `indicator_values` - The long-form dataset, one numeric value per
///   (country, year, indicator).
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS indicators (
        name TEXT PRIMARY KEY,
        position INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS source_keys (
        country TEXT NOT NULL,
        year INTEGER NOT NULL,
        indicator TEXT NOT NULL,
        PRIMARY KEY (country, year, indicator)
    );

    CREATE TABLE IF NOT EXISTS indicator_values (
        country TEXT NOT NULL,
        year INTEGER NOT NULL,
        indicator TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (country, year, indicator)
    );
    CREATE INDEX IF NOT EXISTS idx_values_year ON indicator_values(year);
    CREATE INDEX IF NOT EXISTS idx_values_indicator ON indicator_values(indicator);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in &["indicators", "source_keys", "indicator_values"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for idx in &["idx_values_year", "idx_values_indicator"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name=?1",
                    [idx],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
