//! Typed query methods for reading the dataset back out of the database.
//!
//! The pivot from long to wide form happens in [`Database::query_wide_rows`]:
//! values are read ordered by (country, year) and folded into one
//! [`WideRow`] per pair.

use crate::models::WideRow;
use crate::Database;
use std::collections::BTreeMap;

impl Database {
    /// Indicator names in order of first appearance in the source CSV.
    pub fn query_indicator_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name FROM indicators ORDER BY position")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Distinct years named by the source, ascending. Years whose values are
    /// all empty are included.
    pub fn query_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM source_keys ORDER BY year")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(rows)
    }

    /// Distinct country names with at least one value, ascending.
    pub fn query_countries(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT DISTINCT country FROM indicator_values ORDER BY country")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Number of long-form values stored.
    pub fn query_value_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM indicator_values", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Pivot the long-form table: one row per (country, year), ordered by
    /// country then year.
    pub fn query_wide_rows(&self) -> anyhow::Result<Vec<WideRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country, year, indicator, value FROM indicator_values
             ORDER BY country, year, indicator",
        )?;
        let mut rows = stmt.query([])?;

        let mut wide: Vec<WideRow> = Vec::new();
        while let Some(row) = rows.next()? {
            let country: String = row.get(0)?;
            let year: i32 = row.get(1)?;
            let indicator: String = row.get(2)?;
            let value: f64 = row.get(3)?;

            match wide.last_mut() {
                Some(last) if last.country == country && last.year == year => {
                    last.values.insert(indicator, value);
                }
                _ => {
                    let mut values = BTreeMap::new();
                    values.insert(indicator, value);
                    wide.push(WideRow {
                        country,
                        year,
                        values,
                    });
                }
            }
        }
        log::info!("query: query_wide_rows returned {} rows", wide.len());
        Ok(wide)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use std::collections::HashSet;

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
Country Name,Indicator Name,Year,Value
Chile,GDP growth (annual %),1962,4.7
Chile,Population density (people per sq. km of land area),1962,10.6
Chile,GDP growth (annual %),1967,3.2
Brazil,Population density (people per sq. km of land area),1967,10.1
Brazil,GDP growth (annual %),1967,4.2
Brazil,\"Fertility rate, total (births per woman)\",1962,6.1
";
        db.load_indicators(csv).unwrap();
        db
    }

    #[test]
    fn indicator_names_keep_source_order() {
        let db = sample_db();
        assert_eq!(
            db.query_indicator_names().unwrap(),
            vec![
                "GDP growth (annual %)",
                "Population density (people per sq. km of land area)",
                "Fertility rate, total (births per woman)",
            ]
        );
    }

    #[test]
    fn years_and_countries_are_sorted() {
        let db = sample_db();
        assert_eq!(db.query_years().unwrap(), vec![1962, 1967]);
        assert_eq!(db.query_countries().unwrap(), vec!["Brazil", "Chile"]);
        assert_eq!(db.query_value_count().unwrap(), 6);
    }

    #[test]
    fn wide_rows_have_one_row_per_country_year() {
        let db = sample_db();
        let rows = db.query_wide_rows().unwrap();
        let keys: Vec<(&str, i32)> = rows.iter().map(|r| (r.country.as_str(), r.year)).collect();
        assert_eq!(
            keys,
            vec![("Brazil", 1962), ("Brazil", 1967), ("Chile", 1962), ("Chile", 1967)]
        );
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());

        let chile_1962 = &rows[2];
        assert_eq!(chile_1962.values.len(), 2);
        assert_eq!(chile_1962.values["GDP growth (annual %)"], 4.7);
    }

    #[test]
    fn empty_database_pivots_to_nothing() {
        let db = Database::new().unwrap();
        assert!(db.query_wide_rows().unwrap().is_empty());
        assert!(db.query_indicator_names().unwrap().is_empty());
    }
}
