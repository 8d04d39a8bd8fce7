//! Counts describing a dataset snapshot.

use anyhow::Context;
use cid_data::Dataset;
use cid_db::Database;
use std::fmt;

/// What a snapshot contains before and after the pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub values_loaded: usize,
    pub rows_skipped: usize,
    pub indicators: usize,
    pub countries: usize,
    pub years: Vec<i32>,
    /// Rows kept after dropping those without a population density
    pub observations: usize,
    /// (continent, countries, observations), in first-appearance order
    pub continents: Vec<(String, usize, usize)>,
}

impl Summary {
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Database::new()?;
        let load = db.load_indicators(csv_data)?;
        let values_loaded = db.query_value_count()?;
        let indicators = db.query_indicator_names()?.len();
        let countries = db.query_countries()?.len();
        let years = db.query_years()?;
        let dataset = Dataset::from_database(&db)?;

        let per_continent = dataset.countries_per_continent();
        let continents = dataset
            .continents()
            .iter()
            .map(|c| {
                let rows = dataset
                    .observations()
                    .iter()
                    .filter(|o| o.continent == *c)
                    .count();
                let countries = per_continent.get(c.as_str()).copied().unwrap_or(0);
                (c.clone(), countries, rows)
            })
            .collect();

        Ok(Self {
            values_loaded,
            rows_skipped: load.skipped,
            indicators,
            countries,
            years,
            observations: dataset.len(),
            continents,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "values: {} loaded, {} skipped",
            self.values_loaded, self.rows_skipped
        )?;
        writeln!(f, "indicators: {}", self.indicators)?;
        writeln!(f, "countries: {}", self.countries)?;
        match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) => {
                writeln!(f, "years: {} ({}-{})", self.years.len(), first, last)?
            }
            _ => writeln!(f, "years: 0")?,
        }
        writeln!(f, "observations: {}", self.observations)?;
        for (continent, countries, rows) in &self.continents {
            writeln!(
                f,
                "  {:<15} {:>4} countries {:>6} observations",
                continent, countries, rows
            )?;
        }
        Ok(())
    }
}

pub fn run_summary(input: &str) -> anyhow::Result<()> {
    let csv_data =
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?;
    let summary = Summary::from_csv(&csv_data)?;
    print!("{}", summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Country Name,Indicator Name,Year,Value
Chile,Population density (people per sq. km of land area),2002,21.5
Chile,\"Life expectancy at birth, total (years)\",2002,77.3
Chile,Population density (people per sq. km of land area),2007,22.4
Kenya,Population density (people per sq. km of land area),2007,65.0
Atlantis,Population density (people per sq. km of land area),2007,1.0
Peru,\"Life expectancy at birth, total (years)\",2007,73.1
Peru,\"Life expectancy at birth, total (years)\",abc,73.1
";

    #[test]
    fn summary_counts_source_and_pivot() {
        let summary = Summary::from_csv(CSV).unwrap();
        assert_eq!(summary.values_loaded, 6);
        assert_eq!(summary.rows_skipped, 1);
        assert_eq!(summary.indicators, 2);
        assert_eq!(summary.countries, 4);
        assert_eq!(summary.years, vec![2002, 2007]);
        // Peru has no population density and is dropped.
        assert_eq!(summary.observations, 4);
        assert_eq!(
            summary.continents,
            vec![
                ("Unknown".to_string(), 1, 1),
                ("South America".to_string(), 1, 2),
                ("Africa".to_string(), 1, 1),
            ]
        );
    }

    #[test]
    fn summary_display_lists_continents() {
        let text = Summary::from_csv(CSV).unwrap().to_string();
        assert!(text.contains("years: 2 (2002-2007)"));
        assert!(text.contains("South America"));
    }
}
