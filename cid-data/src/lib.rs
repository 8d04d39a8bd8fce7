//! Wide-form country indicators dataset.
//!
//! This crate turns the long-form rows stored in [`cid_db::Database`] into
//! the immutable [`Dataset`] every view reads from:
//!
//! 1. pivot to one [`Observation`] per (country, year),
//! 2. drop observations without a population density value,
//! 3. attach the continent of each country, falling back to
//!    [`continent::UNKNOWN`](cid_core::continent::UNKNOWN).

use anyhow::Context;
use cid_core::continent;
use cid_core::indicator::{self, POPULATION_DENSITY};
use cid_db::models::WideRow;
use cid_db::Database;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// One wide-form record: every indicator value of a country in a year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Observation {
    pub country: String,
    pub year: i32,
    /// Indicator long name -> value. Missing indicators are absent.
    pub values: BTreeMap<String, f64>,
    /// Derived from `country`; never edited.
    pub continent: String,
}

impl Observation {
    /// Value of an indicator by long name.
    pub fn value(&self, indicator: &str) -> Option<f64> {
        self.values.get(indicator).copied()
    }
}

/// The enriched wide-form table, read once and never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
    indicators: Vec<String>,
    years: Vec<i32>,
    continents: Vec<String>,
}

impl Dataset {
    /// Parse a long-form CSV into a fresh database and build the dataset.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Database::new()?;
        db.load_indicators(csv_data)
            .context("failed to load indicators CSV")?;
        Self::from_database(&db)
    }

    /// Pivot, filter and enrich the dataset stored in `db`.
    pub fn from_database(db: &Database) -> anyhow::Result<Self> {
        let indicators = db.query_indicator_names()?;
        let years = db.query_years()?;
        let rows = db.query_wide_rows()?;
        Self::from_wide_rows(rows, indicators, years)
    }

    /// Build from already pivoted rows.
    ///
    /// `indicators` lists every indicator column in source order and `years`
    /// every year present in the source (before filtering), which is what the
    /// year slider offers.
    pub fn from_wide_rows(
        rows: Vec<WideRow>,
        indicators: Vec<String>,
        mut years: Vec<i32>,
    ) -> anyhow::Result<Self> {
        if !indicators.iter().any(|name| name == POPULATION_DENSITY) {
            anyhow::bail!("dataset has no {:?} column", POPULATION_DENSITY);
        }
        years.sort_unstable();
        years.dedup();

        let total = rows.len();
        let mut cache: HashMap<String, &'static str> = HashMap::new();
        let mut continents: Vec<String> = Vec::new();
        let mut observations = Vec::with_capacity(total);

        for row in rows {
            if !row.values.contains_key(POPULATION_DENSITY) {
                continue;
            }
            let continent = *cache
                .entry(row.country.clone())
                .or_insert_with(|| continent::continent_or_unknown(&row.country));
            if !continents.iter().any(|c| c == continent) {
                continents.push(continent.to_string());
            }
            observations.push(Observation {
                country: row.country,
                year: row.year,
                values: row.values,
                continent: continent.to_string(),
            });
        }

        let unknown = cache
            .values()
            .filter(|c| **c == continent::UNKNOWN)
            .count();
        log::info!(
            "dataset: {} of {} rows kept, {} countries ({} without a continent)",
            observations.len(),
            total,
            cache.len(),
            unknown
        );

        Ok(Self {
            observations,
            indicators,
            years,
            continents,
        })
    }

    /// All observations, ordered by (country, year).
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Indicator long names in source order.
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// Indicator short names in source order.
    pub fn short_names(&self) -> Vec<&str> {
        self.indicators
            .iter()
            .map(|name| indicator::short_name(name))
            .collect()
    }

    /// Years present in the source, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Continents in order of first appearance. This order fixes the color of
    /// each continent across every figure.
    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    /// Long name of a column given either its long or its short name.
    pub fn resolve_column(&self, name: &str) -> Option<&str> {
        self.indicators
            .iter()
            .find(|long| long.as_str() == name || indicator::short_name(long) == name)
            .map(String::as_str)
    }

    /// Observations of one year, in country order.
    pub fn for_year(&self, year: i32) -> Vec<&Observation> {
        self.observations.iter().filter(|o| o.year == year).collect()
    }

    /// Observations of one country, in year order.
    pub fn for_country(&self, country: &str) -> Vec<&Observation> {
        self.observations
            .iter()
            .filter(|o| o.country == country)
            .collect()
    }

    /// Number of distinct countries per continent.
    pub fn countries_per_continent(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        let mut last_country: Option<&str> = None;
        for obs in &self.observations {
            if last_country != Some(obs.country.as_str()) {
                *counts.entry(obs.continent.as_str()).or_insert(0) += 1;
                last_country = Some(obs.country.as_str());
            }
        }
        counts
    }
}
