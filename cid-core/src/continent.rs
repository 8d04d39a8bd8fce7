//! Country name to continent lookup.
//!
//! The lookup runs in three steps against a country table embedded at
//! compile time: country name -> ISO alpha-2 code -> continent code ->
//! continent name. Any step can fail; [`continent_or_unknown`] folds every
//! failure into the [`UNKNOWN`] sentinel so that enrichment of a dataset
//! never stops on a single bad name.

use crate::error::ContinentError;
use csv::ReaderBuilder;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded country table: `ALPHA2,NAME,CONTINENT` (continent code may be empty).
pub static CSV_OBJECT: &str = include_str!("../../fixtures/countries.csv");

/// Label used when a country cannot be placed on a continent.
pub const UNKNOWN: &str = "Unknown";

/// The seven continent codes and their display names.
pub const CONTINENTS: [(&str, &str); 7] = [
    ("AF", "Africa"),
    ("AN", "Antarctica"),
    ("AS", "Asia"),
    ("EU", "Europe"),
    ("NA", "North America"),
    ("OC", "Oceania"),
    ("SA", "South America"),
];

/// Parsed country table.
#[derive(Debug, Default)]
pub struct CountryTable {
    name_to_alpha2: HashMap<String, String>,
    alpha2_to_continent: HashMap<String, String>,
}

impl CountryTable {
    /// Parse a country table from CSV with headers `ALPHA2,NAME,CONTINENT`.
    ///
    /// Several names may share an alpha-2 code (aliases). Rows missing a code
    /// or a name are skipped.
    pub fn parse(csv_object: &str) -> Result<Self, csv::Error> {
        let mut table = CountryTable::default();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let alpha2 = record.get(0).unwrap_or("").trim();
            let name = record.get(1).unwrap_or("").trim();
            let continent = record.get(2).unwrap_or("").trim();
            if alpha2.is_empty() || name.is_empty() {
                continue;
            }
            table
                .name_to_alpha2
                .insert(name.to_string(), alpha2.to_string());
            if !continent.is_empty() {
                table
                    .alpha2_to_continent
                    .insert(alpha2.to_string(), continent.to_string());
            }
        }
        Ok(table)
    }

    /// Step one: exact country name to alpha-2 code.
    pub fn country_name_to_alpha2(&self, name: &str) -> Result<&str, ContinentError> {
        self.name_to_alpha2
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ContinentError::UnknownCountry(name.to_string()))
    }

    /// Step two: alpha-2 code to continent code.
    pub fn alpha2_to_continent_code(&self, alpha2: &str) -> Result<&str, ContinentError> {
        self.alpha2_to_continent
            .get(alpha2)
            .map(String::as_str)
            .ok_or_else(|| ContinentError::NoContinent(alpha2.to_string()))
    }

    /// Full lookup of a country name to a continent name.
    pub fn lookup(&self, name: &str) -> Result<&'static str, ContinentError> {
        let alpha2 = self.country_name_to_alpha2(name)?;
        let code = self.alpha2_to_continent_code(alpha2)?;
        continent_code_to_name(code)
    }

    pub fn len(&self) -> usize {
        self.name_to_alpha2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_alpha2.is_empty()
    }
}

/// Step three: continent code to continent name.
pub fn continent_code_to_name(code: &str) -> Result<&'static str, ContinentError> {
    CONTINENTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .ok_or_else(|| ContinentError::UnknownContinentCode(code.to_string()))
}

/// The embedded country table, parsed on first use.
pub fn country_table() -> &'static CountryTable {
    static TABLE: OnceLock<CountryTable> = OnceLock::new();
    TABLE.get_or_init(|| match CountryTable::parse(CSV_OBJECT) {
        Ok(table) => table,
        Err(e) => {
            log::error!("embedded country table is unreadable: {}", e);
            CountryTable::default()
        }
    })
}

/// Look up the continent of a country in the embedded table.
pub fn lookup(name: &str) -> Result<&'static str, ContinentError> {
    country_table().lookup(name)
}

/// Continent of a country, or [`UNKNOWN`] if any lookup step fails.
pub fn continent_or_unknown(name: &str) -> &'static str {
    match lookup(name) {
        Ok(continent) => continent,
        Err(e) => {
            debug!("continent lookup failed: {}", e);
            UNKNOWN
        }
    }
}
