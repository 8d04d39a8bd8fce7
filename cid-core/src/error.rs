/// Error types for the core lookups
use thiserror::Error;

/// Why a country could not be placed on a continent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContinentError {
    /// The name is not in the country table
    #[error("No country named {0:?}")]
    UnknownCountry(String),

    /// The country exists but has no continent assigned
    #[error("Country {0} has no continent code")]
    NoContinent(String),

    /// The continent code is not one of the seven known codes
    #[error("Invalid continent code: {0}")]
    UnknownContinentCode(String),
}

/// Errors raised by the indicator catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Axis scale label other than "Linear" or "Log"
    #[error("Unknown axis type: {0}")]
    UnknownAxisType(String),
}
