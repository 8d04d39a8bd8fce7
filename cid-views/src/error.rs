use thiserror::Error;

/// Why a view could not be computed from the current widget values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The name matches no indicator column of the dataset
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    /// The hover payload carries no point with a country in its customdata
    #[error("Hover payload has no point with a country")]
    EmptyHover,
}

pub type Result<T> = std::result::Result<T, ViewError>;
