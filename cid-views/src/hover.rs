//! Hover payload sent by the crossfilter scatter plot.

use crate::error::{Result, ViewError};
use serde::{Deserialize, Serialize};

/// Country hovered before the user touches the scatter plot.
pub const DEFAULT_HOVER_COUNTRY: &str = "United States";

/// The subset of Plotly's `plotly_hover` event the time series read:
/// `{"points": [{"customdata": ["<country>"]}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverData {
    #[serde(default)]
    pub points: Vec<HoverPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    #[serde(default)]
    pub customdata: Vec<String>,
}

impl HoverData {
    /// A payload pointing at one country.
    pub fn for_country(country: impl Into<String>) -> Self {
        Self {
            points: vec![HoverPoint {
                customdata: vec![country.into()],
            }],
        }
    }

    /// Country of the first hovered point.
    pub fn country(&self) -> Result<&str> {
        self.points
            .first()
            .and_then(|p| p.customdata.first())
            .map(String::as_str)
            .ok_or(ViewError::EmptyHover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_country_from_plotly_payload() {
        let hover: HoverData =
            serde_json::from_str(r#"{"points":[{"customdata":["Chile"]},{"customdata":["Peru"]}]}"#)
                .unwrap();
        assert_eq!(hover.country(), Ok("Chile"));
    }

    #[test]
    fn empty_payloads_are_errors() {
        let no_points: HoverData = serde_json::from_str("{}").unwrap();
        assert_eq!(no_points.country(), Err(ViewError::EmptyHover));
        let no_customdata: HoverData = serde_json::from_str(r#"{"points":[{}]}"#).unwrap();
        assert_eq!(no_customdata.country(), Err(ViewError::EmptyHover));
    }

    #[test]
    fn default_hover_is_a_single_country() {
        let hover = HoverData::for_country(DEFAULT_HOVER_COUNTRY);
        assert_eq!(hover.country(), Ok("United States"));
    }
}
