//! Indicator catalog and axis scale types.
//!
//! The source dataset names indicators with long World Bank labels
//! ("Fertility rate, total (births per woman)"). The scatter-matrix and
//! animation views use shorter display names; this module maps between them.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const AGRICULTURE: &str = "Agriculture, value added (% of GDP)";
pub const CO2_EMISSIONS: &str = "CO2 emissions (metric tons per capita)";
pub const DOMESTIC_CREDIT: &str = "Domestic credit provided by financial sector (% of GDP)";
pub const ELECTRIC_CONSUMPTION: &str = "Electric power consumption (kWh per capita)";
pub const ENERGY_USE: &str = "Energy use (kg of oil equivalent per capita)";
pub const EXPORTS: &str = "Exports of goods and services (% of GDP)";
pub const FERTILITY_RATE: &str = "Fertility rate, total (births per woman)";
pub const GDP_GROWTH: &str = "GDP growth (annual %)";
pub const IMPORTS: &str = "Imports of goods and services (% of GDP)";
pub const INDUSTRY: &str = "Industry, value added (% of GDP)";
pub const INFLATION: &str = "Inflation, GDP deflator (annual %)";
pub const LIFE_EXPECTANCY: &str = "Life expectancy at birth, total (years)";
pub const POPULATION_DENSITY: &str = "Population density (people per sq. km of land area)";
pub const SERVICES: &str = "Services, etc., value added (% of GDP)";

/// Known indicators as (long name, short name), in source column order.
pub const CATALOG: [(&str, &str); 14] = [
    (AGRICULTURE, "Agriculture, value added"),
    (CO2_EMISSIONS, "CO2 emissions"),
    (DOMESTIC_CREDIT, "Domestic credit"),
    (ELECTRIC_CONSUMPTION, "Electric consumption"),
    (ENERGY_USE, "Energy use"),
    (EXPORTS, "Exports"),
    (FERTILITY_RATE, "Fertility rate"),
    (GDP_GROWTH, "GDP growth"),
    (IMPORTS, "Imports"),
    (INDUSTRY, "Industry, value added"),
    (INFLATION, "Inflation"),
    (LIFE_EXPECTANCY, "Life expectancy"),
    (POPULATION_DENSITY, "Population density"),
    (SERVICES, "Services, value added"),
];

/// Short display name for a long indicator name. Unknown names map to themselves.
pub fn short_name(long_name: &str) -> &str {
    CATALOG
        .iter()
        .find(|(long, _)| *long == long_name)
        .map(|(_, short)| *short)
        .unwrap_or(long_name)
}

/// Long source name for a short display name, if it is in the catalog.
pub fn long_name(short: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(_, s)| *s == short)
        .map(|(long, _)| *long)
}

/// Axis scale selected by the Linear/Log radio items.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl AxisScale {
    pub const ALL: [AxisScale; 2] = [AxisScale::Linear, AxisScale::Log];

    /// Radio item label.
    pub fn label(&self) -> &'static str {
        match self {
            AxisScale::Linear => "Linear",
            AxisScale::Log => "Log",
        }
    }

    /// Plotly axis `type` value.
    pub fn plotly_type(&self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AxisScale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linear" | "linear" => Ok(AxisScale::Linear),
            "Log" | "log" => Ok(AxisScale::Log),
            other => Err(CatalogError::UnknownAxisType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_names_round_trip_through_catalog() {
        for (long, short) in CATALOG {
            assert_eq!(short_name(long), short);
            assert_eq!(long_name(short), Some(long));
        }
    }

    #[test]
    fn unknown_indicator_keeps_its_name() {
        assert_eq!(short_name("Forest area (sq. km)"), "Forest area (sq. km)");
        assert_eq!(long_name("Forest area"), None);
    }

    #[test]
    fn axis_scale_parses_radio_labels() {
        assert_eq!("Log".parse::<AxisScale>(), Ok(AxisScale::Log));
        assert_eq!("Linear".parse::<AxisScale>(), Ok(AxisScale::Linear));
        assert!("Cubic".parse::<AxisScale>().is_err());
        assert_eq!(AxisScale::Log.plotly_type(), "log");
        assert_eq!(AxisScale::Linear.to_string(), "Linear");
    }
}
