//! The crossfilter scatter plot of the first tab.

use crate::error::{Result, ViewError};
use crate::figure::{Axis, Figure, Layout, Legend, Margin, Marker, Series, Title, Trace, TraceKind};
use crate::group::{self, by_continent};
use cid_core::indicator::{AxisScale, FERTILITY_RATE, POPULATION_DENSITY};
use cid_data::Dataset;
use serde::{Deserialize, Serialize};

/// Widget values the crossfilter scatter depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossfilterInputs {
    pub xaxis_name: String,
    pub yaxis_name: String,
    pub xaxis_type: AxisScale,
    pub yaxis_type: AxisScale,
    pub year: i32,
}

impl CrossfilterInputs {
    /// Initial widget values: population density (log) against fertility
    /// rate (linear) in the given year.
    pub fn initial(year: i32) -> Self {
        Self {
            xaxis_name: POPULATION_DENSITY.to_string(),
            yaxis_name: FERTILITY_RATE.to_string(),
            xaxis_type: AxisScale::Log,
            yaxis_type: AxisScale::Linear,
            year,
        }
    }
}

/// Scatter of two indicators for one year, one trace per continent.
///
/// Each point carries its country in `customdata` so hovering it can drive
/// the time series.
pub fn crossfilter_scatter(dataset: &Dataset, inputs: &CrossfilterInputs) -> Result<Figure> {
    let x_name = dataset
        .resolve_column(&inputs.xaxis_name)
        .ok_or_else(|| ViewError::UnknownIndicator(inputs.xaxis_name.clone()))?;
    let y_name = dataset
        .resolve_column(&inputs.yaxis_name)
        .ok_or_else(|| ViewError::UnknownIndicator(inputs.yaxis_name.clone()))?;

    let rows = dataset.for_year(inputs.year);
    let data = by_continent(dataset, &rows, false)
        .into_iter()
        .map(|g| {
            let countries = group::countries(&g.rows);
            Trace {
                kind: TraceKind::Scatter,
                name: Some(g.continent.to_string()),
                legendgroup: Some(g.continent.to_string()),
                showlegend: Some(true),
                mode: Some("markers".to_string()),
                x: Some(Series::Numbers(group::values(&g.rows, x_name))),
                y: Some(Series::Numbers(group::values(&g.rows, y_name))),
                customdata: Some(countries.iter().map(|c| vec![c.clone()]).collect()),
                hovertext: Some(countries),
                hovertemplate: Some(group::hover_template(&[
                    ("Continent", g.continent),
                    (x_name, "%{x}"),
                    (y_name, "%{y}"),
                ])),
                marker: Some(Marker {
                    color: Some(g.color),
                    symbol: Some("circle".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }
        })
        .collect();

    let layout = Layout {
        xaxis: Some(Axis {
            kind: Some(inputs.xaxis_type.plotly_type().to_string()),
            ..Axis::titled(x_name)
        }),
        yaxis: Some(Axis {
            kind: Some(inputs.yaxis_type.plotly_type().to_string()),
            ..Axis::titled(y_name)
        }),
        margin: Some(Margin {
            l: 40,
            b: 40,
            t: 10,
            r: 0,
        }),
        hovermode: Some("closest".to_string()),
        legend: Some(Legend {
            title: Title::new("Continent"),
        }),
        ..Default::default()
    };

    Ok(Figure {
        data,
        layout,
        frames: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::palette_color;
    use crate::fixtures::sample;
    use cid_core::indicator::{CO2_EMISSIONS, GDP_GROWTH};

    #[test]
    fn one_trace_per_continent_in_the_year() {
        let ds = sample();
        let fig = crossfilter_scatter(&ds, &CrossfilterInputs::initial(2002)).unwrap();
        let names: Vec<&str> = fig.data.iter().filter_map(|t| t.name.as_deref()).collect();
        // World only reports in 2007.
        assert_eq!(names, vec!["South America", "Africa", "North America"]);
    }

    #[test]
    fn points_carry_country_customdata() {
        let ds = sample();
        let fig = crossfilter_scatter(&ds, &CrossfilterInputs::initial(2007)).unwrap();
        let na = fig
            .data
            .iter()
            .find(|t| t.name.as_deref() == Some("North America"))
            .unwrap();
        assert_eq!(na.customdata, Some(vec![vec!["United States".to_string()]]));
        assert_eq!(na.hovertext, Some(vec!["United States".to_string()]));
        assert_eq!(na.x, Some(Series::Numbers(vec![Some(32.9)])));
    }

    #[test]
    fn missing_values_become_gaps() {
        let ds = sample();
        let fig = crossfilter_scatter(&ds, &CrossfilterInputs::initial(2007)).unwrap();
        let africa = fig
            .data
            .iter()
            .find(|t| t.name.as_deref() == Some("Africa"))
            .unwrap();
        // Kenya has no 2007 fertility rate.
        assert_eq!(africa.y, Some(Series::Numbers(vec![None])));
    }

    #[test]
    fn axes_follow_widgets() {
        let ds = sample();
        let inputs = CrossfilterInputs {
            xaxis_name: CO2_EMISSIONS.to_string(),
            yaxis_name: GDP_GROWTH.to_string(),
            xaxis_type: AxisScale::Linear,
            yaxis_type: AxisScale::Log,
            year: 2007,
        };
        let fig = crossfilter_scatter(&ds, &inputs).unwrap();
        let xaxis = fig.layout.xaxis.unwrap();
        let yaxis = fig.layout.yaxis.unwrap();
        assert_eq!(xaxis.kind.as_deref(), Some("linear"));
        assert_eq!(xaxis.title.unwrap().text, CO2_EMISSIONS);
        assert_eq!(yaxis.kind.as_deref(), Some("log"));
        assert_eq!(fig.layout.hovermode.as_deref(), Some("closest"));
        assert_eq!(fig.layout.margin, Some(Margin { l: 40, b: 40, t: 10, r: 0 }));
    }

    #[test]
    fn unknown_indicator_is_an_error() {
        let ds = sample();
        let mut inputs = CrossfilterInputs::initial(2007);
        inputs.yaxis_name = "Happiness".to_string();
        assert_eq!(
            crossfilter_scatter(&ds, &inputs),
            Err(ViewError::UnknownIndicator("Happiness".to_string()))
        );
    }

    #[test]
    fn same_inputs_give_same_figure() {
        let ds = sample();
        let inputs = CrossfilterInputs::initial(2007);
        let a = crossfilter_scatter(&ds, &inputs).unwrap();
        let b = crossfilter_scatter(&ds, &inputs).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn continent_colors_are_stable_across_years() {
        let csv = "\
Country Name,Indicator Name,Year,Value
Chile,Population density (people per sq. km of land area),2007,22.3
Chile,\"Fertility rate, total (births per woman)\",2007,1.9
Kenya,Population density (people per sq. km of land area),2002,56.0
Kenya,\"Fertility rate, total (births per woman)\",2002,5.0
Kenya,Population density (people per sq. km of land area),2007,65.0
Kenya,\"Fertility rate, total (births per woman)\",2007,4.9
";
        let ds = Dataset::from_csv(csv).unwrap();
        let africa_color = |year| {
            crossfilter_scatter(&ds, &CrossfilterInputs::initial(year))
                .unwrap()
                .data
                .into_iter()
                .find(|t| t.name.as_deref() == Some("Africa"))
                .and_then(|t| t.marker)
                .and_then(|m| m.color)
                .unwrap()
        };
        // Africa is the second continent of the dataset, even in 2002 when
        // it is the only one plotted.
        assert_eq!(africa_color(2002), palette_color(1));
        assert_eq!(africa_color(2007), palette_color(1));
    }

    #[test]
    fn year_without_data_gives_empty_figure() {
        let ds = sample();
        let fig = crossfilter_scatter(&ds, &CrossfilterInputs::initial(1962)).unwrap();
        assert!(fig.data.is_empty());
        assert!(fig.layout.xaxis.is_some());
    }
}
