//! Export of dashboard figures as Plotly JSON.

use anyhow::Context;
use cid_core::indicator::{AxisScale, FERTILITY_RATE, POPULATION_DENSITY};
use cid_data::Dataset;
use cid_views::animations::{animated_box, animated_scatter, scatter_3d};
use cid_views::crossfilter::{crossfilter_scatter, CrossfilterInputs};
use cid_views::hover::{HoverData, DEFAULT_HOVER_COUNTRY};
use cid_views::scatter_matrix::{scatter_matrix, DEFAULT_DIMENSIONS};
use cid_views::time_series::{x_time_series, y_time_series};
use cid_views::Figure;
use clap::{Args, ValueEnum};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FigureKind {
    Crossfilter,
    XSeries,
    YSeries,
    Matrix,
    AnimatedScatter,
    #[value(name = "scatter-3d")]
    Scatter3d,
    AnimatedBox,
}

/// Widget values, with the dashboard's initial values as defaults.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct FigureOptions {
    /// X-axis indicator (long or short name)
    #[arg(long, default_value = POPULATION_DENSITY)]
    pub xaxis: String,

    /// Y-axis indicator (long or short name)
    #[arg(long, default_value = FERTILITY_RATE)]
    pub yaxis: String,

    /// X-axis scale: Linear or Log
    #[arg(long, default_value = "Log")]
    pub xaxis_type: AxisScale,

    /// Y-axis scale: Linear or Log
    #[arg(long, default_value = "Linear")]
    pub yaxis_type: AxisScale,

    /// Year of the crossfilter scatter (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Hovered country driving the time series
    #[arg(long, default_value = DEFAULT_HOVER_COUNTRY)]
    pub country: String,

    /// Scatter-matrix dimensions (short names, comma separated)
    #[arg(long, value_delimiter = ',')]
    pub dimensions: Option<Vec<String>>,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            xaxis: POPULATION_DENSITY.to_string(),
            yaxis: FERTILITY_RATE.to_string(),
            xaxis_type: AxisScale::Log,
            yaxis_type: AxisScale::Linear,
            year: None,
            country: DEFAULT_HOVER_COUNTRY.to_string(),
            dimensions: None,
        }
    }
}

/// Build the figure of `kind` exactly as the dashboard would show it.
pub fn build_figure(
    dataset: &Dataset,
    kind: FigureKind,
    options: &FigureOptions,
) -> anyhow::Result<Figure> {
    let hover = HoverData::for_country(options.country.as_str());
    let figure = match kind {
        FigureKind::Crossfilter => {
            let year = match options.year {
                Some(year) => year,
                None => dataset.latest_year().context("dataset has no years")?,
            };
            let inputs = CrossfilterInputs {
                xaxis_name: options.xaxis.clone(),
                yaxis_name: options.yaxis.clone(),
                xaxis_type: options.xaxis_type,
                yaxis_type: options.yaxis_type,
                year,
            };
            crossfilter_scatter(dataset, &inputs)?
        }
        FigureKind::XSeries => x_time_series(dataset, &hover, &options.xaxis, options.xaxis_type)?,
        FigureKind::YSeries => y_time_series(dataset, &hover, &options.yaxis, options.yaxis_type)?,
        FigureKind::Matrix => {
            let dimensions = options.dimensions.clone().unwrap_or_else(|| {
                DEFAULT_DIMENSIONS.iter().map(|d| d.to_string()).collect()
            });
            scatter_matrix(dataset, &dimensions)?
        }
        FigureKind::AnimatedScatter => animated_scatter(dataset)?,
        FigureKind::Scatter3d => scatter_3d(dataset)?,
        FigureKind::AnimatedBox => animated_box(dataset)?,
    };
    Ok(figure)
}

pub fn run_export(
    input: &str,
    output: &str,
    kind: FigureKind,
    options: &FigureOptions,
) -> anyhow::Result<()> {
    let csv_data =
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?;
    let dataset = Dataset::from_csv(&csv_data)?;
    let json = build_figure(&dataset, kind, options)?.to_json_pretty()?;

    if output == "-" {
        println!("{}", json);
    } else {
        std::fs::write(output, &json).with_context(|| format!("failed to write {}", output))?;
        info!("{:?} figure written to {}", kind, output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cid_views::figure::TraceKind;

    const CSV: &str = "\
Country Name,Indicator Name,Year,Value
Chile,Population density (people per sq. km of land area),2002,21.5
Chile,\"Fertility rate, total (births per woman)\",2002,2.0
Chile,\"Life expectancy at birth, total (years)\",2002,77.3
Chile,CO2 emissions (metric tons per capita),2002,3.6
Chile,GDP growth (annual %),2002,2.2
Chile,Population density (people per sq. km of land area),2007,22.4
Chile,\"Fertility rate, total (births per woman)\",2007,1.9
Chile,\"Life expectancy at birth, total (years)\",2007,78.4
Chile,CO2 emissions (metric tons per capita),2007,4.1
Chile,GDP growth (annual %),2007,5.2
United States,Population density (people per sq. km of land area),2007,32.9
United States,\"Fertility rate, total (births per woman)\",2007,2.1
United States,\"Life expectancy at birth, total (years)\",2007,78.0
United States,CO2 emissions (metric tons per capita),2007,19.2
United States,GDP growth (annual %),2007,1.8
";

    fn dataset() -> Dataset {
        Dataset::from_csv(CSV).unwrap()
    }

    #[test]
    fn crossfilter_defaults_to_latest_year() {
        let ds = dataset();
        let fig = build_figure(&ds, FigureKind::Crossfilter, &FigureOptions::default()).unwrap();
        let latest = build_figure(
            &ds,
            FigureKind::Crossfilter,
            &FigureOptions {
                year: Some(2007),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(fig, latest);
        assert_eq!(fig.data.len(), 2, "one trace per continent");
    }

    #[test]
    fn series_follow_the_country_option() {
        let ds = dataset();
        let options = FigureOptions {
            country: "Chile".to_string(),
            ..Default::default()
        };
        let fig = build_figure(&ds, FigureKind::YSeries, &options).unwrap();
        assert_eq!(fig.data.len(), 1);
        assert_eq!(fig.layout.annotations[0].text, FERTILITY_RATE);
    }

    #[test]
    fn matrix_uses_default_dimensions() {
        let ds = dataset();
        let fig = build_figure(&ds, FigureKind::Matrix, &FigureOptions::default()).unwrap();
        assert!(fig.data.iter().all(|t| t.kind == TraceKind::Splom));
        let dims = fig.data[0].dimensions.as_ref().unwrap();
        let labels: Vec<&str> = dims.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, DEFAULT_DIMENSIONS);
    }

    #[test]
    fn animations_export_frames() {
        let ds = dataset();
        for kind in [
            FigureKind::AnimatedScatter,
            FigureKind::Scatter3d,
            FigureKind::AnimatedBox,
        ] {
            let fig = build_figure(&ds, kind, &FigureOptions::default()).unwrap();
            assert_eq!(fig.frames.len(), 2, "{:?}", kind);
        }
    }

    #[test]
    fn unknown_indicator_is_an_error() {
        let ds = dataset();
        let options = FigureOptions {
            xaxis: "Rainfall".to_string(),
            ..Default::default()
        };
        assert!(build_figure(&ds, FigureKind::Crossfilter, &options).is_err());
    }
}
