//! The two hover-driven time series next to the crossfilter scatter.

use crate::error::{Result, ViewError};
use crate::figure::{Annotation, Axis, Figure, Layout, Margin, Series, Trace, TraceKind};
use crate::hover::HoverData;
use cid_core::indicator::AxisScale;
use cid_data::Dataset;

/// Values of `indicator` for `country` over every year, as lines and markers.
///
/// `title` is placed as a paper-anchored annotation in the top-left corner.
pub fn create_time_series(
    dataset: &Dataset,
    country: &str,
    indicator: &str,
    axis_type: AxisScale,
    title: &str,
) -> Result<Figure> {
    let indicator = dataset
        .resolve_column(indicator)
        .ok_or_else(|| ViewError::UnknownIndicator(indicator.to_string()))?;
    let rows = dataset.for_country(country);

    let trace = Trace {
        kind: TraceKind::Scatter,
        mode: Some("lines+markers".to_string()),
        showlegend: Some(false),
        x: Some(Series::Numbers(
            rows.iter().map(|o| Some(f64::from(o.year))).collect(),
        )),
        y: Some(Series::Numbers(rows.iter().map(|o| o.value(indicator)).collect())),
        hovertemplate: Some(format!("Year=%{{x}}<br>{}=%{{y}}<extra></extra>", indicator)),
        ..Default::default()
    };

    let layout = Layout {
        xaxis: Some(Axis {
            showgrid: Some(false),
            ..Axis::titled("Year")
        }),
        yaxis: Some(Axis {
            kind: Some(axis_type.plotly_type().to_string()),
            ..Axis::titled("Value")
        }),
        annotations: vec![Annotation {
            x: 0.0,
            y: 0.85,
            xanchor: "left".to_string(),
            yanchor: "bottom".to_string(),
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            showarrow: false,
            align: "left".to_string(),
            text: title.to_string(),
        }],
        height: Some(225),
        margin: Some(Margin {
            l: 20,
            b: 30,
            r: 10,
            t: 10,
        }),
        ..Default::default()
    };

    Ok(Figure {
        data: vec![trace],
        layout,
        frames: Vec::new(),
    })
}

/// Time series of the x-axis indicator for the hovered country, titled with
/// the country in bold above the indicator name.
pub fn x_time_series(
    dataset: &Dataset,
    hover: &HoverData,
    xaxis_name: &str,
    axis_type: AxisScale,
) -> Result<Figure> {
    let country = hover.country()?;
    let title = format!("<b>{}</b><br>{}", country, xaxis_name);
    create_time_series(dataset, country, xaxis_name, axis_type, &title)
}

/// Time series of the y-axis indicator for the hovered country, titled with
/// the indicator name.
pub fn y_time_series(
    dataset: &Dataset,
    hover: &HoverData,
    yaxis_name: &str,
    axis_type: AxisScale,
) -> Result<Figure> {
    let country = hover.country()?;
    create_time_series(dataset, country, yaxis_name, axis_type, yaxis_name)
}
