//! The scatter matrix of the second tab.

use crate::error::{Result, ViewError};
use crate::figure::{
    Diagonal, Dimension, Figure, Layout, Legend, Marker, Title, Trace, TraceKind,
};
use crate::group::{self, by_continent};
use cid_data::Dataset;

pub const TITLE: &str = "Scatter Matrix Plot of Multiple Variables";

/// Dimensions selected before the user touches the dropdown.
pub const DEFAULT_DIMENSIONS: [&str; 2] = ["Life expectancy", "Fertility rate"];

/// Scatter matrix over the chosen dimensions (short or long names), one
/// trace per continent, diagonal hidden.
///
/// An empty selection yields a figure with the title and no traces.
pub fn scatter_matrix(dataset: &Dataset, dimensions: &[String]) -> Result<Figure> {
    let columns = dimensions
        .iter()
        .map(|label| {
            dataset
                .resolve_column(label)
                .map(|long| (label.as_str(), long))
                .ok_or_else(|| ViewError::UnknownIndicator(label.clone()))
        })
        .collect::<Result<Vec<(&str, &str)>>>()?;

    let data = if columns.is_empty() {
        Vec::new()
    } else {
        let rows: Vec<_> = dataset.observations().iter().collect();
        by_continent(dataset, &rows, false)
            .into_iter()
            .map(|g| {
                let dims = columns
                    .iter()
                    .map(|(label, long)| Dimension {
                        label: label.to_string(),
                        values: group::values(&g.rows, long),
                    })
                    .collect();
                Trace {
                    kind: TraceKind::Splom,
                    name: Some(g.continent.to_string()),
                    legendgroup: Some(g.continent.to_string()),
                    showlegend: Some(true),
                    hovertext: Some(group::countries(&g.rows)),
                    hovertemplate: Some(group::hover_template(&[("Continent", g.continent)])),
                    marker: Some(Marker {
                        color: Some(g.color),
                        symbol: Some("circle".to_string()),
                        ..Default::default()
                    }),
                    dimensions: Some(dims),
                    diagonal: Some(Diagonal { visible: false }),
                    ..Default::default()
                }
            })
            .collect()
    };

    let layout = Layout {
        title: Some(Title {
            text: TITLE.to_string(),
            x: Some(0.5),
            xanchor: Some("center".to_string()),
            yanchor: Some("top".to_string()),
        }),
        width: Some(1500),
        height: Some(640),
        dragmode: Some("select".to_string()),
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
