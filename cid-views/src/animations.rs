//! The three animated figures of the third tab.
//!
//! They do not depend on any widget, so the dashboard builds them once after
//! the dataset loads. Every figure has one frame per year, play/pause
//! buttons and a year slider. Each frame holds a trace for every continent
//! (empty when the continent has no rows that year) so Plotly can match
//! traces between frames, and axis ranges are fixed over all years.

use crate::error::{Result, ViewError};
use crate::figure::{
    padded_range, Axis, Figure, Frame, Layout, Legend, Marker, Scene, Series, Title, Trace,
    TraceKind, Transition,
};
use crate::group::{self, by_continent, ContinentGroup};
use cid_core::indicator::{
    self, CO2_EMISSIONS, FERTILITY_RATE, GDP_GROWTH, LIFE_EXPECTANCY, POPULATION_DENSITY,
};
use cid_data::{Dataset, Observation};
use serde_json::{json, Value};

/// Largest bubble diameter of the animated scatter, in pixels.
pub const SIZE_MAX: f64 = 55.0;

/// Fixed y range of the box plot.
pub const BOX_RANGE_Y: [f64; 2] = [0.0, 30.0];

/// Frame duration of the play button, in milliseconds.
const FRAME_DURATION_MS: u32 = 500;

fn column<'a>(dataset: &'a Dataset, name: &str) -> Result<&'a str> {
    dataset
        .resolve_column(name)
        .ok_or_else(|| ViewError::UnknownIndicator(name.to_string()))
}

/// Years that have at least one observation, ascending.
fn frame_years(dataset: &Dataset) -> Vec<i32> {
    let mut years: Vec<i32> = dataset.observations().iter().map(|o| o.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Build one frame per year from `make_trace`, applied to every continent group.
fn build_frames<F>(dataset: &Dataset, years: &[i32], mut make_trace: F) -> Vec<Frame>
where
    F: FnMut(ContinentGroup<'_>) -> Trace,
{
    years
        .iter()
        .map(|year| {
            let rows = dataset.for_year(*year);
            Frame {
                name: year.to_string(),
                data: by_continent(dataset, &rows, true)
                    .into_iter()
                    .map(&mut make_trace)
                    .collect(),
            }
        })
        .collect()
}

fn animate_args(frame_ms: u32, transition_ms: u32, redraw: bool) -> Value {
    json!({
        "frame": { "duration": frame_ms, "redraw": redraw },
        "mode": "immediate",
        "fromcurrent": true,
        "transition": { "duration": transition_ms, "easing": "linear" },
    })
}

/// Play/pause buttons and the year slider.
fn animation_controls(years: &[i32], transition_ms: u32, redraw: bool) -> (Vec<Value>, Vec<Value>) {
    let menus = vec![json!({
        "type": "buttons",
        "direction": "left",
        "showactive": false,
        "x": 0.1,
        "xanchor": "right",
        "y": 0,
        "yanchor": "top",
        "pad": { "r": 10, "t": 70 },
        "buttons": [
            {
                "label": "&#9654;",
                "method": "animate",
                "args": [Value::Null, animate_args(FRAME_DURATION_MS, transition_ms, redraw)],
            },
            {
                "label": "&#9724;",
                "method": "animate",
                "args": [[Value::Null], animate_args(0, 0, redraw)],
            },
        ],
    })];

    let steps: Vec<Value> = years
        .iter()
        .map(|year| {
            json!({
                "label": year.to_string(),
                "method": "animate",
                "args": [[year.to_string()], animate_args(0, 0, redraw)],
            })
        })
        .collect();
    let sliders = vec![json!({
        "active": 0,
        "currentvalue": { "prefix": "Year=" },
        "len": 0.9,
        "x": 0.1,
        "xanchor": "left",
        "y": 0,
        "yanchor": "top",
        "pad": { "b": 10, "t": 60 },
        "steps": steps,
    })];

    (menus, sliders)
}

fn all_values<'a>(rows: &'a [Observation], indicator: &'a str) -> impl Iterator<Item = f64> + 'a {
    rows.iter().filter_map(move |o| o.value(indicator))
}

fn first_frame_data(frames: &[Frame]) -> Vec<Trace> {
    frames.first().map(|f| f.data.clone()).unwrap_or_default()
}

/// Bubble chart of CO2 emissions against GDP growth, sized by population
/// density, animated over years.
pub fn animated_scatter(dataset: &Dataset) -> Result<Figure> {
    let x_name = column(dataset, CO2_EMISSIONS)?;
    let y_name = column(dataset, GDP_GROWTH)?;
    let size_name = column(dataset, POPULATION_DENSITY)?;

    let observations = dataset.observations();
    let max_size = all_values(observations, size_name).fold(0.0_f64, f64::max);
    let sizeref = if max_size > 0.0 {
        2.0 * max_size / (SIZE_MAX * SIZE_MAX)
    } else {
        1.0
    };

    let years = frame_years(dataset);
    let frames = build_frames(dataset, &years, |g| {
        let countries = group::countries(&g.rows);
        Trace {
            kind: TraceKind::Scatter,
            name: Some(g.continent.to_string()),
            legendgroup: Some(g.continent.to_string()),
            showlegend: Some(true),
            mode: Some("markers".to_string()),
            x: Some(Series::Numbers(group::values(&g.rows, x_name))),
            y: Some(Series::Numbers(group::values(&g.rows, y_name))),
            ids: Some(countries.clone()),
            hovertext: Some(countries),
            hovertemplate: Some(group::hover_template(&[
                ("Continent", g.continent),
                (x_name, "%{x}"),
                (y_name, "%{y}"),
                (size_name, "%{marker.size}"),
            ])),
            marker: Some(Marker {
                color: Some(g.color),
                size: Some(group::values(&g.rows, size_name)),
                sizemode: Some("area".to_string()),
                sizeref: Some(sizeref),
                symbol: Some("circle".to_string()),
            }),
            ..Default::default()
        }
    });
    let (updatemenus, sliders) = animation_controls(&years, FRAME_DURATION_MS, false);

    let layout = Layout {
        title: Some(Title::new("Animation Scatter Plot")),
        xaxis: Some(Axis {
            range: padded_range(all_values(observations, x_name)),
            ..Axis::titled(x_name)
        }),
        yaxis: Some(Axis {
            range: padded_range(all_values(observations, y_name)),
            ..Axis::titled(y_name)
        }),
        width: Some(800),
        height: Some(375),
        showlegend: Some(false),
        legend: Some(Legend {
            title: Title::new("Continent"),
        }),
        updatemenus,
        sliders,
        ..Default::default()
    };

    Ok(Figure {
        data: first_frame_data(&frames),
        layout,
        frames,
    })
}

/// 3D scatter of life expectancy, fertility rate and CO2 emissions,
/// animated over years.
pub fn scatter_3d(dataset: &Dataset) -> Result<Figure> {
    let x_name = column(dataset, LIFE_EXPECTANCY)?;
    let y_name = column(dataset, FERTILITY_RATE)?;
    let z_name = column(dataset, CO2_EMISSIONS)?;
    let (x_label, y_label, z_label) = (
        indicator::short_name(x_name),
        indicator::short_name(y_name),
        indicator::short_name(z_name),
    );

    let years = frame_years(dataset);
    let frames = build_frames(dataset, &years, |g| Trace {
        kind: TraceKind::Scatter3d,
        name: Some(g.continent.to_string()),
        legendgroup: Some(g.continent.to_string()),
        showlegend: Some(true),
        mode: Some("markers".to_string()),
        x: Some(Series::Numbers(group::values(&g.rows, x_name))),
        y: Some(Series::Numbers(group::values(&g.rows, y_name))),
        z: Some(Series::Numbers(group::values(&g.rows, z_name))),
        hovertext: Some(group::countries(&g.rows)),
        hovertemplate: Some(group::hover_template(&[
            ("Continent", g.continent),
            (x_label, "%{x}"),
            (y_label, "%{y}"),
            (z_label, "%{z}"),
        ])),
        marker: Some(Marker {
            color: Some(g.color),
            symbol: Some("circle".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    });
    let transition = 100;
    let (updatemenus, sliders) = animation_controls(&years, transition, true);

    let observations = dataset.observations();
    let scene_axis = |name: &str, label: &str| Axis {
        range: padded_range(all_values(observations, name)),
        ..Axis::titled(label)
    };
    let layout = Layout {
        title: Some(Title::new("3D Scatter Plot")),
        scene: Some(Scene {
            xaxis: scene_axis(x_name, x_label),
            yaxis: scene_axis(y_name, y_label),
            zaxis: scene_axis(z_name, z_label),
        }),
        width: Some(700),
        height: Some(750),
        legend: Some(Legend {
            title: Title::new("Continent"),
        }),
        transition: Some(Transition {
            duration: transition,
        }),
        updatemenus,
        sliders,
        ..Default::default()
    };

    Ok(Figure {
        data: first_frame_data(&frames),
        layout,
        frames,
    })
}

/// Box plot of CO2 emissions per continent, animated over years.
pub fn animated_box(dataset: &Dataset) -> Result<Figure> {
    let y_name = column(dataset, CO2_EMISSIONS)?;
    let y_label = indicator::short_name(y_name);

    let years = frame_years(dataset);
    let frames = build_frames(dataset, &years, |g| Trace {
        kind: TraceKind::Box,
        name: Some(g.continent.to_string()),
        legendgroup: Some(g.continent.to_string()),
        showlegend: Some(true),
        x: Some(Series::Labels(vec![g.continent.to_string(); g.rows.len()])),
        y: Some(Series::Numbers(group::values(&g.rows, y_name))),
        hovertext: Some(group::countries(&g.rows)),
        hovertemplate: Some(group::hover_template(&[
            ("Continent", "%{x}"),
            (y_label, "%{y}"),
        ])),
        marker: Some(Marker {
            color: Some(g.color),
            ..Default::default()
        }),
        ..Default::default()
    });
    let transition = 100;
    let (updatemenus, sliders) = animation_controls(&years, transition, false);

    let layout = Layout {
        title: Some(Title::new("Animation Box Plot")),
        xaxis: Some(Axis {
            categoryorder: Some("array".to_string()),
            categoryarray: Some(dataset.continents().to_vec()),
            ..Axis::titled("Continent")
        }),
        yaxis: Some(Axis {
            range: Some(BOX_RANGE_Y),
            ..Axis::titled(y_label)
        }),
        width: Some(800),
        height: Some(375),
        showlegend: Some(false),
        transition: Some(Transition {
            duration: transition,
        }),
        updatemenus,
        sliders,
        ..Default::default()
    };

    Ok(Figure {
        data: first_frame_data(&frames),
        layout,
        frames,
    })
}

/// The three static figures, built together at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedFigures {
    pub scatter: Figure,
    pub scatter_3d: Figure,
    pub box_plot: Figure,
}

impl AnimatedFigures {
    pub fn build(dataset: &Dataset) -> Result<Self> {
        let figures = Self {
            scatter: animated_scatter(dataset)?,
            scatter_3d: scatter_3d(dataset)?,
            box_plot: animated_box(dataset)?,
        };
        log::info!(
            "animations: built {} frames per figure",
            figures.scatter.frames.len()
        );
        Ok(figures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;

    #[test]
    fn one_frame_per_year_with_every_continent() {
        let ds = sample();
        let fig = animated_scatter(&ds).unwrap();
        let names: Vec<&str> = fig.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["2002", "2007"]);
        for frame in &fig.frames {
            assert_eq!(frame.data.len(), ds.continents().len());
        }
        assert_eq!(fig.data, fig.frames[0].data);
    }

    #[test]
    fn bubbles_are_sized_by_population_density() {
        let ds = sample();
        let fig = animated_scatter(&ds).unwrap();
        let marker = fig.frames[1].data[0].marker.as_ref().unwrap();
        // Chile 2007.
        assert_eq!(marker.size, Some(vec![Some(22.3)]));
        assert_eq!(marker.sizemode.as_deref(), Some("area"));
        let expected = 2.0 * 65.0 / (SIZE_MAX * SIZE_MAX);
        assert!((marker.sizeref.unwrap() - expected).abs() < 1e-12);
        assert_eq!(fig.frames[1].data[0].ids, Some(vec!["Chile".to_string()]));
    }

    #[test]
    fn scatter_layout_hides_legend_and_fixes_ranges() {
        let ds = sample();
        let fig = animated_scatter(&ds).unwrap();
        assert_eq!(fig.layout.showlegend, Some(false));
        assert_eq!((fig.layout.width, fig.layout.height), (Some(800), Some(375)));
        assert!(fig.layout.xaxis.as_ref().unwrap().range.is_some());
        assert_eq!(fig.layout.updatemenus.len(), 1);
        let steps = fig.layout.sliders[0]["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1]["label"], "2007");
    }

    #[test]
    fn empty_continent_frames_have_empty_traces() {
        let ds = sample();
        let fig = animated_scatter(&ds).unwrap();
        // World (Unknown) only reports in 2007.
        let unknown_2002 = fig.frames[0]
            .data
            .iter()
            .find(|t| t.name.as_deref() == Some("Unknown"))
            .unwrap();
        assert_eq!(unknown_2002.x, Some(Series::Numbers(Vec::new())));
    }

    #[test]
    fn scatter_3d_uses_short_axis_titles() {
        let ds = sample();
        let fig = scatter_3d(&ds).unwrap();
        let scene = fig.layout.scene.as_ref().unwrap();
        assert_eq!(scene.xaxis.title.as_ref().unwrap().text, "Life expectancy");
        assert_eq!(scene.yaxis.title.as_ref().unwrap().text, "Fertility rate");
        assert_eq!(scene.zaxis.title.as_ref().unwrap().text, "CO2 emissions");
        assert!(fig.data.iter().all(|t| t.kind == TraceKind::Scatter3d));
        assert_eq!(fig.layout.transition, Some(Transition { duration: 100 }));
        assert_eq!((fig.layout.width, fig.layout.height), (Some(700), Some(750)));
    }

    #[test]
    fn box_plot_groups_by_continent_with_fixed_range() {
        let ds = sample();
        let fig = animated_box(&ds).unwrap();
        assert_eq!(fig.layout.yaxis.as_ref().unwrap().range, Some(BOX_RANGE_Y));
        let na_2007 = fig.frames[1]
            .data
            .iter()
            .find(|t| t.name.as_deref() == Some("North America"))
            .unwrap();
        assert_eq!(na_2007.x, Some(Series::Labels(vec!["North America".to_string()])));
        assert_eq!(na_2007.y, Some(Series::Numbers(vec![Some(19.2)])));
        assert_eq!(
            fig.layout.xaxis.as_ref().unwrap().categoryarray.as_deref(),
            Some(ds.continents())
        );
    }

    #[test]
    fn missing_indicator_is_an_error() {
        let csv = "\
Country Name,Indicator Name,Year,Value
Chile,Population density (people per sq. km of land area),2002,21.2
";
        let ds = Dataset::from_csv(csv).unwrap();
        assert_eq!(
            animated_box(&ds),
            Err(ViewError::UnknownIndicator(CO2_EMISSIONS.to_string()))
        );
        assert!(AnimatedFigures::build(&ds).is_err());
    }

    #[test]
    fn figures_are_deterministic() {
        let ds = sample();
        assert_eq!(AnimatedFigures::build(&ds), AnimatedFigures::build(&ds));
    }
}
