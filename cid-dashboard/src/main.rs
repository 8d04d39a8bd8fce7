//! Country Indicators Dashboard
//!
//! Three tabs over the World Bank country indicators:
//! 1. a crossfilter scatter whose hovered country drives two time series,
//! 2. a scatter matrix of user-chosen indicators,
//! 3. three animated figures (scatter, 3D scatter, box) over the years.
//!
//! Data flow:
//! 1. On mount, the long-form CSV is fetched from the Plotly datasets
//!    repository. If that fails the snapshot embedded by `build.rs` is used.
//! 2. The CSV is pivoted to one row per (country, year) in an in-memory
//!    SQLite database and each row is tagged with its continent.
//! 3. Every figure is a pure function of the dataset and a few signals; one
//!    effect per figure re-renders it through Plotly.js when they change.

mod panes;

use cid_chart_ui::components::{ErrorDisplay, LoadingSpinner, TabBar};
use cid_chart_ui::fetch::fetch_text;
use cid_chart_ui::js_bridge;
use cid_chart_ui::state::AppState;
use cid_data::Dataset;
use cid_views::animations::AnimatedFigures;
use cid_views::crossfilter::{crossfilter_scatter, CrossfilterInputs};
use cid_views::hover::HoverData;
use cid_views::scatter_matrix::scatter_matrix;
use cid_views::tabs::update_tabs;
use cid_views::time_series::{x_time_series, y_time_series};
use cid_views::{Figure, ViewError};
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use std::rc::Rc;

/// Long-form source dataset.
const DATASET_URL: &str = "https://plotly.github.io/datasets/country_indicators.csv";

/// Build-time snapshot of `DATASET_URL` (empty when none was bundled).
const SNAPSHOT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/country_indicators.csv"));

/// Error source of the startup load.
const DATASET_SOURCE: &str = "dataset";

/// Graph DOM ids, also used as error sources.
pub const CROSSFILTER_ID: &str = "crossfilter-indicator-scatter";
pub const X_SERIES_ID: &str = "x-time-series";
pub const Y_SERIES_ID: &str = "y-time-series";
pub const MATRIX_ID: &str = "scatter-matrix";
pub const ANIMATED_SCATTER_ID: &str = "animated-scatter";
pub const ANIMATED_BOX_ID: &str = "animated-box";
pub const SCATTER_3D_ID: &str = "scatter-3d";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("country-indicators-root"))
        .launch(App);
}

/// Fetch the dataset, falling back to the embedded snapshot.
async fn load_dataset() -> Result<Dataset, String> {
    let csv = match fetch_text(DATASET_URL).await {
        Ok(body) => body,
        Err(e) if !SNAPSHOT_CSV.trim().is_empty() => {
            log::warn!("{}; using the bundled snapshot", e);
            SNAPSHOT_CSV.to_string()
        }
        Err(e) => return Err(format!("{} and no snapshot is bundled", e)),
    };

    let dataset = Dataset::from_csv(&csv).map_err(|e| format!("{:#}", e))?;
    if dataset.is_empty() {
        return Err("The dataset has no rows with a population density".to_string());
    }
    Ok(dataset)
}

/// Serialize a figure and hand it to Plotly.
fn render(container_id: &str, figure: Result<Figure, ViewError>) -> Result<(), String> {
    let json = figure
        .map_err(|e| e.to_string())?
        .to_json()
        .map_err(|e| format!("Failed to serialize {}: {}", container_id, e))?;
    js_bridge::render_figure(container_id, &json);
    Ok(())
}

/// Log a failure of `source` and update the error box. A success clears
/// only that source's message.
fn report(mut state: AppState, source: &'static str, result: Result<(), String>) {
    if let Err(e) = &result {
        log::error!("[CID] {}: {}", source, e);
    }
    // `peek` keeps the calling effect from subscribing to the board.
    let mut board = state.errors.peek().clone();
    if board.record(source, result) {
        state.errors.set(board);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Hover events from the crossfilter scatter ───
    // The JS callback only queues the payload; this task turns it into
    // signal writes inside the Dioxus runtime.
    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<(String, String)>();
        js_bridge::set_hover_handler(move |container_id, payload| {
            let _ = tx.unbounded_send((container_id, payload));
        });
        spawn(async move {
            while let Some((container_id, payload)) = rx.next().await {
                if container_id != CROSSFILTER_ID {
                    continue;
                }
                match serde_json::from_str::<HoverData>(&payload) {
                    Ok(hover) => {
                        if *state.hover.peek() != hover {
                            state.hover.set(hover);
                        }
                    }
                    Err(e) => log::warn!("[CID] bad hover payload {}: {}", payload, e),
                }
            }
        });
    });

    // ─── Effect 1: load the dataset once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            match load_dataset().await {
                Ok(dataset) => {
                    log::info!(
                        "Loaded {} observations, {} indicators, {} years",
                        dataset.len(),
                        dataset.indicators().len(),
                        dataset.years().len()
                    );
                    if let Some(year) = dataset.latest_year() {
                        state.year.set(year);
                    }
                    state.dataset.set(Some(Rc::new(dataset)));
                }
                Err(e) => report(
                    state,
                    DATASET_SOURCE,
                    Err(format!("Failed to load country indicators: {}", e)),
                ),
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: animated figures, built once per dataset ───
    use_effect(move || {
        let Some(dataset) = (state.dataset)() else {
            return;
        };
        match AnimatedFigures::build(&dataset) {
            Ok(figures) => {
                report(state, ANIMATED_SCATTER_ID, render(ANIMATED_SCATTER_ID, Ok(figures.scatter)));
                report(state, ANIMATED_BOX_ID, render(ANIMATED_BOX_ID, Ok(figures.box_plot)));
                report(state, SCATTER_3D_ID, render(SCATTER_3D_ID, Ok(figures.scatter_3d)));
            }
            Err(e) => report(state, ANIMATED_SCATTER_ID, Err(e.to_string())),
        }
    });

    // ─── Effect 3: crossfilter scatter ───
    use_effect(move || {
        let inputs = CrossfilterInputs {
            xaxis_name: (state.xaxis_name)(),
            yaxis_name: (state.yaxis_name)(),
            xaxis_type: (state.xaxis_type)(),
            yaxis_type: (state.yaxis_type)(),
            year: (state.year)(),
        };
        let Some(dataset) = (state.dataset)() else {
            return;
        };
        let result = render(CROSSFILTER_ID, crossfilter_scatter(&dataset, &inputs));
        if result.is_ok() {
            js_bridge::bind_hover(CROSSFILTER_ID);
        }
        report(state, CROSSFILTER_ID, result);
    });

    // ─── Effect 4: x time series ───
    use_effect(move || {
        let hover = (state.hover)();
        let name = (state.xaxis_name)();
        let scale = (state.xaxis_type)();
        let Some(dataset) = (state.dataset)() else {
            return;
        };
        report(
            state,
            X_SERIES_ID,
            render(X_SERIES_ID, x_time_series(&dataset, &hover, &name, scale)),
        );
    });

    // ─── Effect 5: y time series ───
    use_effect(move || {
        let hover = (state.hover)();
        let name = (state.yaxis_name)();
        let scale = (state.yaxis_type)();
        let Some(dataset) = (state.dataset)() else {
            return;
        };
        report(
            state,
            Y_SERIES_ID,
            render(Y_SERIES_ID, y_time_series(&dataset, &hover, &name, scale)),
        );
    });

    // ─── Effect 6: scatter matrix ───
    use_effect(move || {
        let dimensions = state.dimensions.read().clone();
        let Some(dataset) = (state.dataset)() else {
            return;
        };
        report(
            state,
            MATRIX_ID,
            render(MATRIX_ID, scatter_matrix(&dataset, &dimensions)),
        );
    });

    // ─── Effect 7: let responsive figures size themselves in a newly shown pane ───
    use_effect(move || {
        let _tab = (state.active_tab)();
        js_bridge::call_js("window.dispatchEvent(new Event('resize'));");
    });

    let visibility = update_tabs(&(state.active_tab)());

    rsx! {
        div {
            style: "padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if !state.errors.read().is_empty() {
                ErrorDisplay { errors: state.errors.read().clone() }
            }

            if *state.loading.read() {
                LoadingSpinner { source: DATASET_URL.to_string() }
            }

            TabBar {}

            div {
                id: "tab-1-content",
                style: "{visibility.tab1.style()}",
                panes::CrossfilterPane {}
            }
            div {
                id: "tab-2-content",
                style: "{visibility.tab2.style()}",
                panes::MatrixPane {}
            }
            div {
                id: "tab-3-content",
                style: "{visibility.tab3.style()}",
                panes::AnimationPane {}
            }
        }
    }
}
