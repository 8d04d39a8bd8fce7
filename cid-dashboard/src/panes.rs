//! Contents of the three tab panes.

use crate::{
    ANIMATED_BOX_ID, ANIMATED_SCATTER_ID, CROSSFILTER_ID, MATRIX_ID, SCATTER_3D_ID, X_SERIES_ID,
    Y_SERIES_ID,
};
use cid_chart_ui::components::{
    AxisTypeRadio, DimensionPicker, Graph, IndicatorDropdown, Note, YearSlider,
};
use cid_chart_ui::state::AxisSide;
use dioxus::prelude::*;

const CROSSFILTER_NOTE: [&str; 2] = [
    "In this page, you can choose different combinations of variables to create a scatter plot",
    "Two time series plots on the right will update automatically when you hover over points in the scatter plot",
];

const MATRIX_NOTE: [&str; 2] = [
    "In this page, you can further explore the relationship among variables",
    "You can choose multiple input variables (>1) to create a scatter-matrix plot",
];

const ANIMATION_NOTE: [&str; 2] = [
    "In this page, you will find three different animation plots displaying the relationship of CO2 emissions with several other variables",
    "A scatter plot, a box plot, and a 3D scatter plot are included in this page",
];

fn note_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

/// Tab 1: axis controls, crossfilter scatter, time series and year slider.
#[component]
pub fn CrossfilterPane() -> Element {
    rsx! {
        Note { lines: note_lines(&CROSSFILTER_NOTE) }
        div {
            style: "padding: 10px 5px; overflow: hidden;",
            div {
                style: "width: 49%; display: inline-block;",
                IndicatorDropdown { axis: AxisSide::X }
                AxisTypeRadio { axis: AxisSide::X }
            }
            div {
                style: "width: 49%; float: right; display: inline-block;",
                IndicatorDropdown { axis: AxisSide::Y }
                AxisTypeRadio { axis: AxisSide::Y }
            }
        }
        div {
            style: "width: 49%; display: inline-block; vertical-align: top;",
            Graph { id: CROSSFILTER_ID.to_string(), min_height: 450 }
        }
        div {
            style: "width: 49%; display: inline-block; vertical-align: top;",
            Graph { id: X_SERIES_ID.to_string() }
            Graph { id: Y_SERIES_ID.to_string() }
        }
        YearSlider {}
    }
}

/// Tab 2: dimension picker and scatter matrix.
#[component]
pub fn MatrixPane() -> Element {
    rsx! {
        Note { lines: note_lines(&MATRIX_NOTE) }
        DimensionPicker {}
        Graph { id: MATRIX_ID.to_string(), min_height: 640 }
    }
}

/// Tab 3: the animated scatter and box on the left, the 3D scatter on the right.
#[component]
pub fn AnimationPane() -> Element {
    rsx! {
        Note { lines: note_lines(&ANIMATION_NOTE) }
        div {
            style: "width: 54%; display: inline-block; vertical-align: top;",
            Graph { id: ANIMATED_SCATTER_ID.to_string(), min_height: 375 }
            Graph { id: ANIMATED_BOX_ID.to_string(), min_height: 375 }
        }
        div {
            style: "width: 44%; display: inline-block; vertical-align: top;",
            Graph { id: SCATTER_3D_ID.to_string(), min_height: 750 }
        }
    }
}
