//! Year slider under the crossfilter scatter.

use crate::state::{nearest_year, AppState};
use dioxus::prelude::*;

/// Slider over the dataset's years with one mark per year. Values between
/// marks snap to the nearest year present in the data.
#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let years: Vec<i32> = state
        .dataset
        .read()
        .as_ref()
        .map(|ds| ds.years().to_vec())
        .unwrap_or_default();
    let current = (state.year)();

    let (Some(&min), Some(&max)) = (years.first(), years.last()) else {
        return rsx! {};
    };
    let span = f64::from((max - min).max(1));
    let marks: Vec<(i32, f64)> = years
        .iter()
        .map(|&y| (y, f64::from(y - min) / span * 100.0))
        .collect();

    let on_input = move |evt: Event<FormData>| {
        let Ok(raw) = evt.value().parse::<f64>() else {
            return;
        };
        if let Some(year) = nearest_year(&years, raw) {
            if year != *state.year.peek() {
                state.year.set(year);
            }
        }
    };

    rsx! {
        div {
            style: "width: 39%; padding: 0px 20px 20px 20px;",
            input {
                id: "crossfilter-year--slider",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{current}",
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                style: "position: relative; height: 18px; font-size: 11px; color: #666;",
                for (year, pct) in marks {
                    span {
                        key: "{year}",
                        style: "position: absolute; left: {pct}%; transform: translateX(-50%);",
                        "{year}"
                    }
                }
            }
        }
    }
}
