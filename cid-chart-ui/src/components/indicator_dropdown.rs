//! Dropdown selecting the indicator shown on one crossfilter axis.

use crate::state::{AppState, AxisSide};
use dioxus::prelude::*;

/// Indicator dropdown for one axis. Options are the dataset's indicators
/// (long names) in source order.
#[component]
pub fn IndicatorDropdown(axis: AxisSide) -> Element {
    let state = use_context::<AppState>();
    let mut selected_signal = state.axis_name(axis);
    let selected = selected_signal();
    let indicators: Vec<String> = state
        .dataset
        .read()
        .as_ref()
        .map(|ds| ds.indicators().to_vec())
        .unwrap_or_default();

    let id = format!("{}-column", axis.id_prefix());

    let on_change = move |evt: Event<FormData>| {
        selected_signal.set(evt.value());
    };

    rsx! {
        select {
            id: "{id}",
            style: "width: 100%;",
            onchange: on_change,
            for name in indicators.iter() {
                option {
                    value: "{name}",
                    selected: *name == selected,
                    "{name}"
                }
            }
        }
    }
}
