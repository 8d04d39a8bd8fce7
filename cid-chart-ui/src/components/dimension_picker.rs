//! Multi-select of the scatter-matrix dimensions.

use crate::state::AppState;
use dioxus::prelude::*;

/// Chips for the selected short names plus a select adding another one.
/// Removing every chip leaves an empty matrix.
#[component]
pub fn DimensionPicker() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.dimensions.read().clone();
    let available: Vec<String> = state
        .dataset
        .read()
        .as_ref()
        .map(|ds| {
            ds.short_names()
                .into_iter()
                .filter(|s| !selected.iter().any(|d| d.as_str() == *s))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let on_add = move |evt: Event<FormData>| {
        let value = evt.value();
        if value.is_empty() {
            return;
        }
        let mut dims = state.dimensions.write();
        if !dims.contains(&value) {
            dims.push(value);
        }
    };

    rsx! {
        div {
            id: "dropdown-scatter-matrix",
            style: "display: flex; flex-wrap: wrap; gap: 6px; align-items: center; margin: 8px 0;",
            for dim in selected.iter() {
                {
                    let name = dim.clone();
                    rsx! {
                        span {
                            key: "{dim}",
                            style: "background: #E3F2FD; border: 1px solid #90CAF9; border-radius: 3px; padding: 2px 6px;",
                            "{dim} "
                            button {
                                style: "border: none; background: none; cursor: pointer; padding: 0;",
                                title: "Remove",
                                onclick: move |_| state.dimensions.write().retain(|d| *d != name),
                                "×"
                            }
                        }
                    }
                }
            }
            select {
                onchange: on_add,
                option { value: "", selected: true, "Add dimension..." }
                for name in available.iter() {
                    option { value: "{name}", "{name}" }
                }
            }
        }
    }
}
