//! Shared Dioxus components and Plotly.js bridge for the country indicators
//! dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Plotly.js bridge via `js_sys::eval()`
//! - `fetch`: one-shot download of the dataset from the browser
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX widgets (tabs, dropdowns, radio items, slider, graphs)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
