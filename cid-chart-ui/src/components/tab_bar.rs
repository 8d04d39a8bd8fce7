//! Tab bar switching between the three dashboard panes.

use crate::state::AppState;
use cid_views::tabs::TABS;
use dioxus::prelude::*;

const TAB_STYLE: &str =
    "flex: 1; padding: 10px; cursor: pointer; background: #f9f9f9; border: 1px solid #d6d6d6;";
const SELECTED_TAB_STYLE: &str = "flex: 1; padding: 10px; cursor: pointer; background: #fff; border: 1px solid #d6d6d6; border-bottom: none; border-top: 2px solid #1975FA;";

/// Row of tab buttons. Updates `active_tab`; the pane styles are derived
/// from it by `update_tabs`.
#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    let tabs: Vec<(&'static str, &'static str, bool)> = TABS
        .into_iter()
        .map(|(value, label)| (value, label, active == value))
        .collect();

    rsx! {
        div {
            id: "tabs",
            role: "tablist",
            style: "display: flex; border-bottom: 1px solid #d6d6d6; margin-bottom: 8px;",
            for (value, label, selected) in tabs {
                button {
                    key: "{value}",
                    role: "tab",
                    "aria-selected": "{selected}",
                    style: if selected { SELECTED_TAB_STYLE } else { TAB_STYLE },
                    onclick: move |_| state.active_tab.set(value.to_string()),
                    "{label}"
                }
            }
        }
    }
}
