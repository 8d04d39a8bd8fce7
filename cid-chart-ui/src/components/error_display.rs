//! Error box listing the current failure of each source.

use crate::state::ErrorBoard;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub errors: ErrorBoard,
}

/// One line per failing source. Renders nothing once every source has
/// recovered.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    if props.errors.is_empty() {
        return rsx! {};
    }
    let lines: Vec<(String, String)> = props
        .errors
        .messages()
        .map(|(source, message)| (source.to_string(), message.to_string()))
        .collect();

    rsx! {
        div {
            role: "alert",
            style: "padding: 8px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px;",
            for (source, message) in lines {
                div {
                    key: "{source}",
                    code { style: "margin-right: 8px;", "{source}" }
                    "{message}"
                }
            }
        }
    }
}
