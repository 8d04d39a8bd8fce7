//! Graph container component.

use dioxus::prelude::*;

/// Props for Graph
#[derive(Props, Clone, PartialEq)]
pub struct GraphProps {
    /// The DOM id Plotly renders into
    pub id: String,
    /// Minimum height in pixels, kept while the figure is not drawn yet
    #[props(default = 225)]
    pub min_height: u32,
}

/// A container div for one Plotly figure.
#[component]
pub fn Graph(props: GraphProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
