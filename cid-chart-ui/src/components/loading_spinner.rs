//! Placeholder shown while the dataset downloads.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Where the data is coming from
    pub source: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "padding: 24px; text-align: center; color: #666; font-size: 14px;",
            progress { style: "width: 200px; display: block; margin: 0 auto 8px auto;" }
            "Fetching country indicators from "
            a { href: "{props.source}", "{props.source}" }
        }
    }
}
