//! Explanatory note at the top of each tab.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoteProps {
    /// One italic bullet per line
    pub lines: Vec<String>,
}

/// A bold "Note:" followed by a bulleted list of italic lines.
#[component]
pub fn Note(props: NoteProps) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0; font-size: 14px;",
            strong { "Note:" }
            ul {
                style: "margin: 4px 0 0 0;",
                for line in props.lines.iter() {
                    li { em { "{line}" } }
                }
            }
        }
    }
}
