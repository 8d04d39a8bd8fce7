//! Tab switching.

use serde::Serialize;

pub const TAB_1: &str = "tab-1";
pub const TAB_2: &str = "tab-2";
pub const TAB_3: &str = "tab-3";

/// (value, label) of each tab, in display order.
pub const TABS: [(&str, &str); 3] = [(TAB_1, "Tab 1"), (TAB_2, "Tab 2"), (TAB_3, "Tab 3")];

/// CSS `display` of a tab pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn style(&self) -> &'static str {
        match self {
            Display::Block => "display: block;",
            Display::None => "display: none;",
        }
    }
}

/// Visibility of the three tab panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabVisibility {
    pub tab1: Display,
    pub tab2: Display,
    pub tab3: Display,
}

/// Show the pane of the selected tab and hide the others. Any value other
/// than `tab-1` or `tab-2` selects the third pane.
pub fn update_tabs(tab: &str) -> TabVisibility {
    let show = |pane: &str| {
        if pane == tab {
            Display::Block
        } else {
            Display::None
        }
    };
    let tab3 = if tab == TAB_1 || tab == TAB_2 { Display::None } else { Display::Block };
    TabVisibility {
        tab1: show(TAB_1),
        tab2: show(TAB_2),
        tab3,
    }
}
