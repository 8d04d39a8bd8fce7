//! Linear/Log radio items for one crossfilter axis.

use crate::state::{AppState, AxisSide};
use cid_core::indicator::AxisScale;
use dioxus::prelude::*;

#[component]
pub fn AxisTypeRadio(axis: AxisSide) -> Element {
    let state = use_context::<AppState>();
    let mut scale_signal = state.axis_type(axis);
    let current = scale_signal();
    let group = format!("{}-type", axis.id_prefix());

    rsx! {
        div {
            id: "{group}",
            style: "margin-top: 4px;",
            for scale in AxisScale::ALL {
                label {
                    key: "{scale}",
                    style: "display: inline-block; margin-right: 12px;",
                    input {
                        r#type: "radio",
                        name: "{group}",
                        value: "{scale.label()}",
                        checked: scale == current,
                        onchange: move |_| scale_signal.set(scale),
                    }
                    " {scale.label()}"
                }
            }
        }
    }
}
