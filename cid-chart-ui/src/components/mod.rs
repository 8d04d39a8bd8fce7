//! Reusable Dioxus RSX components for the dashboard.

mod axis_type_radio;
mod dimension_picker;
mod error_display;
mod graph;
mod indicator_dropdown;
mod loading_spinner;
mod note;
mod tab_bar;
mod year_slider;

pub use axis_type_radio::AxisTypeRadio;
pub use dimension_picker::DimensionPicker;
pub use error_display::ErrorDisplay;
pub use graph::Graph;
pub use indicator_dropdown::IndicatorDropdown;
pub use loading_spinner::LoadingSpinner;
pub use note::Note;
pub use tab_bar::TabBar;
pub use year_slider::YearSlider;
