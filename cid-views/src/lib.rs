//! Plotly figure builders and reactive view functions.
//!
//! Every public function here is pure: it maps the dataset and the current
//! widget values to a figure (or to tab visibility) and returns the same
//! output for the same inputs. The dashboard re-runs them whenever one of
//! their inputs changes; the CLI calls them to export figures as JSON.
//!
//! - [`tabs::update_tabs`] - which tab pane is visible
//! - [`crossfilter::crossfilter_scatter`] - scatter of two indicators for a year
//! - [`time_series::x_time_series`] / [`time_series::y_time_series`] - the
//!   hovered country's history
//! - [`scatter_matrix::scatter_matrix`] - scatter matrix over chosen dimensions
//! - [`animations`] - the three animated figures built once at startup

pub mod animations;
pub mod crossfilter;
pub mod error;
pub mod figure;
pub mod group;
pub mod hover;
pub mod scatter_matrix;
pub mod tabs;
pub mod time_series;

#[cfg(test)]
mod fixtures;

pub use error::ViewError;
pub use figure::Figure;
pub use hover::HoverData;
