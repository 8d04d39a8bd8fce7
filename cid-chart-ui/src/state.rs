//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Each view effect reads only the signals its
//! view function depends on, so Dioxus re-runs it exactly when one of them
//! changes.

use cid_core::indicator::{AxisScale, FERTILITY_RATE, POPULATION_DENSITY};
use cid_data::Dataset;
use cid_views::hover::{HoverData, DEFAULT_HOVER_COUNTRY};
use cid_views::scatter_matrix::DEFAULT_DIMENSIONS;
use cid_views::tabs::TAB_1;
use dioxus::prelude::*;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Which axis of the crossfilter scatter a widget controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    X,
    Y,
}

impl AxisSide {
    /// DOM id prefix of the widgets for this axis.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            AxisSide::X => "crossfilter-xaxis",
            AxisSide::Y => "crossfilter-yaxis",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Enriched dataset (None until loaded)
    pub dataset: Signal<Option<Rc<Dataset>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Current failures, one per source
    pub errors: Signal<ErrorBoard>,
    /// Selected tab value ("tab-1", "tab-2", "tab-3")
    pub active_tab: Signal<String>,
    /// Crossfilter x-axis indicator (long name)
    pub xaxis_name: Signal<String>,
    /// Crossfilter y-axis indicator (long name)
    pub yaxis_name: Signal<String>,
    pub xaxis_type: Signal<AxisScale>,
    pub yaxis_type: Signal<AxisScale>,
    /// Year shown by the crossfilter scatter
    pub year: Signal<i32>,
    /// Last hover payload of the crossfilter scatter
    pub hover: Signal<HoverData>,
    /// Scatter-matrix dimensions (short names)
    pub dimensions: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            errors: Signal::new(ErrorBoard::default()),
            active_tab: Signal::new(TAB_1.to_string()),
            xaxis_name: Signal::new(POPULATION_DENSITY.to_string()),
            yaxis_name: Signal::new(FERTILITY_RATE.to_string()),
            xaxis_type: Signal::new(AxisScale::Log),
            yaxis_type: Signal::new(AxisScale::Linear),
            year: Signal::new(0),
            hover: Signal::new(HoverData::for_country(DEFAULT_HOVER_COUNTRY)),
            dimensions: Signal::new(DEFAULT_DIMENSIONS.iter().map(|d| d.to_string()).collect()),
        }
    }

    pub fn axis_name(&self, side: AxisSide) -> Signal<String> {
        match side {
            AxisSide::X => self.xaxis_name,
            AxisSide::Y => self.yaxis_name,
        }
    }

    pub fn axis_type(&self, side: AxisSide) -> Signal<AxisScale> {
        match side {
            AxisSide::X => self.xaxis_type,
            AxisSide::Y => self.yaxis_type,
        }
    }
}

/// Latest failure of each source (the dataset load or a graph container).
///
/// A source's message stays until that same source succeeds, so one figure
/// rendering fine does not hide another figure's error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBoard {
    by_source: BTreeMap<&'static str, String>,
}

impl ErrorBoard {
    /// Record the outcome of `source`. Returns whether the board changed.
    pub fn record(&mut self, source: &'static str, outcome: Result<(), String>) -> bool {
        match outcome {
            Ok(()) => self.by_source.remove(source).is_some(),
            Err(message) => {
                if self.by_source.get(source) == Some(&message) {
                    false
                } else {
                    self.by_source.insert(source, message);
                    true
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }

    /// Messages ordered by source.
    pub fn messages(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.by_source.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// The year in `years` closest to `value`; ties go to the earlier year.
///
/// The year slider only stops on years present in the data.
pub fn nearest_year(years: &[i32], value: f64) -> Option<i32> {
    years.iter().copied().min_by(|a, b| {
        let da = (f64::from(*a) - value).abs();
        let db = (f64::from(*b) - value).abs();
        da.total_cmp(&db).then(a.cmp(b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_year_snaps_to_marks() {
        let years = [1962, 1967, 1972, 2007];
        assert_eq!(nearest_year(&years, 1962.0), Some(1962));
        assert_eq!(nearest_year(&years, 1966.0), Some(1967));
        assert_eq!(nearest_year(&years, 1988.0), Some(1972));
        assert_eq!(nearest_year(&years, 3000.0), Some(2007));
        assert_eq!(nearest_year(&years, 1964.5), Some(1962), "ties go to the earlier year");
        assert_eq!(nearest_year(&[], 1990.0), None);
    }

    #[test]
    fn error_clears_when_its_source_succeeds() {
        let mut board = ErrorBoard::default();
        assert!(board.record("x-time-series", Err("No hovered point".to_string())));
        assert!(board.record("scatter-matrix", Err("Unknown indicator: Rain".to_string())));
        assert!(!board.record("x-time-series", Err("No hovered point".to_string())));

        // Another source succeeding leaves both messages in place.
        assert!(!board.record("y-time-series", Ok(())));
        assert_eq!(board.messages().count(), 2);

        assert!(board.record("x-time-series", Ok(())));
        let left: Vec<_> = board.messages().collect();
        assert_eq!(left, vec![("scatter-matrix", "Unknown indicator: Rain")]);

        assert!(board.record("scatter-matrix", Ok(())));
        assert!(board.is_empty());
    }
}
