//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the form's reactive signals into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`; the controller reaches it through
//! [`SignalFormView`](crate::view::SignalFormView).

use dioxus::prelude::*;
use std::collections::HashSet;
use subset_core::bounds::{BoundingBoxField, NumericField, PointField};
use subset_core::catalog::{CountryOption, DatasetOption};
use subset_core::config::FormConfig;
use subset_core::selection::{DateSelectionPair, Panel};

/// Shared state of the subset request form.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Raw text of the bounding box inputs
    pub min_lat: Signal<String>,
    pub max_lat: Signal<String>,
    pub min_lon: Signal<String>,
    pub max_lon: Signal<String>,
    /// Raw text of the point inputs
    pub lat: Signal<String>,
    pub lon: Signal<String>,
    pub email: Signal<String>,
    pub job_reference: Signal<String>,
    /// Datasets in server order (empty until loaded)
    pub datasets: Signal<Vec<DatasetOption>>,
    pub selected_dataset: Signal<Option<String>>,
    /// Shown in place of the time selectors while loading or on failure
    pub times_message: Signal<Option<String>>,
    pub time_selection: Signal<Option<DateSelectionPair>>,
    /// Countries sorted by name
    pub countries: Signal<Vec<CountryOption>>,
    pub selected_country: Signal<Option<String>>,
    /// Containers currently displayed
    pub visible_panels: Signal<HashSet<Panel>>,
}

impl AppState {
    /// Create the state of a freshly served page: the form and the
    /// "not loaded" label are visible, the point sub-form is selected and
    /// the bounding box spans the configured limits.
    pub fn new(config: &FormConfig) -> Self {
        let lat = config.lat_limits;
        let lon = config.lon_limits;
        Self {
            min_lat: Signal::new(format_value(lat.min)),
            max_lat: Signal::new(format_value(lat.max)),
            min_lon: Signal::new(format_value(lon.min)),
            max_lon: Signal::new(format_value(lon.max)),
            lat: Signal::new(format_value(lat.clamp_to_limits(0.0))),
            lon: Signal::new(format_value(lon.clamp_to_limits(0.0))),
            email: Signal::new(String::new()),
            job_reference: Signal::new(String::new()),
            datasets: Signal::new(Vec::new()),
            selected_dataset: Signal::new(None),
            times_message: Signal::new(None),
            time_selection: Signal::new(None),
            countries: Signal::new(Vec::new()),
            selected_country: Signal::new(None),
            visible_panels: Signal::new(HashSet::from([
                Panel::Form,
                Panel::NotLoadedLabel,
                Panel::PointSelection,
            ])),
        }
    }

    /// Signal holding the text of a numeric input.
    pub fn field(&self, field: NumericField) -> Signal<String> {
        match field {
            NumericField::Bounds(BoundingBoxField::MinLat) => self.min_lat,
            NumericField::Bounds(BoundingBoxField::MaxLat) => self.max_lat,
            NumericField::Bounds(BoundingBoxField::MinLon) => self.min_lon,
            NumericField::Bounds(BoundingBoxField::MaxLon) => self.max_lon,
            NumericField::Point(PointField::Lat) => self.lat,
            NumericField::Point(PointField::Lon) => self.lon,
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible_panels.read().contains(&panel)
    }
}

/// Text written back into a numeric input.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Inline style toggling a container.
pub fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}
