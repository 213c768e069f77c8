//! [`FormView`] over the Dioxus signals in [`AppState`].

use crate::dom;
use crate::state::{format_value, AppState};
use dioxus::prelude::*;
use std::ops::Deref;
use std::rc::Rc;
use subset_core::api::HttpDataApi;
use subset_core::bounds::{Limits, NumericField};
use subset_core::catalog::{CountryOption, DatasetOption};
use subset_core::config::FormConfig;
use subset_core::selection::{
    DateSelectionPair, Panel, RegionSubMode, SpatialSelectionMode,
};
use subset_core::view::FormView;
use subset_core::FormController;

/// DOM ids of the radio buttons read at startup.
pub const POINT_CHOICE_ID: &str = "pointChoice";
pub const BOUNDS_CHOICE_ID: &str = "boundsChoice";

/// The controller as wired in the browser.
pub type WebController = FormController<SignalFormView, HttpDataApi>;

/// Signal-backed page surface. Reads use `peek` so that controller calls
/// made from event handlers and tasks never subscribe a component.
#[derive(Clone, Copy)]
pub struct SignalFormView {
    state: AppState,
    lat_limits: Limits,
    lon_limits: Limits,
}

impl SignalFormView {
    pub fn new(state: AppState, config: &FormConfig) -> Self {
        SignalFormView {
            state,
            lat_limits: config.lat_limits,
            lon_limits: config.lon_limits,
        }
    }
}

impl FormView for SignalFormView {
    fn field_text(&self, field: NumericField) -> String {
        self.state.field(field).peek().clone()
    }

    fn set_field_value(&self, field: NumericField, value: f64) {
        let mut signal = self.state.field(field);
        signal.set(format_value(value));
    }

    fn field_limits(&self, field: NumericField) -> Limits {
        if field.is_latitude() {
            self.lat_limits
        } else {
            self.lon_limits
        }
    }

    fn email(&self) -> String {
        self.state.email.peek().clone()
    }

    fn job_reference(&self) -> String {
        self.state.job_reference.peek().clone()
    }

    fn set_dataset_options(&self, datasets: &[DatasetOption]) {
        let mut options = self.state.datasets;
        options.set(datasets.to_vec());
        let mut selected = self.state.selected_dataset;
        let current = selected.peek().clone();
        let keep = current.is_some_and(|id| datasets.iter().any(|d| d.id == id));
        if !keep {
            selected.set(datasets.first().map(|d| d.id.clone()));
        }
    }

    fn selected_dataset(&self) -> Option<String> {
        self.state.selected_dataset.peek().clone()
    }

    fn show_times_message(&self, message: &str) {
        let mut selection = self.state.time_selection;
        selection.set(None);
        let mut text = self.state.times_message;
        text.set(Some(message.to_string()));
    }

    fn show_time_selectors(&self, selection: &DateSelectionPair) {
        let mut text = self.state.times_message;
        text.set(None);
        let mut shown = self.state.time_selection;
        shown.set(Some(selection.clone()));
    }

    fn set_country_options(&self, countries: &[CountryOption]) {
        let mut options = self.state.countries;
        options.set(countries.to_vec());
        let mut selected = self.state.selected_country;
        let current = selected.peek().clone();
        if current.is_none() {
            selected.set(countries.first().map(|c| c.region_id.clone()));
        }
    }

    fn selected_country(&self) -> Option<String> {
        self.state.selected_country.peek().clone()
    }

    fn checked_spatial_mode(&self) -> SpatialSelectionMode {
        let point = dom::radio_checked(POINT_CHOICE_ID).unwrap_or_else(|| {
            self.state
                .visible_panels
                .peek()
                .contains(&Panel::PointSelection)
        });
        if point {
            SpatialSelectionMode::Point
        } else {
            SpatialSelectionMode::Region
        }
    }

    fn checked_region_sub_mode(&self) -> RegionSubMode {
        let bounds = dom::radio_checked(BOUNDS_CHOICE_ID)
            .unwrap_or_else(|| self.state.visible_panels.peek().contains(&Panel::Bounds));
        if bounds {
            RegionSubMode::Bounds
        } else {
            RegionSubMode::NamedCountry
        }
    }

    fn set_visible(&self, panel: Panel, visible: bool) {
        let mut panels = self.state.visible_panels;
        if visible {
            panels.write().insert(panel);
        } else {
            panels.write().remove(&panel);
        }
    }

    fn alert(&self, message: &str) {
        dom::alert(message);
    }
}

/// Controller handle provided through context.
///
/// Compared by pointer: two handles are equal when they share a controller.
#[derive(Clone)]
pub struct SharedController(pub Rc<WebController>);

impl PartialEq for SharedController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedController {
    type Target = WebController;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl SharedController {
    /// Wire a controller to the page: the data API is resolved against the
    /// page URL, the view against `state`.
    pub fn connect(state: AppState, config: FormConfig) -> Result<Self, String> {
        let page_url = dom::page_url().ok_or_else(|| "No page URL available".to_string())?;
        let api = HttpDataApi::new(&page_url, &config.endpoint).map_err(|e| e.to_string())?;
        let view = SignalFormView::new(state, &config);
        Ok(SharedController(Rc::new(FormController::new(view, api, config))))
    }
}
