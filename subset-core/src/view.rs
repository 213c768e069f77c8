//! The page surface the controller reads and mutates.
//!
//! Every method takes `&self`: like DOM elements, a view is a handle onto
//! state that lives elsewhere, and implementations use interior mutability.

use crate::bounds::{Limits, NumericField};
use crate::catalog::{CountryOption, DatasetOption};
use crate::selection::{DateSelectionPair, Panel, RegionSubMode, SpatialSelectionMode};

pub trait FormView {
    /// Raw text of a numeric input.
    fn field_text(&self, field: NumericField) -> String;
    fn set_field_value(&self, field: NumericField, value: f64);
    /// The input's declared min/max.
    fn field_limits(&self, field: NumericField) -> Limits;

    fn email(&self) -> String;
    fn job_reference(&self) -> String;

    fn set_dataset_options(&self, datasets: &[DatasetOption]);
    fn selected_dataset(&self) -> Option<String>;

    /// Replace the time selectors with a message, e.g. while loading.
    fn show_times_message(&self, message: &str);
    /// Render both time selectors with their options and current indices.
    fn show_time_selectors(&self, selection: &DateSelectionPair);

    fn set_country_options(&self, countries: &[CountryOption]);
    fn selected_country(&self) -> Option<String>;

    /// Mode of the currently checked spatial radio button.
    fn checked_spatial_mode(&self) -> SpatialSelectionMode;
    /// Mode of the currently checked region radio button.
    fn checked_region_sub_mode(&self) -> RegionSubMode;

    fn set_visible(&self, panel: Panel, visible: bool);

    /// Blocking message to the user.
    fn alert(&self, message: &str);
}
