//! Dioxus RSX components of the subset request form.

mod contact_fields;
mod country_selector;
mod dataset_selector;
mod error_display;
mod mode_choice;
mod not_loaded_panel;
mod numeric_input;
mod region_panel;
mod subset_form;
mod time_range_selector;

pub use contact_fields::ContactFields;
pub use country_selector::CountrySelector;
pub use dataset_selector::DatasetSelector;
pub use error_display::ErrorDisplay;
pub use mode_choice::{RegionModeChoice, SpatialModeChoice};
pub use not_loaded_panel::NotLoadedPanel;
pub use numeric_input::NumericInput;
pub use region_panel::{BoundsPanel, PointPanel, RegionPanel};
pub use subset_form::SubsetForm;
pub use time_range_selector::TimeRangeSelector;
