//! Radio buttons switching between the spatial sub-forms.

use crate::state::AppState;
use crate::view::{SharedController, BOUNDS_CHOICE_ID, POINT_CHOICE_ID};
use dioxus::prelude::*;
use subset_core::selection::{Panel, RegionSubMode, SpatialSelectionMode};

/// Point or region choice, posted as DATATYPE.
#[component]
pub fn SpatialModeChoice() -> Element {
    let state = use_context::<AppState>();
    let controller = use_context::<SharedController>();
    let point = state.is_visible(Panel::PointSelection);

    let on_change = move |evt: Event<FormData>| {
        controller.set_spatial_mode(SpatialSelectionMode::from_radio_value(&evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            span { style: "font-weight: bold; margin-right: 8px;", "Extract data for: " }
            label {
                style: "margin-right: 12px;",
                input {
                    r#type: "radio",
                    id: POINT_CHOICE_ID,
                    name: "DATATYPE",
                    value: SpatialSelectionMode::Point.as_str(),
                    checked: point,
                    onchange: on_change.clone(),
                }
                " a single point"
            }
            label {
                input {
                    r#type: "radio",
                    id: "regionChoice",
                    name: "DATATYPE",
                    value: SpatialSelectionMode::Region.as_str(),
                    checked: !point,
                    onchange: on_change,
                }
                " a region"
            }
        }
    }
}

/// Named country or bounding box choice inside the region sub-form.
#[component]
pub fn RegionModeChoice() -> Element {
    let state = use_context::<AppState>();
    let controller = use_context::<SharedController>();
    let bounds = state.is_visible(Panel::Bounds);

    let on_change = move |evt: Event<FormData>| {
        controller.set_region_sub_mode(RegionSubMode::from_radio_value(&evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "margin-right: 12px;",
                input {
                    r#type: "radio",
                    id: "countryChoice",
                    name: "REGIONTYPE",
                    value: RegionSubMode::NamedCountry.as_str(),
                    checked: !bounds,
                    onchange: on_change.clone(),
                }
                " a country"
            }
            label {
                input {
                    r#type: "radio",
                    id: BOUNDS_CHOICE_ID,
                    name: "REGIONTYPE",
                    value: RegionSubMode::Bounds.as_str(),
                    checked: bounds,
                    onchange: on_change,
                }
                " a latitude/longitude box"
            }
        }
    }
}
