//! Point and region sub-forms.

use super::{CountrySelector, NumericInput, RegionModeChoice};
use crate::state::{display_style, AppState};
use dioxus::prelude::*;
use subset_core::bounds::{BoundingBoxField, PointField};
use subset_core::selection::{Panel, RegionSubMode};

#[component]
pub fn PointPanel() -> Element {
    let state = use_context::<AppState>();
    let visible = state.is_visible(Panel::PointSelection);

    rsx! {
        div {
            id: "pointSelection",
            style: "{display_style(visible)} margin: 8px 0;",
            NumericInput { field: PointField::Lat.into(), label: "Latitude:".to_string() }
            NumericInput { field: PointField::Lon.into(), label: "Longitude:".to_string() }
        }
    }
}

/// The four bounding box edges. While shown, a hidden REGION=BOUNDS input
/// stands in for the disabled country selector.
#[component]
pub fn BoundsPanel() -> Element {
    let state = use_context::<AppState>();
    let visible = state.is_visible(Panel::Bounds);

    rsx! {
        div {
            id: "bounds",
            style: "{display_style(visible)} margin: 8px 0;",
            if visible {
                input { r#type: "hidden", name: "REGION", value: RegionSubMode::Bounds.as_str() }
            }
            div {
                NumericInput { field: BoundingBoxField::MaxLat.into(), label: "North:".to_string() }
            }
            div {
                NumericInput { field: BoundingBoxField::MinLon.into(), label: "West:".to_string() }
                NumericInput { field: BoundingBoxField::MaxLon.into(), label: "East:".to_string() }
            }
            div {
                NumericInput { field: BoundingBoxField::MinLat.into(), label: "South:".to_string() }
            }
        }
    }
}

#[component]
pub fn RegionPanel() -> Element {
    let state = use_context::<AppState>();
    let visible = state.is_visible(Panel::RegionSelection);

    rsx! {
        div {
            id: "regionSelection",
            style: "{display_style(visible)} margin: 8px 0;",
            RegionModeChoice {}
            CountrySelector {}
            BoundsPanel {}
        }
    }
}
