//! Dropdown selector for choosing a named country region.

use crate::state::AppState;
use dioxus::prelude::*;
use subset_core::selection::Panel;

/// Country dropdown selector, sorted by name. Disabled (and so not posted)
/// while a bounding box is being used instead.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let countries = state.countries.read().clone();
    let selected = (state.selected_country)();
    let disabled = state.is_visible(Panel::Bounds);

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "regionSelect",
                style: "font-weight: bold; margin-right: 8px;",
                "Country: "
            }
            select {
                id: "regionSelect",
                name: "REGION",
                disabled,
                onchange: move |evt: Event<FormData>| state.selected_country.set(Some(evt.value())),
                for country in countries.iter() {
                    option {
                        key: "{country.region_id}",
                        value: "{country.region_id}",
                        selected: selected.as_deref() == Some(country.region_id.as_str()),
                        "{country.name}"
                    }
                }
            }
        }
    }
}
