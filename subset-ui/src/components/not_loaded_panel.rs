//! Panel replacing the form while the server has not loaded the data.

use crate::state::{display_style, AppState};
use dioxus::prelude::*;
use subset_core::selection::Panel;

/// "Not loaded yet" notice. Hidden until a time range request reports the
/// dataset as unavailable.
#[component]
pub fn NotLoadedPanel() -> Element {
    let state = use_context::<AppState>();
    let visible = state.is_visible(Panel::NotLoaded);

    rsx! {
        div {
            id: "not_loaded",
            style: "{display_style(visible)} padding: 12px 16px; margin: 8px 0; background: #FFF8E1; border: 1px solid #FFE082; border-radius: 4px;",
            p {
                style: "margin: 0;",
                "The data is not loaded on the server yet. This usually means the service has only just started. "
                "Please try again in a few minutes, and contact us if the problem persists."
            }
        }
    }
}
