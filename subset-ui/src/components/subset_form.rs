//! The subset request form.

use super::{
    ContactFields, DatasetSelector, NotLoadedPanel, PointPanel, RegionPanel, SpatialModeChoice,
    TimeRangeSelector,
};
use crate::state::{display_style, AppState};
use crate::view::SharedController;
use dioxus::prelude::*;
use log::{debug, info};
use subset_core::selection::Panel;

#[derive(Props, Clone, PartialEq)]
pub struct SubsetFormProps {
    pub controller: SharedController,
}

/// Whole form, posted natively to the configured endpoint once the contact
/// fields pass validation.
///
/// The controller is provided to every child through context and initialized
/// once on mount.
#[component]
pub fn SubsetForm(props: SubsetFormProps) -> Element {
    let state = use_context::<AppState>();
    let controller = use_context_provider(|| props.controller.clone());
    let endpoint = controller.config().endpoint.clone();

    let init_controller = controller.clone();
    use_effect(move || {
        let controller = init_controller.clone();
        spawn(async move {
            info!("Initializing subset request form");
            controller.initialize().await;
        });
    });

    let on_submit = move |evt: Event<FormData>| {
        if !controller.validate_submission() {
            evt.prevent_default();
            return;
        }
        match controller.subset_request() {
            Some(request) => {
                info!("Submitting subset request: {}", request);
                debug!("Posted parameters: {:?}", request.query_pairs());
            }
            None => info!("Submitting incomplete subset request"),
        }
    };

    let form_visible = state.is_visible(Panel::Form);
    let label_visible = state.is_visible(Panel::NotLoadedLabel);
    let selection_visible = state.is_visible(Panel::SubsetSelection);

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: sans-serif;",
            form {
                id: "form",
                action: "{endpoint}",
                method: "post",
                style: "{display_style(form_visible)}",
                onsubmit: on_submit,
                div {
                    id: "notLoadedLabel",
                    style: "{display_style(label_visible)} font-style: italic; color: #666;",
                    "Loading the list of datasets..."
                }
                div {
                    id: "subsetSelection",
                    style: "{display_style(selection_visible)}",
                    DatasetSelector {}
                    TimeRangeSelector {}
                    SpatialModeChoice {}
                    PointPanel {}
                    RegionPanel {}
                    ContactFields {}
                    button {
                        r#type: "submit",
                        style: "margin-top: 8px; padding: 6px 16px;",
                        "Submit request"
                    }
                }
            }
            NotLoadedPanel {}
        }
    }
}
