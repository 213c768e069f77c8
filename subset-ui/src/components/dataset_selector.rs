//! Dropdown selector for choosing a dataset.

use crate::state::AppState;
use crate::view::SharedController;
use dioxus::prelude::*;

/// Dataset dropdown selector.
/// Lists datasets in server order; a change re-populates the time selectors.
#[component]
pub fn DatasetSelector() -> Element {
    let mut state = use_context::<AppState>();
    let controller = use_context::<SharedController>();
    let datasets = state.datasets.read().clone();
    let selected = (state.selected_dataset)();

    let on_change = move |evt: Event<FormData>| {
        let dataset = evt.value();
        state.selected_dataset.set(Some(dataset.clone()));
        let controller = controller.clone();
        spawn(async move {
            controller.on_dataset_changed(&dataset).await;
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "datasetSelect",
                style: "font-weight: bold; margin-right: 8px;",
                "Dataset: "
            }
            select {
                id: "datasetSelect",
                name: "DATASET",
                onchange: on_change,
                for dataset in datasets.iter() {
                    option {
                        key: "{dataset.id}",
                        value: "{dataset.id}",
                        selected: selected.as_deref() == Some(dataset.id.as_str()),
                        "{dataset.label}"
                    }
                }
            }
        }
    }
}
