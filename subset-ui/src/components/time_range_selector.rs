//! Coupled start/end month selectors.

use crate::state::AppState;
use crate::view::SharedController;
use dioxus::prelude::*;

/// Start and end month selectors, or the loading/failure message in their
/// place. Each option's value is the first instant of its month.
#[component]
pub fn TimeRangeSelector() -> Element {
    let state = use_context::<AppState>();
    let controller = use_context::<SharedController>();
    let message = (state.times_message)();
    let selection = state.time_selection.read().clone();

    if let Some(message) = message {
        return rsx! {
            div {
                id: "times",
                style: "margin: 8px 0; font-style: italic; color: #666;",
                "{message}"
            }
        };
    }
    let Some(selection) = selection else {
        return rsx! { div { id: "times" } };
    };

    let start_controller = controller.clone();
    let on_start = move |evt: Event<FormData>| {
        let value = evt.value();
        let index = start_controller
            .selection()
            .and_then(|pair| pair.index_of(&value));
        if let Some(index) = index {
            start_controller.on_start_selected(index);
        }
    };
    let on_end = move |evt: Event<FormData>| {
        let value = evt.value();
        let index = controller.selection().and_then(|pair| pair.index_of(&value));
        if let Some(index) = index {
            controller.on_end_selected(index);
        }
    };

    let start_index = selection.start_index();
    let end_index = selection.end_index();

    rsx! {
        div {
            id: "times",
            style: "margin: 8px 0; display: flex; align-items: center; gap: 8px;",
            label { r#for: "startTime", style: "font-weight: bold;", "From:" }
            select {
                id: "startTime",
                name: "STARTTIME",
                onchange: on_start,
                for (i, option) in selection.options().iter().enumerate() {
                    option {
                        key: "{option.timestamp}",
                        value: "{option.timestamp}",
                        selected: i == start_index,
                        "{option.label}"
                    }
                }
            }
            label { r#for: "endTime", style: "font-weight: bold;", "To:" }
            select {
                id: "endTime",
                name: "ENDTIME",
                onchange: on_end,
                for (i, option) in selection.options().iter().enumerate() {
                    option {
                        key: "{option.timestamp}",
                        value: "{option.timestamp}",
                        selected: i == end_index,
                        "{option.label}"
                    }
                }
            }
        }
    }
}
