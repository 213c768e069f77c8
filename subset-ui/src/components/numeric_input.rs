//! Numeric coordinate input.

use crate::state::AppState;
use crate::view::SharedController;
use dioxus::prelude::*;
use subset_core::bounds::NumericField;

#[derive(Props, Clone, PartialEq)]
pub struct NumericInputProps {
    pub field: NumericField,
    pub label: String,
}

/// One of the six coordinate inputs.
///
/// Typing only updates the text; the limit and ordering rules run on
/// `change`, as the value is committed.
#[component]
pub fn NumericInput(props: NumericInputProps) -> Element {
    let state = use_context::<AppState>();
    let controller = use_context::<SharedController>();
    let field = props.field;
    let mut text = state.field(field);
    let limits = controller.config().limits_for(field.is_latitude());

    let on_change = move |evt: Event<FormData>| {
        text.set(evt.value());
        match field {
            NumericField::Bounds(edge) => controller.on_bounds_changed(edge),
            NumericField::Point(axis) => controller.on_point_changed(axis),
        }
    };

    rsx! {
        label {
            r#for: "{field.element_id()}",
            style: "margin-right: 12px;",
            "{props.label} "
            input {
                r#type: "number",
                id: "{field.element_id()}",
                name: "{field.param_name()}",
                min: "{limits.min}",
                max: "{limits.max}",
                step: "any",
                style: "width: 6em;",
                value: "{text}",
                oninput: move |evt: Event<FormData>| text.set(evt.value()),
                onchange: on_change,
            }
        }
    }
}
