//! Email and job reference inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Contact fields checked on submit.
#[component]
pub fn ContactFields() -> Element {
    let mut state = use_context::<AppState>();
    let email = (state.email)();
    let reference = (state.job_reference)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 6px;",
            label {
                r#for: "email",
                style: "font-weight: bold;",
                "Email address: "
                input {
                    r#type: "email",
                    id: "email",
                    name: "EMAIL",
                    value: "{email}",
                    oninput: move |evt: Event<FormData>| state.email.set(evt.value()),
                }
            }
            label {
                r#for: "ref",
                style: "font-weight: bold;",
                "Job reference: "
                input {
                    r#type: "text",
                    id: "ref",
                    name: "REF",
                    value: "{reference}",
                    oninput: move |evt: Event<FormData>| state.job_reference.set(evt.value()),
                }
            }
        }
    }
}
