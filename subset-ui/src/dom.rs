//! Direct DOM access for the few things signals cannot see.
//!
//! Everything here degrades to a logged no-op outside a browser window.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Absolute URL of the page hosting the form.
pub fn page_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Checked state of a radio or checkbox input, read from the live element.
///
/// A back-navigation can restore a checked radio without firing its change
/// event, so this can disagree with what was last rendered.
pub fn radio_checked(id: &str) -> Option<bool> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    element
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.checked())
}

/// Show a blocking message box.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("alert failed: {:?}", e);
            }
        }
        None => warn!("No window to show alert: {}", message),
    }
}
