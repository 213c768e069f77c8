//! TAMSAT data subset request form
//!
//! Lets a user pick a dataset, a month range and a point or region, then
//! posts the subset job to the data endpoint.
//!
//! Data flow:
//! 1. `include_str!` embeds `form-config.json` (endpoint, coordinate limits).
//! 2. On mount: the controller reads the sub-form radios, then fetches the
//!    dataset and country lists concurrently.
//! 3. The first (or restored) dataset's time range fills the month selectors.
//! 4. On submit: the contact fields are validated before the native POST.

use dioxus::prelude::*;
use log::{info, warn};
use subset_core::config::FormConfig;
use subset_ui::components::{ErrorDisplay, SubsetForm};
use subset_ui::state::AppState;
use subset_ui::view::SharedController;

const FORM_CONFIG_JSON: &str = include_str!("../assets/form-config.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("subset-form-root"))
        .launch(App);
}

/// Embedded configuration, or the defaults if it does not parse.
fn load_config() -> FormConfig {
    match FormConfig::from_json(FORM_CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid form config, using defaults: {}", e);
            FormConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let state = use_context_provider(|| AppState::new(&config));
    let controller = use_hook(|| {
        info!("Connecting form to endpoint {:?}", config.endpoint);
        SharedController::connect(state, config.clone())
    });

    rsx! {
        match controller {
            Ok(controller) => rsx! { SubsetForm { controller } },
            Err(message) => rsx! { ErrorDisplay { message } },
        }
    }
}
