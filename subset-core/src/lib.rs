//! Core of the data subset request form.
//!
//! - `bounds`: numeric field limits and bounding box ordering
//! - `months`: dataset time ranges and the month option sequence
//! - `selection`: coupled start/end selectors and sub-form modes
//! - `catalog`: dataset and country listings
//! - `api`: the data API trait and its reqwest binding (feature `http`)
//! - `view`: the page capability the controller drives
//! - `controller`: `FormController`, the form's state rules
//! - `request`: submission validation and the posted subset job
//! - `config`: `FormConfig`

pub mod api;
pub mod bounds;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod months;
pub mod request;
pub mod selection;
pub mod view;

pub use controller::FormController;
pub use error::{Result, SubsetError, ValidationError};
