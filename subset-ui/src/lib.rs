//! Dioxus front end of the data subset request form.
//!
//! Provides the form components, the signal-backed state they render and
//! the [`FormView`](subset_core::view::FormView) implementation that lets
//! the core controller drive them.

pub mod components;
pub mod dom;
pub mod state;
pub mod view;
