//! Shared model and client-side logic for the product catalog.
//!
//! Everything here is free of browser and server dependencies so the same
//! rules run in the Yew front-end, in the API server and in native tests.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod form;
pub mod model;
pub mod notification;
pub mod service;
pub mod validation;
