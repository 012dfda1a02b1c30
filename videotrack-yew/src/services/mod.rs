//! Browser-facing services: the tracking client and DOM form collection

mod form;
mod tracker;

pub use form::collect_form_fields;
pub use tracker::{TrackerClient, TrackerError};
