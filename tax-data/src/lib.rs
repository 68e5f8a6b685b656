//! Tax dataset provisioning for the estimator.
//!
//! Two sources: [`builtin`] carries fully explicit per-year CRA figures
//! compiled into the binary, and [`loader`] parses external JSON documents
//! in the same shape, validating their structure before use. The engine in
//! `tax-core` assumes well-formed data; everything that enforces
//! well-formedness lives here.

pub mod builtin;
pub mod loader;

pub use loader::{TaxDataError, from_json_reader, from_json_str, validate};
