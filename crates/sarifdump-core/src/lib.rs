//! SARIF types, document loading, and discovery for sarifdump.
//!
//! - [`types`] — Typed views over the parts of a SARIF 2.1.0 log that get rendered
//! - [`loader`] — Reading a document from disk into a [`SarifLog`](types::SarifLog)
//! - [`walker`] — Finding `*.sarif` documents below a directory
//! - [`config`] — Optional `sarifdump.json` settings

pub mod config;
pub mod loader;
mod shape;
pub mod types;
pub mod walker;

pub use loader::{load, LoadError};
pub use types::SarifLog;
