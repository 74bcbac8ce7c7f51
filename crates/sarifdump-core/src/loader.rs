//! Reading SARIF documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::Error as _;

use crate::shape::check_document;
use crate::types::SarifLog;

/// Errors that can occur while loading a SARIF document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid SARIF document: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the SARIF document at `path`.
pub fn load(path: &Path) -> Result<SarifLog, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a SARIF document from a string. A leading UTF-8 byte order mark is ignored.
///
/// Records must be JSON objects; an array in their place is rejected rather
/// than decoded by position.
pub fn parse(content: &str) -> Result<SarifLog, serde_json::Error> {
    let value: serde_json::Value =
        serde_json::from_str(content.strip_prefix('\u{feff}').unwrap_or(content))?;
    check_document(&value).map_err(serde_json::Error::custom)?;
    serde_json::from_value(value)
}
