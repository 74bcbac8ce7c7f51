//! Configuration file loading for sarifdump.
//!
//! Reads an optional `sarifdump.json` from the directory being dumped.
//! Falls back to defaults when the file is missing or unreadable; command line
//! flags are applied on top by the CLI.

use std::path::Path;

use serde::Deserialize;

use crate::walker::DEFAULT_PATTERN;

pub const CONFIG_FILE_NAME: &str = "sarifdump.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DumpConfig {
    /// Skip documents that fail to load or render instead of stopping.
    #[serde(default)]
    pub keep_going: bool,
    /// File name glob for discovered documents.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default)]
    pub follow_links: bool,
    /// Directory names never descended into.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            keep_going: false,
            pattern: default_pattern(),
            follow_links: false,
            exclude: vec![],
        }
    }
}

impl DumpConfig {
    /// Load `sarifdump.json` from `root`. A root that is a file has no config.
    pub fn load(root: &Path) -> Self {
        if !root.is_dir() {
            return Self::default();
        }
        let config_path = root.join(CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "sarifdump: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
