use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use walkdir::WalkDir;

/// Default file name pattern for discovered documents.
pub const DEFAULT_PATTERN: &str = "*.sarif";

pub struct WalkEntry {
    pub path: PathBuf,
}

impl WalkEntry {
    /// Directory relative URIs inside the document are resolved against.
    pub fn base_path(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

pub struct SarifWalker {
    root: PathBuf,
    matcher: GlobMatcher,
    follow_links: bool,
    exclude: Vec<String>,
}

impl SarifWalker {
    pub fn new(root: &Path, pattern: &str) -> Result<Self, globset::Error> {
        Ok(Self {
            root: root.to_path_buf(),
            matcher: Glob::new(pattern)?.compile_matcher(),
            follow_links: false,
            exclude: vec![],
        })
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Directory names never descended into.
    pub fn exclude(mut self, names: Vec<String>) -> Self {
        self.exclude = names;
        self
    }

    /// Matching files under the root, depth-first, sorted by name within a directory.
    ///
    /// A root that is itself a file is returned as-is, whatever its name.
    pub fn walk(&self) -> Vec<WalkEntry> {
        if self.root.is_file() {
            return vec![WalkEntry {
                path: self.root.clone(),
            }];
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || !self.is_excluded(e.file_name())
            });

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("sarifdump: warning: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if self.matcher.is_match(entry.file_name()) {
                entries.push(WalkEntry {
                    path: entry.into_path(),
                });
            }
        }

        entries
    }

    fn is_excluded(&self, name: &std::ffi::OsStr) -> bool {
        self.exclude.iter().any(|ex| name == ex.as_str())
    }
}
