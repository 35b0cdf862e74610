// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where documents come from

use super::DocumentKind;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A read-only provider of site documents. Sources are shared across the
/// loader's worker threads.
pub trait DocumentSource: Sync {
    fn fetch(&self, kind: DocumentKind) -> Result<Value>;

    /// Human-readable location of a document, for diagnostics.
    fn describe(&self, kind: DocumentKind) -> String;
}

/// Documents read from a data directory (`data/profile.json`, ...)
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, kind: DocumentKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, kind: DocumentKind) -> Result<Value> {
        let path = self.path_of(kind);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing json {}", path.display()))
    }

    fn describe(&self, kind: DocumentKind) -> String {
        self.path_of(kind).display().to_string()
    }
}

/// Documents held as raw JSON text; unset documents fail to fetch
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<DocumentKind, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: DocumentKind, raw: impl Into<String>) -> Self {
        self.docs.insert(kind, raw.into());
        self
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, kind: DocumentKind) -> Result<Value> {
        let raw = self
            .docs
            .get(&kind)
            .ok_or_else(|| anyhow!("{} not provided", kind.file_name()))?;
        serde_json::from_str(raw).with_context(|| format!("parsing json {}", kind.file_name()))
    }

    fn describe(&self, kind: DocumentKind) -> String {
        format!("memory:{}", kind.file_name())
    }
}
