//! Parsing of the local `.dev.vars` secrets file.
//!
//! The file format is the usual dotenv dialect: one `KEY=VALUE` per line,
//! `#`-prefixed comments, blank lines ignored. Values keep everything after
//! the first `=`, with surrounding whitespace and one layer of matching
//! quotes removed.

use crate::error::{Result, SyncError};
use std::collections::HashMap;
use std::path::Path;

/// Parsed contents of the secrets file, read once per run.
#[derive(Debug, Clone)]
pub struct VarFile {
    vars: HashMap<String, String>,
}

impl VarFile {
    /// Create a var file from pre-parsed entries. Primarily for tests.
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Read and parse the secrets file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingVarsFile`] if the file does not exist,
    /// or [`SyncError::Io`] if it cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SyncError::MissingVarsFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse `KEY=VALUE` lines into a map.
    ///
    /// Lines without an `=` are skipped silently; later duplicates of a key
    /// overwrite earlier ones. An empty result is not an error here - the
    /// required-key check is the gate that decides whether a run proceeds.
    pub fn parse(content: &str) -> Self {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }

                vars.insert(key.to_string(), strip_quotes(value.trim()).to_string());
            }
        }

        Self { vars }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// All parsed entries as a read-only map.
    pub fn all(&self) -> &HashMap<String, String> {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Required keys that are absent, in the order they were required.
    pub fn missing_keys(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|key| !self.vars.contains_key(*key))
            .cloned()
            .collect()
    }
}

/// Remove one layer of matching enclosing quotes, if present on both ends.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
