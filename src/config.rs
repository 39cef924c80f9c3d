// cf-secret-sync configuration module
//
// The defaults below are the real configuration; an optional
// cf-secret-sync.yaml in the working directory can override them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional override file, looked up in the current directory.
pub const CONFIG_FILE: &str = "cf-secret-sync.yaml";

/// Which Workers to sync, selected by the CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Both Workers, production first.
    All,
    ProductionOnly,
    PreviewOnly,
}

/// Static sync configuration.
///
/// The order of `required` is meaningful: it is the upload order within
/// each Worker.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Path to the local secrets file, relative to the working directory
    pub vars_file: String,

    /// Name of the production Worker
    pub production_worker: String,

    /// Name of the preview Worker
    pub preview_worker: String,

    /// Secrets (and Worker-env config values) that must all be present
    pub required: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            vars_file: ".dev.vars".to_string(),
            production_worker: "next-cf-app".to_string(),
            preview_worker: "next-cf-app-preview".to_string(),
            required: vec![
                "BETTER_AUTH_SECRET".to_string(),
                "GOOGLE_CLIENT_ID".to_string(),
                "GOOGLE_CLIENT_SECRET".to_string(),
                // Not a secret, but the deployed Worker needs it in its env
                "CLOUDFLARE_R2_URL".to_string(),
            ],
        }
    }
}

impl SyncConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: SyncConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Load `cf-secret-sync.yaml` from the current directory if it exists,
    /// otherwise use the built-in defaults.
    pub fn load() -> Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.vars_file.is_empty() {
            anyhow::bail!("vars_file cannot be empty");
        }

        if self.production_worker.is_empty() || self.preview_worker.is_empty() {
            anyhow::bail!("Worker names cannot be empty");
        }

        if self.required.is_empty() {
            anyhow::bail!("At least one required secret must be configured");
        }

        for key in &self.required {
            if key.is_empty() {
                anyhow::bail!("Required secret names cannot be empty");
            }
            if key.contains('=') {
                anyhow::bail!("Invalid secret name '{}': must not contain '='", key);
            }
        }

        Ok(())
    }

    /// Deployment targets for this run, in upload order.
    pub fn select_workers(&self, mode: Mode) -> Vec<String> {
        match mode {
            Mode::All => vec![
                self.production_worker.clone(),
                self.preview_worker.clone(),
            ],
            Mode::ProductionOnly => vec![self.production_worker.clone()],
            Mode::PreviewOnly => vec![self.preview_worker.clone()],
        }
    }
}
