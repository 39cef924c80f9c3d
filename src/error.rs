use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{path} not found: create it with your secrets first")]
    MissingVarsFile { path: String },

    #[error("wrangler CLI not found in PATH: install it with `npm install -g wrangler`")]
    WranglerNotFound,

    #[error("`{0} --version` failed: verify your wrangler installation")]
    WranglerBroken(String),

    #[error("missing required secrets: {}", .keys.join(", "))]
    MissingSecrets { keys: Vec<String> },

    #[error("failed to upload {key} to {worker}: {reason}")]
    Upload {
        key: String,
        worker: String,
        reason: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
