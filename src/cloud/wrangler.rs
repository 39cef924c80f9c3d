//! Secret upload through the wrangler CLI (NOT the Cloudflare API).
//!
//! # Security
//!
//! - **Uses wrangler CLI**: Leverages existing authentication
//! - **NO secret logging**: Secret values are never printed
//! - **No shell involved**: wrangler is spawned directly with an argv;
//!   the value is written to its stdin, so it is never interpreted by a
//!   shell or visible in a process listing
//!
//! # Wrangler Commands Used
//!
//! - `wrangler --version` - Installation probe
//! - `wrangler secret put <key> --name <worker>` - Upload one secret

use crate::error::{Result, SyncError};
use crate::output;
use crate::vars::VarFile;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Overrides the wrangler binary name. Integration tests point this at a
/// stub script.
pub const WRANGLER_ENV: &str = "CF_SECRET_SYNC_WRANGLER";

/// Name of the wrangler binary to invoke.
pub fn wrangler_bin() -> String {
    std::env::var(WRANGLER_ENV).unwrap_or_else(|_| "wrangler".to_string())
}

/// Check that wrangler is on PATH and answers `--version`.
///
/// Distinguishes a missing binary from one that is present but broken.
pub fn check_wrangler_installed() -> Result<()> {
    let bin = wrangler_bin();

    if which::which(&bin).is_err() {
        return Err(SyncError::WranglerNotFound);
    }

    let status = std::process::Command::new(&bin)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        _ => Err(SyncError::WranglerBroken(bin)),
    }
}

/// Upload one secret value to one Worker.
///
/// Runs `wrangler secret put <key> --name <worker>` with the value piped
/// via stdin. The value never appears in the argv.
async fn put_secret(key: &str, value: &str, worker: &str) -> Result<()> {
    let upload_err = |reason: String| SyncError::Upload {
        key: key.to_string(),
        worker: worker.to_string(),
        reason,
    };

    let mut child = Command::new(wrangler_bin())
        .arg("secret")
        .arg("put")
        .arg(key)
        .arg("--name")
        .arg(worker)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| upload_err(format!("failed to spawn wrangler: {e}")))?;

    // Write the value to stdin; dropping the handle closes the pipe
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(value.as_bytes())
            .await
            .map_err(|e| upload_err(format!("failed to write value to wrangler stdin: {e}")))?;
        stdin
            .write_all(b"\n")
            .await
            .map_err(|e| upload_err(format!("failed to write value to wrangler stdin: {e}")))?;
    }

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| upload_err(format!("failed to wait for wrangler: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        return Err(upload_err(if stderr.is_empty() {
            format!("wrangler exited with {}", output.status)
        } else {
            stderr.to_string()
        }));
    }

    Ok(())
}

/// Upload every required secret to every selected Worker.
///
/// Strictly sequential: Workers in the given order, keys in required-list
/// order within each Worker. The first failed upload aborts the run;
/// secrets already uploaded stay uploaded.
pub async fn push_secrets(vars: &VarFile, required: &[String], workers: &[String]) -> Result<()> {
    for worker in workers {
        output::worker_header(worker);

        for key in required {
            // Presence was verified before the loop started
            let value = vars.get(key).ok_or_else(|| SyncError::MissingSecrets {
                keys: vec![key.clone()],
            })?;

            output::step(&format!("Uploading {key}"));

            match put_secret(key, value, worker).await {
                Ok(()) => output::step_ok(),
                Err(e) => {
                    output::step_fail();
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
