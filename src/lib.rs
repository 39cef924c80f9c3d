//! cf-secret-sync - push local `.dev.vars` secrets to Cloudflare Workers.
//!
//! This library backs the `cf-secret-sync` binary: it parses the local
//! secrets file, verifies that the required keys are present, and uploads
//! each value to the configured Workers through the `wrangler` CLI.

pub mod cloud;
pub mod config;
pub mod error;
pub mod output;
pub mod vars;
