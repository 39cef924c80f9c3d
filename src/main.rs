// cf-secret-sync - Sync secrets from .dev.vars to Cloudflare Workers
//
// This is the main entry point for the application.

use anyhow::{Context, Result};
use cf_secret_sync::cloud::wrangler::{check_wrangler_installed, push_secrets};
use cf_secret_sync::config::{Mode, SyncConfig};
use cf_secret_sync::error::SyncError;
use cf_secret_sync::output;
use cf_secret_sync::vars::VarFile;
use clap::Parser;
use std::path::Path;

/// Sync secrets from .dev.vars to Cloudflare Workers
#[derive(Parser, Debug)]
#[command(name = "cf-secret-sync")]
#[command(version)]
#[command(about = "Sync secrets from .dev.vars to Cloudflare Workers", long_about = None)]
struct Cli {
    /// Sync only the preview Worker
    #[arg(long)]
    preview_only: bool,

    /// Sync only the production Worker
    #[arg(long, conflicts_with = "preview_only")]
    production_only: bool,

    /// Show what would be uploaded without calling wrangler
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.preview_only {
            Mode::PreviewOnly
        } else if self.production_only {
            Mode::ProductionOnly
        } else {
            Mode::All
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Step 1: Load and validate configuration
    let config = SyncConfig::load()?;
    config.validate().context("Configuration validation failed")?;

    output::info(&format!(
        "Syncing secrets from {} to Cloudflare Workers...",
        config.vars_file
    ));

    // Step 2: Preconditions - secrets file first, then the upload tool
    let vars_path = Path::new(&config.vars_file);
    if !vars_path.exists() {
        return Err(SyncError::MissingVarsFile {
            path: config.vars_file.clone(),
        }
        .into());
    }

    check_wrangler_installed()?;

    // Step 3: Parse the secrets file
    let vars = VarFile::load(vars_path)?;

    // Step 4: Verify every required key is present before touching anything
    println!("\n📋 Found secrets to sync:");

    for key in &config.required {
        if vars.get(key).is_some() {
            output::item_ok(key);
        } else {
            output::item_missing(key);
        }
    }

    let missing = vars.missing_keys(&config.required);
    if !missing.is_empty() {
        println!(
            "\nPlease add all required secrets to {} before running this tool.",
            config.vars_file
        );
        return Err(SyncError::MissingSecrets { keys: missing }.into());
    }

    // Step 5: Determine deployment targets from the CLI flags
    let workers = config.select_workers(cli.mode());

    println!();
    output::note("🚀 Uploading secrets to Cloudflare Workers...");
    println!("\n📋 Syncing to workers: {}", workers.join(", "));

    if cli.dry_run {
        output::warn("Dry run mode - no secrets will be uploaded");
        return Ok(());
    }

    // Step 6: Sequential upload loop, fail-fast
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(push_secrets(&vars, &config.required, &workers))?;

    println!();
    output::success("All secrets successfully synced to Cloudflare Workers!");
    output::note("\n📝 Note: Secrets are now available in your deployed Workers.");
    println!("You can verify with: wrangler secret list");

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!();
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
