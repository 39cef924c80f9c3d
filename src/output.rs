//! Stateless styled terminal output.
//!
//! Every helper takes a message and emits one styled line; there is no
//! module-level state. Errors go to stderr, everything else to stdout.
//! `console` handles color detection, so piped output stays plain.

use console::style;
use std::io::{self, Write};

/// Print a green success line.
///
/// Example: `✅ All secrets successfully synced!`
pub fn success(msg: &str) {
    println!("{}", style(format!("✅ {msg}")).green());
}

/// Print a red error line to stderr.
pub fn error(msg: &str) {
    eprintln!("{}", style(format!("❌ {msg}")).red());
}

/// Print a yellow warning line.
pub fn warn(msg: &str) {
    println!("{}", style(format!("⚠️  {msg}")).yellow());
}

/// Print a yellow status line.
///
/// Example: `🔐 Syncing secrets from .dev.vars...`
pub fn info(msg: &str) {
    println!("{}", style(format!("🔐 {msg}")).yellow());
}

/// Print a yellow note line.
pub fn note(msg: &str) {
    println!("{}", style(msg).yellow());
}

/// Print an indented green checklist item.
pub fn item_ok(name: &str) {
    println!("  {}", style(format!("✅ {name}")).green());
}

/// Print an indented red checklist item for a missing key.
pub fn item_missing(name: &str) {
    println!("  {}", style(format!("❌ {name} (missing)")).red());
}

/// Print the per-Worker upload header.
pub fn worker_header(name: &str) {
    println!("\n🎯 Uploading secrets to: {}", style(name).yellow());
}

/// Start an in-progress line, without a trailing newline.
///
/// Followed by [`step_ok`] or [`step_fail`] once the upload resolves.
pub fn step(msg: &str) {
    print!("  {msg}... ");
    let _ = io::stdout().flush();
}

/// Finish an in-progress line with a green check.
pub fn step_ok() {
    println!("{}", style("✅").green());
}

/// Finish an in-progress line with a red cross.
pub fn step_fail() {
    println!("{}", style("❌").red());
}
