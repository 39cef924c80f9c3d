//! Cloudflare integration via the `wrangler` CLI.

pub mod wrangler;
