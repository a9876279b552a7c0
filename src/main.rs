//! entlint - A CLI tool to lint HTML documents for malformed entity
//! references and suspicious URLs
//!
//! The binary wires the scanning library to a small CLI: resolve the target
//! document, stream findings to stdout, and report the verdict through the
//! process exit code.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;
mod config;

/// Main entry point for the entlint CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
