//! entlint - A CLI tool to lint HTML documents for malformed entity
//! references and suspicious URLs
//!
//! This library provides the core scanning functionality: a fixed set of
//! pattern rules applied line by line, producing ordered issues and an
//! overall pass/fail verdict.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod output;
pub mod rules;
pub mod scanner;
