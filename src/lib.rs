//! fixlet - Whole-file CRUD over a CSV-backed list of fixlet records
//!
//! The backing file is the only source of truth. Every mutation loads the
//! full collection, changes it in memory, and rewrites the whole file.

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

pub mod cli;
pub mod codec;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod output;
pub mod storage;

pub use error::{Error, Result};
pub use models::Fixlet;
