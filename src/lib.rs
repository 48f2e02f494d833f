//! masthead - An in-memory model of authors, magazines, and the articles
//! that connect them
//!
//! This library provides a small relationship graph over three entity kinds:
//! authors write articles, magazines publish them, and each article binds
//! exactly one author to exactly one magazine. All entities live in a
//! [`catalog::Catalog`] arena and refer to each other through typed ids,
//! so the bidirectional article lists never form an ownership cycle.

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

pub mod catalog;
pub mod models;
pub mod output;
