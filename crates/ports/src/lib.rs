//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory listing, file dates, text reads and renames
//! - [`reporting`]: operator-facing notifications for renames and failures
//!
//! These ports keep the sweep use case independent of the real filesystem
//! and of the console.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod reporting;
