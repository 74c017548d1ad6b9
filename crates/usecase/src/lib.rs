//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: walks the folders of a root and renames untagged metadata files
//! - [`dto`]: the run summary handed back to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::SweepSummary;
pub use orchestrator::SweepInvalidMetadata;
