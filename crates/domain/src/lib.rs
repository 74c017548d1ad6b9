#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod options;

pub use config::{MarkerSet, SweepConfig};
pub use model::{MetadataFolder, Verdict};
pub use options::DecodeMode;
