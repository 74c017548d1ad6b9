pub mod config;

pub use config::{DEFAULT_INVALID_EXT, DEFAULT_METADATA_EXT, DEFAULT_MIN_FILES, SweepConfig};
