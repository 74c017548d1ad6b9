// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_extension;

pub use file_extension::FileExtension;
