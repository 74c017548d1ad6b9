pub mod metadata_folder;
pub mod verdict;

pub use metadata_folder::MetadataFolder;
pub use verdict::Verdict;
