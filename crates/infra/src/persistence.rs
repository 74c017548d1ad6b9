pub mod file_mover;
pub mod file_reader;

pub use file_mover::FileMover;
pub use file_reader::{FileReader, decode};
