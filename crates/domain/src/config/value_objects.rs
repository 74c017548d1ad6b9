pub mod marker_set;

pub use marker_set::MarkerSet;
