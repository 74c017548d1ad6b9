pub mod aggregates;
pub mod value_objects;

pub use aggregates::SweepConfig;
pub use value_objects::MarkerSet;
