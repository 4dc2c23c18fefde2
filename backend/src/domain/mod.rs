// Domain layer module
pub mod aggregates;
pub mod base;
pub mod value_objects;

pub use aggregates::*;
pub use base::*;
pub use value_objects::*;
