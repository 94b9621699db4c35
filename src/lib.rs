//! Coordinatewise transforms: per-axis scaling and shifting of vectors.

pub mod error;
pub mod mappings;

pub use error::{MapErr, Result};
pub use mappings::{Coordinatewise, IndexPair, Mapping, MappingType, Operation, Scale, Shift};
