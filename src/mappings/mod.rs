#[macro_use]
mod wrapper;

mod coordinatewise;
mod index_pair;
mod mapping;
mod mapping_type;
mod operation;
mod scale;
mod shift;

pub use coordinatewise::Coordinatewise;
pub use index_pair::IndexPair;
pub use mapping::Mapping;
pub use mapping_type::MappingType;
pub use operation::Operation;
pub use scale::Scale;
pub use shift::Shift;
