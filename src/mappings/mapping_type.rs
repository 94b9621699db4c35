use std::fmt::{self, Display};

use super::Operation;

/// Identifies the concrete kind of a mapping, for callers that dispatch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingType {
    Scale,
    Shift,
}

impl MappingType {
    /// Returns the operation every mapping of this kind is bound to.
    pub fn operation(&self) -> Operation {
        match self {
            MappingType::Scale => Operation::Multiply,
            MappingType::Shift => Operation::Add,
        }
    }
}

impl Display for MappingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MappingType::Scale => "scale",
            MappingType::Shift => "shift",
        };

        write!(f, "{s}")
    }
}
