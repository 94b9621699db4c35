use std::fmt::{self, Display};

/// The scalar binary function a coordinatewise mapping combines each configured coordinate
/// with its value through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Multiply,
    Add,
}
use Operation::*;

impl Operation {
    /// Combines an input coordinate with a configured value.
    ///
    /// # Arguments
    /// * `x` - The current value of the coordinate.
    /// * `value` - The configured value paired with that coordinate.
    ///
    /// # Returns
    /// The new value of the coordinate.
    pub fn f(&self, x: f64, value: f64) -> f64 {
        match self {
            Multiply => x * value,
            Add => x + value,
        }
    }

    /// Returns the value for which `f` leaves every input untouched.
    pub fn neutral(&self) -> f64 {
        match self {
            Multiply => 1.,
            Add => 0.,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Multiply => "multiply",
            Add => "add",
        };

        write!(f, "{s}")
    }
}
