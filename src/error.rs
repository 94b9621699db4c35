use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire mappings crate.
pub type Result<T> = std::result::Result<T, MapErr>;

/// The mappings crate's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapErr {
    /// The configured values and coordinates differ in length.
    InvalidArgument { values: usize, coordinates: usize },
    /// A configured coordinate does not fit in the input vector.
    OutOfRange { index: usize, len: usize },
}

impl Display for MapErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapErr::InvalidArgument {
                values,
                coordinates,
            } => write!(
                f,
                "invalid argument: got {values} values for {coordinates} coordinates"
            ),
            MapErr::OutOfRange { index, len } => write!(
                f,
                "coordinate {index} is out of range for an input of length {len}"
            ),
        }
    }
}

impl Error for MapErr {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MapErr::InvalidArgument {
            values: 2,
            coordinates: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: got 2 values for 3 coordinates"
        );

        let err = MapErr::OutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "coordinate 4 is out of range for an input of length 2"
        );
    }
}
