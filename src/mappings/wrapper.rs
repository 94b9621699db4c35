/// Declares a thin mapping type over `Coordinatewise` whose kind, and so its operation, is fixed.
macro_rules! coordinatewise_wrapper {
    ($(#[$meta:meta])* $name:ident, $values_doc:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name($crate::mappings::Coordinatewise);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            ///
            /// # Arguments
            #[doc = concat!("* `values` - ", $values_doc)]
            /// * `coordinates` - The coordinates each value applies to, repeated indices compose.
            ///
            /// # Returns
            #[doc = concat!("A new `", stringify!($name), "` or `MapErr::InvalidArgument` if the lengths differ.")]
            pub fn new<V, C, P>(values: V, coordinates: C) -> $crate::Result<Self>
            where
                V: IntoIterator<Item = f64>,
                C: IntoIterator<Item = P>,
                P: Into<$crate::mappings::IndexPair>,
            {
                $crate::mappings::Coordinatewise::new(
                    $crate::mappings::MappingType::$name,
                    values,
                    coordinates,
                )
                .map(Self)
            }

            pub fn values(&self) -> &[f64] {
                self.0.values()
            }

            pub fn coordinates(&self) -> &[$crate::mappings::IndexPair] {
                self.0.coordinates()
            }

            /// Returns the underlying coordinatewise mapping.
            pub fn as_coordinatewise(&self) -> &$crate::mappings::Coordinatewise {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($crate::mappings::Coordinatewise::empty(
                    $crate::mappings::MappingType::$name,
                ))
            }
        }

        impl From<$name> for $crate::mappings::Coordinatewise {
            fn from(m: $name) -> Self {
                m.0
            }
        }

        impl $crate::mappings::Mapping for $name {
            fn mapping_type(&self) -> $crate::mappings::MappingType {
                self.0.mapping_type()
            }

            fn min_input_dim(&self) -> usize {
                self.0.min_input_dim()
            }

            fn apply(
                &self,
                x: ndarray::ArrayView1<f64>,
            ) -> $crate::Result<ndarray::Array1<f64>> {
                self.0.apply(x)
            }

            fn apply_batch(
                &self,
                x: ndarray::ArrayView2<f64>,
            ) -> $crate::Result<ndarray::Array2<f64>> {
                self.0.apply_batch(x)
            }
        }
    };
}
