use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::MappingType;
use crate::Result;

/// A transformation from one vector to another.
pub trait Mapping {
    /// Returns the tag identifying the concrete kind of this mapping.
    fn mapping_type(&self) -> MappingType;

    /// Returns the smallest input length this mapping can be applied to.
    fn min_input_dim(&self) -> usize;

    /// Applies the mapping to a single vector.
    ///
    /// # Arguments
    /// * `x` - The input vector, left untouched.
    ///
    /// # Returns
    /// The transformed vector or an error if the input is too short.
    fn apply(&self, x: ArrayView1<f64>) -> Result<Array1<f64>>;

    /// Applies the mapping to every row of a batch.
    ///
    /// # Arguments
    /// * `x` - The input batch, one vector per row.
    ///
    /// # Returns
    /// The transformed batch or an error if the rows are too short.
    fn apply_batch(&self, x: ArrayView2<f64>) -> Result<Array2<f64>>;
}
