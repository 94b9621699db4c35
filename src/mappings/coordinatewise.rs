use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1};

use super::{IndexPair, Mapping, MappingType, Operation};
use crate::{MapErr, Result};

/// Combines selected coordinates of a vector with configured values through a fixed
/// operation, passing every other coordinate through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinatewise {
    kind: MappingType,
    op: Operation,
    values: Vec<f64>,
    coordinates: Vec<IndexPair>,
}

impl Coordinatewise {
    /// Creates a mapping with no configured coordinates, applying it is the identity.
    pub fn empty(kind: MappingType) -> Self {
        Self {
            kind,
            op: kind.operation(),
            values: Vec::new(),
            coordinates: Vec::new(),
        }
    }

    /// Creates a new `Coordinatewise`.
    ///
    /// # Arguments
    /// * `kind` - The kind of mapping, which also fixes its operation.
    /// * `values` - One value per configured coordinate.
    /// * `coordinates` - The coordinates each value applies to, in application order. A repeated
    ///   index composes: every occurrence is applied on top of the previous result.
    ///
    /// # Returns
    /// A new `Coordinatewise` or `MapErr::InvalidArgument` if the lengths differ.
    pub fn new<V, C, P>(kind: MappingType, values: V, coordinates: C) -> Result<Self>
    where
        V: IntoIterator<Item = f64>,
        C: IntoIterator<Item = P>,
        P: Into<IndexPair>,
    {
        let values: Vec<f64> = values.into_iter().collect();
        let coordinates: Vec<IndexPair> = coordinates.into_iter().map(Into::into).collect();

        if values.len() != coordinates.len() {
            debug!(
                kind:% = kind,
                values = values.len(),
                coordinates = coordinates.len();
                "rejected mapping configuration"
            );

            return Err(MapErr::InvalidArgument {
                values: values.len(),
                coordinates: coordinates.len(),
            });
        }

        debug!(kind:% = kind, entries = values.len(); "built coordinatewise mapping");

        Ok(Self {
            kind,
            op: kind.operation(),
            values,
            coordinates,
        })
    }

    /// Returns the operation this mapping was bound to.
    pub fn operation(&self) -> Operation {
        self.op
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn coordinates(&self) -> &[IndexPair] {
        &self.coordinates
    }

    /// Returns the amount of configured coordinates.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fails on the first configured coordinate that does not fit in an input of length `len`.
    fn check_bounds(&self, len: usize) -> Result<()> {
        let Some(c) = self.coordinates.iter().find(|c| c.index >= len) else {
            return Ok(());
        };

        debug!(kind:% = self.kind, index = c.index, len = len; "coordinate out of range");
        Err(MapErr::OutOfRange {
            index: c.index,
            len,
        })
    }

    /// Applies the configuration in order, bounds must have been checked already.
    fn apply_in_place(&self, mut x: ArrayViewMut1<f64>) {
        for (c, &value) in self.coordinates.iter().zip(&self.values) {
            x[c.index] = self.op.f(x[c.index], value);
        }
    }
}

impl Mapping for Coordinatewise {
    fn mapping_type(&self) -> MappingType {
        self.kind
    }

    /// Saturates at `usize::MAX` when an index no input can hold is configured.
    fn min_input_dim(&self) -> usize {
        self.coordinates
            .iter()
            .map(|c| c.index.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    fn apply(&self, x: ArrayView1<f64>) -> Result<Array1<f64>> {
        self.check_bounds(x.len())?;

        let mut y = x.to_owned();
        self.apply_in_place(y.view_mut());
        Ok(y)
    }

    fn apply_batch(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_bounds(x.ncols())?;

        let mut y = x.to_owned();
        for row in y.rows_mut() {
            self.apply_in_place(row);
        }

        Ok(y)
    }
}
