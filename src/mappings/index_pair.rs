/// A configured coordinate.
///
/// Only `index` takes part in applying a mapping; `tag` is carried along verbatim for callers
/// that address coordinates with two components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexPair {
    pub index: usize,
    pub tag: usize,
}

impl IndexPair {
    pub fn new(index: usize, tag: usize) -> Self {
        Self { index, tag }
    }
}

impl From<usize> for IndexPair {
    fn from(index: usize) -> Self {
        Self::new(index, 0)
    }
}

impl From<(usize, usize)> for IndexPair {
    fn from((index, tag): (usize, usize)) -> Self {
        Self::new(index, tag)
    }
}
