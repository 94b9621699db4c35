coordinatewise_wrapper!(
    /// Multiplies selected coordinates of a vector by per-coordinate factors.
    Scale,
    "The factor for each coordinate."
);
