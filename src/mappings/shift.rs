coordinatewise_wrapper!(
    /// Adds per-coordinate offsets to selected coordinates of a vector.
    Shift,
    "The offset for each coordinate."
);

#[cfg(test)]
mod test {
    use ndarray::array;

    use super::*;
    use crate::{IndexPair, MapErr, Mapping, MappingType, Operation};

    #[test]
    fn test_default() {
        let shift = Shift::default();
        let x = array![4., 5.];

        assert_eq!(shift.mapping_type(), MappingType::Shift);
        assert_eq!(shift.min_input_dim(), 0);
        assert_eq!(shift.apply(x.view()).unwrap(), x);
    }

    #[test]
    fn test_shifts_selected_coordinates() {
        let shift = Shift::new([-1.], [1usize]).unwrap();
        let y = shift.apply(array![5., 5.].view()).unwrap();

        assert_eq!(y, array![5., 4.]);
        assert_eq!(shift.as_coordinatewise().operation(), Operation::Add);
    }

    #[test]
    fn test_shift_by_zero_is_identity() {
        let shift = Shift::new([0.], [0usize]).unwrap();
        let x = array![42.];

        assert_eq!(shift.apply(x.view()).unwrap(), x);
    }

    #[test]
    fn test_keeps_opaque_tag() {
        let shift = Shift::new([1.5], [(0usize, 11usize)]).unwrap();

        assert_eq!(shift.coordinates(), &[IndexPair::new(0, 11)]);
        assert_eq!(shift.values(), &[1.5]);
    }

    #[test]
    fn test_out_of_range() {
        let shift = Shift::new([1.], [2usize]).unwrap();
        assert_eq!(
            shift.apply(array![0., 0.].view()).unwrap_err(),
            MapErr::OutOfRange { index: 2, len: 2 }
        );
    }
}
