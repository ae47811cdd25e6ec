use super::*;

#[test]
fn can_format_tour_errors() {
    assert_eq!(TourError::Duplicate.to_string(), "point is already in the tour");
    assert_eq!(TourError::NotFound.to_string(), "target point is not in the tour");
    assert_eq!(TourError::OutOfRange { index: 5, size: 3 }.to_string(), "accessing outside the tour: index 5, size 3");
    assert_eq!(TourError::Empty.to_string(), "tour has no points");
}

#[test]
fn can_convert_tour_error_into_generic() {
    let result: GenericResult<()> = Err(TourError::NotFound).map_err(GenericError::from);

    assert_eq!(result, Err(GenericError::from("target point is not in the tour")));
}
