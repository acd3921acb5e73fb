use super::*;

#[test]
fn magnitude_clamps_to_bounds() {
    let mut form = QueryForm::default();
    form.set_magnitude(12.0);
    assert!((form.magnitude - 9.5).abs() < f64::EPSILON);
    form.set_magnitude(1.2);
    assert!((form.magnitude - 3.0).abs() < f64::EPSILON);
    form.set_magnitude(7.3);
    assert!((form.magnitude - 7.3).abs() < f64::EPSILON);
}

#[test]
fn magnitude_ignores_non_finite() {
    let mut form = QueryForm::default();
    form.set_magnitude(f64::NAN);
    assert!((form.magnitude - DEFAULT_MAGNITUDE).abs() < f64::EPSILON);
    form.set_magnitude_text("abc");
    assert!((form.magnitude - DEFAULT_MAGNITUDE).abs() < f64::EPSILON);
}

#[test]
fn magnitude_text_parses_then_clamps() {
    let mut form = QueryForm::default();
    form.set_magnitude_text(" 10.1 ");
    assert!((form.magnitude - 9.5).abs() < f64::EPSILON);
}

#[test]
fn depth_clamps_to_bounds() {
    let mut form = QueryForm::default();
    form.set_depth(-5.0);
    assert!(form.depth.abs() < f64::EPSILON);
    form.set_depth_text("9000");
    assert!((form.depth - DEPTH_MAX_KM).abs() < f64::EPSILON);
}

#[test]
fn set_coordinate_formats_four_decimals() {
    let mut form = QueryForm::default();
    form.set_coordinate(Coordinate::new(37.0, 135.0));
    assert_eq!(form.latitude, "37.0000");
    assert_eq!(form.longitude, "135.0000");
    form.set_coordinate(Coordinate::new(-12.345_678, 129.123_456));
    assert_eq!(form.latitude, "-12.3457");
    assert_eq!(form.longitude, "129.1235");
}

#[test]
fn coordinate_missing_when_blank() {
    let form = QueryForm::default();
    assert_eq!(form.coordinate(), Err(LocationError::Missing));
    let half = QueryForm { latitude: "37.0".to_owned(), ..QueryForm::default() };
    assert_eq!(half.coordinate(), Err(LocationError::Missing));
}

#[test]
fn coordinate_accepts_manual_entry() {
    let form = QueryForm { latitude: " 36.5 ".to_owned(), longitude: "129.25".to_owned(), ..QueryForm::default() };
    assert_eq!(form.coordinate(), Ok(Coordinate::new(36.5, 129.25)));
}

#[test]
fn coordinate_rejects_out_of_range() {
    let lat = QueryForm { latitude: "91".to_owned(), longitude: "0".to_owned(), ..QueryForm::default() };
    assert_eq!(lat.coordinate(), Err(LocationError::InvalidLatitude));
    let lng = QueryForm { latitude: "0".to_owned(), longitude: "east".to_owned(), ..QueryForm::default() };
    assert_eq!(lng.coordinate(), Err(LocationError::InvalidLongitude));
}

#[test]
fn missing_location_message() {
    assert_eq!(LocationError::Missing.to_string(), "Select a location on the map first.");
}

#[test]
fn history_date_prefers_start_date() {
    let mut form = QueryForm::default();
    assert_eq!(form.history_date("2025-03-01"), "2025-03-01");
    form.start_date = "2024-12-31".to_owned();
    assert_eq!(form.history_date("2025-03-01"), "2024-12-31");
}
