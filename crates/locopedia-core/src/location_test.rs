use super::*;

fn amsterdam() -> Location {
    Location::new("Amsterdam", 52.3676, 4.9041)
}

#[test]
fn accepts_coordinates_in_range() {
    assert!(amsterdam().is_valid());
    assert!(is_valid(52.3676, 4.9041, "Amsterdam"));
}

#[test]
fn accepts_inclusive_bounds() {
    assert!(is_valid(90.0, 180.0, "north-east corner"));
    assert!(is_valid(-90.0, -180.0, "south-west corner"));
    assert!(is_valid(0.0, 0.0, "null island"));
}

#[test]
fn rejects_latitude_above_90() {
    assert!(!Location::new("Amsterdam", 92.12345, 4.9041).is_valid());
    assert!(!is_valid(92.1, 4.9, "x"));
}

#[test]
fn rejects_latitude_below_minus_90() {
    assert!(!is_valid(-91.0, 4.9, "Invalid"));
}

#[test]
fn rejects_longitude_above_180() {
    assert!(!is_valid(52.37, 181.0, "Invalid"));
}

#[test]
fn rejects_longitude_below_minus_180() {
    assert!(!is_valid(52.37, -181.0, "Invalid"));
}

#[test]
fn rejects_nan_and_infinite_coordinates() {
    assert!(!is_valid(f64::NAN, 4.9, "x"));
    assert!(!is_valid(52.37, f64::NAN, "x"));
    assert!(!is_valid(f64::INFINITY, 4.9, "x"));
    assert!(!is_valid(52.37, f64::NEG_INFINITY, "x"));
}

#[test]
fn name_is_not_constrained() {
    assert!(is_valid(52.37, 4.9, ""));
    assert!(Location::new("   ", 52.37, 4.9).is_valid());
}

#[test]
fn equal_when_content_matches_despite_different_ids() {
    let a = amsterdam();
    let b = amsterdam();
    assert_ne!(a.id, b.id);
    assert_eq!(a, b);
}

#[test]
fn not_equal_when_name_differs() {
    let other = Location::new("Rotterdam", 52.3676, 4.9041);
    assert_ne!(amsterdam(), other);
}

#[test]
fn not_equal_when_coordinates_differ() {
    assert_ne!(amsterdam(), Location::new("Amsterdam", 51.9225, 4.9041));
    assert_ne!(amsterdam(), Location::new("Amsterdam", 52.3676, 4.4792));
}
