//! Tests for query bounding box parsing and planar bounds operations.

use tcrs_common::{BoundingBox, Bounds, Point, TcrsError};
use test_utils::assert_approx_eq;

// ============================================================================
// from_query_string tests
// ============================================================================

#[test]
fn test_parse_query_bbox_integer() {
    let bbox = BoundingBox::from_query_string("0,0,100,100").unwrap();
    assert_eq!(bbox.west, 0.0);
    assert_eq!(bbox.south, 0.0);
    assert_eq!(bbox.east, 100.0);
    assert_eq!(bbox.north, 100.0);
}

#[test]
fn test_parse_query_bbox_floating() {
    let bbox =
        BoundingBox::from_query_string("-75.72056293487547,45.39079543037812,-75.69309711456299,45.40525984235134")
            .unwrap();
    assert_approx_eq!(bbox.west, -75.72056293487547, 1e-12);
    assert_approx_eq!(bbox.north, 45.40525984235134, 1e-12);
}

#[test]
fn test_parse_query_bbox_scientific_notation() {
    let bbox = BoundingBox::from_query_string("1e-6,2e-6,1e6,2e6").unwrap();
    assert_approx_eq!(bbox.west, 1e-6, 1e-10);
    assert_approx_eq!(bbox.east, 1e6, 0.001);
}

#[test]
fn test_parse_query_bbox_too_few() {
    let result = BoundingBox::from_query_string("123.5,89.1,45");
    assert!(matches!(result, Err(TcrsError::InvalidBbox(_))));
}

#[test]
fn test_parse_query_bbox_too_many() {
    let result = BoundingBox::from_query_string("123,13,135,45,92");
    assert!(matches!(result, Err(TcrsError::InvalidBbox(_))));
}

#[test]
fn test_parse_query_bbox_invalid_number() {
    let result = BoundingBox::from_query_string("abc,0,100,100");
    assert!(matches!(result, Err(TcrsError::InvalidBbox(_))));
}

#[test]
fn test_parse_query_bbox_empty_string() {
    let result = BoundingBox::from_query_string("");
    assert!(matches!(result, Err(TcrsError::InvalidBbox(_))));
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn test_reject_west_greater_than_east() {
    assert!(BoundingBox::new(-75.69, 45.39, -75.72, 45.40).is_err());
}

#[test]
fn test_reject_south_greater_than_north() {
    assert!(BoundingBox::new(-75.72, 45.40, -75.69, 45.39).is_err());
}

#[test]
fn test_reject_zero_width() {
    assert!(BoundingBox::new(-75.72, 45.39, -75.72, 45.40).is_err());
}

#[test]
fn test_reject_zero_height() {
    assert!(BoundingBox::new(-75.72, 45.39, -75.69, 45.39).is_err());
}

#[test]
fn test_reject_nan() {
    assert!(BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
}

#[test]
fn test_reject_infinite() {
    assert!(BoundingBox::new(f64::NEG_INFINITY, 45.0, f64::INFINITY, 46.0).is_err());
    assert!(BoundingBox::new(-76.0, 45.0, -75.0, f64::INFINITY).is_err());
}

#[test]
fn test_parse_query_bbox_infinite() {
    // Rust's float parser accepts "inf"
    let result = BoundingBox::from_query_string("-inf,45,inf,46");
    assert!(matches!(result, Err(TcrsError::InvalidBbox(_))));
}

#[test]
fn test_bbox_dimensions() {
    let bbox = BoundingBox::new(-100.0, 5.0, -50.0, 25.0).unwrap();
    assert_eq!(bbox.width(), 50.0);
    assert_eq!(bbox.height(), 20.0);
}

#[test]
fn test_bbox_as_geographic_bounds() {
    let bbox = BoundingBox::new(-76.0, 45.0, -75.0, 46.0).unwrap();
    let ll = bbox.to_lat_lng_bounds();
    assert_eq!(ll.south_west.lat, 45.0);
    assert_eq!(ll.south_west.lng, -76.0);
    assert_eq!(ll.north_east.lat, 46.0);
    assert_eq!(ll.north_east.lng, -75.0);
}

// ============================================================================
// Bounds tests
// ============================================================================

#[test]
fn test_bounds_centre() {
    let b = Bounds::new(Point::new(2429887.0, 3004190.0), Point::new(2430527.0, 3004670.0));
    assert_eq!(b.centre(), Point::new(2430207.0, 3004430.0));
    assert_eq!(b.width(), 640.0);
    assert_eq!(b.height(), 480.0);
}

#[test]
fn test_bounds_intersects_overlap() {
    let a = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Bounds::new(Point::new(5.0, 5.0), Point::new(15.0, 15.0));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a)); // Symmetric
}

#[test]
fn test_bounds_intersects_no_overlap() {
    let a = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Bounds::new(Point::new(20.0, 20.0), Point::new(30.0, 30.0));
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn test_bounds_intersects_touching_edge() {
    // Touching at an edge counts as intersecting (closed interval)
    let a = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Bounds::new(Point::new(10.0, 0.0), Point::new(20.0, 10.0));
    assert!(a.intersects(&b));
}

#[test]
fn test_bounds_intersects_touching_corner() {
    let a = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Bounds::new(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
    assert!(a.intersects(&b));
}

#[test]
fn test_bounds_intersects_contains() {
    let outer = Bounds::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    let inner = Bounds::new(Point::new(25.0, 25.0), Point::new(75.0, 75.0));
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn test_bounds_disjoint_on_one_axis() {
    // overlapping in x but separated in y
    let a = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Bounds::new(Point::new(5.0, 11.0), Point::new(15.0, 20.0));
    assert!(!a.intersects(&b));
}

#[test]
fn test_bounds_contains_point() {
    let b = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert!(b.contains(&Point::new(5.0, 5.0)));
    assert!(b.contains(&Point::new(10.0, 0.0)));
    assert!(!b.contains(&Point::new(10.1, 5.0)));
}

#[test]
fn test_bounds_extend_is_pure() {
    let b = Bounds::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let grown = b.extend(Point::new(-3.0, 7.0));
    assert_eq!(b.min(), Point::new(0.0, 0.0));
    assert_eq!(grown.min(), Point::new(-3.0, 0.0));
    assert_eq!(grown.max(), Point::new(1.0, 7.0));
}
