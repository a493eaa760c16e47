//! Tests for service zoom-range validation and coverage intersection.

use std::sync::Arc;
use tcrs_common::{Bounds, LatLng, LatLngBounds, Point, TcrsError};
use test_utils::extent;
use tiled_crs::{CrsDefinition, ServiceBounds, TiledCrs};

fn cbmtile() -> Arc<TiledCrs> {
    Arc::new(TiledCrs::new(&CrsDefinition::cbmtile(), 100).unwrap())
}

fn osmtile() -> Arc<TiledCrs> {
    Arc::new(TiledCrs::new(&CrsDefinition::osmtile(), 100).unwrap())
}

fn pixel_query(crs: &TiledCrs, e: test_utils::Extent, zoom: u32) -> Bounds {
    let ((s, w), (n, east)) = e;
    crs.pixel_bounds_for_lat_lng(&LatLngBounds::new(LatLng::new(s, w), LatLng::new(n, east)), zoom)
        .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_cbmtile_rejects_max_zoom_beyond_scale_table() {
    let crs = cbmtile();
    let err = ServiceBounds::new(7, 26, crs.native_bounds(), crs.clone()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_rejects_too_many_levels() {
    let crs = cbmtile();
    let err = ServiceBounds::new(0, 26, crs.native_bounds(), crs.clone()).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("27 levels"));
}

#[test]
fn test_rejects_negative_and_inverted_ranges() {
    let crs = osmtile();
    assert!(ServiceBounds::new(-1, 5, crs.native_bounds(), crs.clone()).is_err());
    assert!(ServiceBounds::new(6, 5, crs.native_bounds(), crs.clone()).is_err());
}

#[test]
fn test_osmtile_full_range() {
    let crs = osmtile();
    let service = ServiceBounds::new(0, 18, crs.native_bounds(), crs.clone()).unwrap();
    assert_eq!(service.min_zoom(), 0);
    assert_eq!(service.max_zoom(), 18);
    assert!(Arc::ptr_eq(service.tiled_crs(), &crs));
}

#[test]
fn test_single_level_range() {
    let crs = cbmtile();
    let service = ServiceBounds::new(9, 9, crs.native_bounds(), crs.clone()).unwrap();
    assert!(service.contains_zoom(9));
    assert!(!service.contains_zoom(8));
    assert!(!service.contains_zoom(10));
}

#[test]
fn test_custom_level_limit() {
    let crs = osmtile();
    assert!(ServiceBounds::with_level_limit(0, 4, crs.native_bounds(), crs.clone(), 5).is_ok());
    assert!(ServiceBounds::with_level_limit(0, 5, crs.native_bounds(), crs.clone(), 5).is_err());
}

// ============================================================================
// Pixel bounds
// ============================================================================

#[test]
fn test_pixel_bounds_in_range() {
    let crs = cbmtile();
    let service = ServiceBounds::new(0, 17, crs.native_bounds(), crs.clone()).unwrap();
    let b = service.pixel_bounds(7).unwrap();
    assert_eq!(b, crs.pixel_bounds(&crs.native_bounds(), 7).unwrap());
}

#[test]
fn test_pixel_bounds_out_of_range() {
    let crs = cbmtile();
    let service = ServiceBounds::new(3, 10, crs.native_bounds(), crs.clone()).unwrap();
    assert_eq!(
        service.pixel_bounds(2).unwrap_err(),
        TcrsError::ZoomOutOfRange {
            zoom: 2,
            min: 3,
            max: 10
        }
    );
    assert!(service.pixel_bounds(11).is_err());
}

// ============================================================================
// Intersection
// ============================================================================

#[test]
fn test_ottawa_intersects_canada() {
    let crs = cbmtile();
    let service = ServiceBounds::new(0, 17, crs.native_bounds(), crs.clone()).unwrap();
    let query = pixel_query(&crs, extent::OTTAWA_CBMTILE_Z17, 17);
    assert!(service.intersects(Some(17), Some(&query)));
}

#[test]
fn test_pacific_misses_small_coverage() {
    let crs = osmtile();
    // Coverage around Ottawa only, in projected metres
    let coverage = Bounds::new(
        crs.project(LatLng::new(44.0, -77.0)).unwrap(),
        crs.project(LatLng::new(46.0, -74.0)).unwrap(),
    );
    let service = ServiceBounds::new(2, 16, coverage, crs.clone()).unwrap();
    let query = pixel_query(&crs, extent::MID_PACIFIC, 8);
    assert!(!service.intersects(Some(8), Some(&query)));

    let query = pixel_query(&crs, extent::OTTAWA_OSMTILE_Z15, 15);
    assert!(service.intersects(Some(15), Some(&query)));
}

#[test]
fn test_intersects_absent_or_out_of_range() {
    let crs = osmtile();
    let service = ServiceBounds::new(2, 10, crs.native_bounds(), crs.clone()).unwrap();
    let query = Bounds::new(Point::new(0.0, 0.0), Point::new(256.0, 256.0));
    assert!(!service.intersects(None, Some(&query)));
    assert!(!service.intersects(Some(3), None));
    assert!(!service.intersects(Some(1), Some(&query)));
    assert!(!service.intersects(Some(11), Some(&query)));
    assert!(service.intersects(Some(3), Some(&query)));
}
