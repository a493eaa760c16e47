//! A single tiled CRS shared read-only across many threads.

use rayon::prelude::*;
use std::sync::Arc;
use tcrs_common::{Bounds, Point};
use tiled_crs::{CrsDefinition, ServiceBounds, TiledCrs};

#[test]
fn test_shared_instance_gives_identical_pages() {
    let crs = Arc::new(TiledCrs::new(&CrsDefinition::osmtile(), 16).unwrap());
    let service = Arc::new(ServiceBounds::new(0, 18, crs.native_bounds(), crs.clone()).unwrap());
    let query = Bounds::new(Point::new(10_000.0, 20_000.0), Point::new(12_000.0, 21_500.0));

    let expected: Vec<_> = (0..8u64).map(|i| crs.page(&query, 10, i * 16)).collect();

    let results: Vec<_> = (0..256u64)
        .into_par_iter()
        .map(|i| {
            let page_index = i % 8;
            assert!(service.intersects(Some(10), Some(&query)));
            (page_index, crs.page(&query, 10, page_index * 16))
        })
        .collect();

    for (page_index, page) in results {
        assert_eq!(page, expected[page_index as usize]);
    }
}
