//! Common test fixtures for tiled CRS tests.
//!
//! Positions are `(lat, lng)` pairs in decimal degrees; extents are
//! `(south_west, north_east)` position pairs.

/// A position and extent pair.
pub type Extent = ((f64, f64), (f64, f64));

/// Well-known positions.
pub mod position {
    /// Parliament Hill area, Ottawa
    pub const OTTAWA: (f64, f64) = (45.398043, -75.70683);

    /// Somewhere over the Greenland ice sheet
    pub const GREENLAND: (f64, f64) = (75.576217, -41.060996);

    /// The Web Mercator latitude limit
    pub const MERCATOR_LIMIT_LAT: f64 = 85.0511287798;
}

/// Query extents with known tile counts.
pub mod extent {
    use super::Extent;

    /// Covers 4 x 2 = 8 OSMTILE tiles at zoom 15 (about 2.2 km x 1.6 km).
    pub const OTTAWA_OSMTILE_Z15: Extent = (
        (45.39079543037812, -75.7205629348755),
        (45.40525984235134, -75.693097114563),
    );

    /// Covers 3 x 3 = 9 CBMTILE tiles at zoom 17.
    pub const OTTAWA_CBMTILE_Z17: Extent = (
        (45.39257399473906, -75.72876150576825),
        (45.40352437491144, -75.68484627676823),
    );

    /// A Pacific extent far outside Canadian coverage.
    pub const MID_PACIFIC: Extent = ((-10.0, -150.0), (-5.0, -145.0));
}

/// Geographic corners of the whole Web Mercator world.
pub const MERCATOR_WORLD: Extent = (
    (-position::MERCATOR_LIMIT_LAT, -180.0),
    (position::MERCATOR_LIMIT_LAT, 180.0),
);
