//! Great-circle distance between WGS84 coordinates.

use geo::{Coord, Distance, Haversine, Point};

const METRES_PER_KILOMETRE: f64 = 1000.0;

/// Great-circle distance between two WGS84 coordinates, in kilometres.
///
/// Uses the haversine formula on a mean-radius sphere. The result is
/// non-negative, symmetric, and zero for identical coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridsite_core::distance_km;
///
/// let sydney = Coord { x: 151.2093, y: -33.8688 };
/// assert_eq!(distance_km(sydney, sydney), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion from metres to kilometres"
)]
pub fn distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(from), Point::from(to)) / METRES_PER_KILOMETRE
}
