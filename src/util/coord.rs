use geo_types::Point;

/// A geographic position in degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]. No
/// bounds checking happens anywhere in this crate: NaN or out-of-range
/// degrees propagate through the trigonometric functions unchanged and
/// produce NaN or nonsense results rather than errors.
pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

/// `(latitude, longitude)` in degrees.
impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 { self.0 }
    fn lon(&self) -> f64 { self.1 }
}

/// `geo_types` points store longitude in `x` and latitude in `y`.
impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 { self.y() }
    fn lon(&self) -> f64 { self.x() }
}
