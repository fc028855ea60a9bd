/// Mean radius of the earth in kilometers
pub const R: f64 = 6371.0;

/// Radius of the earth at the equator in kilometers
pub const R_EQ: f64 = 6378.137;

/// Circumference of the earth in kilometers
pub const C: f64 = 2.0 * std::f64::consts::PI * R;

/// Scale factor turning kilometers into spatial-key integers.
///
/// 2^16 = 65536 km is the first power of two above `C`, so the half
/// circumference scaled by this factor still fits an `i32`.
pub(crate) const DIST_PRECISION: f64 = 65536.0;
