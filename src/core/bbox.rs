use crate::core::constants::C;
use crate::core::distance::circumference_km;
use crate::util::error::GeoKeyError;
use serde::{Deserialize, Serialize};

/// A latitude/longitude rectangle in degrees.
///
/// Produced by [`create_bounding_box`] and immutable once returned.
/// `max_lat >= min_lat` always holds; the longitude extents may wrap
/// past ±180 and are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub max_lat: f64,
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
}

/// Builds the bounding box around `(lat, lon)` whose latitude and
/// longitude extents each span `radius_km` from the center.
///
/// The longitude delta widens with the latitude because the circle of
/// constant latitude shrinks toward the poles. Very close to a pole the
/// delta becomes extreme and is returned as-is, with no clamping —
/// callers working near the poles must handle degenerate extents
/// themselves.
///
/// # Errors
///
/// Returns [`GeoKeyError::InvalidRadius`] when `radius_km <= 0`.
///
/// # Example
///
/// ```
/// use geokey_rs::create_bounding_box;
///
/// # fn main() -> Result<(), geokey_rs::GeoKeyError> {
/// let bbox = create_bounding_box(52.5, 13.4, 10.0)?;
/// assert!(bbox.min_lat < 52.5 && 52.5 < bbox.max_lat);
/// assert!(bbox.min_lon < 13.4 && 13.4 < bbox.max_lon);
/// # Ok(())
/// # }
/// ```
pub fn create_bounding_box(lat: f64, lon: f64, radius_km: f64) -> Result<BoundingBox, GeoKeyError> {
    if radius_km <= 0.0 {
        return Err(GeoKeyError::InvalidRadius(format!(
            "radius cannot be 0 or negative: {} km at lat,lon: {},{}",
            radius_km, lat, lon
        )));
    }

    // length of the circle at the given latitude
    let d_lon = 360.0 / (circumference_km(lat) / radius_km);

    // latitude spacing is independent of the longitude
    let d_lat = 360.0 / (C / radius_km);

    Ok(BoundingBox {
        max_lat: lat + d_lat,
        min_lon: lon - d_lon,
        min_lat: lat - d_lat,
        max_lon: lon + d_lon,
    })
}
