/// Error type for geokey-rs operations.
///
/// Only bounding-box construction can fail; the spatial-key lookup
/// signals bad input through its sentinel return value instead, and the
/// distance functions perform no validation at all.
#[derive(Debug, PartialEq)]
pub enum GeoKeyError {
    /// The bounding-box radius is zero or negative.
    InvalidRadius(String),
}

impl std::fmt::Display for GeoKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoKeyError::InvalidRadius(msg) => write!(f, "Invalid radius: {}", msg),
        }
    }
}

impl std::error::Error for GeoKeyError {}
