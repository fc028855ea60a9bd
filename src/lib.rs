//! # geokey-rs
//!
//! Distance and spatial-indexing primitives on a spherical Earth model:
//! great-circle (haversine) distance, a cheap order-preserving distance
//! surrogate, bounding boxes around a point and radius, and the mapping
//! from a physical distance to the deepest bit level of an interleaved
//! lat/lon spatial key that still covers it.
//!
//! ### Distances
//!
//! Coordinates are `(lat, lon)` tuples or `geo_types::Point`s, in
//! degrees:
//!
//! ```
//! use geokey_rs::{distance_km, normalized_dist_between};
//!
//! let berlin = (52.5, 13.4);
//! let london = (51.5, -0.1);
//!
//! let dist = distance_km(&berlin, &london);
//! assert!(dist > 930.0 && dist < 940.0);
//!
//! // order-preserving surrogate, no asin/sqrt per comparison
//! let closer = normalized_dist_between(&berlin, &(52.0, 10.0));
//! assert!(closer < normalized_dist_between(&berlin, &london));
//! ```
//!
//! ### Bounding boxes
//!
//! ```
//! use geokey_rs::create_bounding_box;
//!
//! # fn main() -> Result<(), geokey_rs::GeoKeyError> {
//! let bbox = create_bounding_box(52.5, 13.4, 10.0)?;
//! assert!(bbox.min_lat < 52.5 && 52.5 < bbox.max_lat);
//! # Ok(())
//! # }
//! ```
//!
//! ### Spatial-key resolution
//!
//! ```
//! use geokey_rs::bit_position_for;
//!
//! // a ~1 km cell sits deep in the key, a ~1000 km cell near the root
//! assert!(bit_position_for(1.0) > bit_position_for(1000.0));
//! assert_eq!(bit_position_for(-1.0), -1); // sentinel, not an error
//! ```
//!
//! None of the distance functions validate their inputs: NaN or
//! out-of-range degrees flow through the trigonometry and come back as
//! NaN or nonsense. Only [`create_bounding_box`] returns a `Result`.

pub mod core;
pub mod util;

pub use crate::core::{
    BoundingBox, C, R, R_EQ, bit_position_for, circumference_km, create_bounding_box, distance_km,
    is_date_line_crossover, normalized_dist, normalized_dist_between, spatial_key_max_distance_km,
};
#[allow(deprecated)]
pub use crate::core::cartesian_chord_distance_km;
pub use crate::util::{Coordinate, GeoKeyError};

pub use geo_types;
