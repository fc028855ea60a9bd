pub mod bbox;
pub mod constants;
pub mod distance;
pub mod spatial_key;

pub use bbox::{BoundingBox, create_bounding_box};
pub use constants::{C, R, R_EQ};
#[allow(deprecated)]
pub use distance::cartesian_chord_distance_km;
pub use distance::{
    circumference_km, distance_km, is_date_line_crossover, normalized_dist,
    normalized_dist_between,
};
pub use spatial_key::{bit_position_for, spatial_key_max_distance_km};
