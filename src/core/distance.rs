use crate::core::constants::R;
use crate::util::coord::Coordinate;

/// Great-circle distance between two points in kilometers, using the
/// haversine formula:
///
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2), d = R·2·asin(√a)
///
/// Symmetric up to floating-point rounding, zero for coincident points.
/// Inputs are degrees; NaN inputs propagate to a NaN result.
pub fn distance_km<P: Coordinate>(from: &P, to: &P) -> f64 {
    R * 2.0 * normalized_dist_between(from, to).sqrt().asin()
}

/// Monotonic surrogate for a distance already measured in kilometers:
/// sin²(d / 2R), the pre-arcsine term of the haversine formula.
///
/// Strictly increasing for d in [0, πR] (half circumference), so
/// surrogate values can be compared directly without the asin/sqrt of
/// the full formula. Beyond πR the sine folds back and ordering is lost;
/// callers must stay inside that domain.
pub fn normalized_dist(dist_km: f64) -> f64 {
    let tmp = (dist_km / 2.0 / R).sin();
    tmp * tmp
}

/// One-pass haversine "a" term for a pair of points, consistent with
/// `normalized_dist(distance_km(from, to))` but without computing the
/// intermediate distance. Preferred when only relative ordering matters.
pub fn normalized_dist_between<P: Coordinate>(from: &P, to: &P) -> f64 {
    let sin_lat = ((to.lat() - from.lat()).to_radians() / 2.0).sin();
    let sin_lon = ((to.lon() - from.lon()).to_radians() / 2.0).sin();
    sin_lat * sin_lat
        + from.lat().to_radians().cos() * to.lat().to_radians().cos() * sin_lon * sin_lon
}

/// Straight-line chord through the sphere between two points, in
/// kilometers: both points go to unit-sphere Cartesian coordinates and
/// the 3D Euclidean distance is scaled by `R`.
#[deprecated(note = "slower than `distance_km`; kept for behavioral parity")]
pub fn cartesian_chord_distance_km<P: Coordinate>(from: &P, to: &P) -> f64 {
    let (lat1, lon1) = (from.lat().to_radians(), from.lon().to_radians());
    let (lat2, lon2) = (to.lat().to_radians(), to.lon().to_radians());

    let x1 = lat1.cos() * lon1.cos();
    let y1 = lat1.cos() * lon1.sin();
    let z1 = lat1.sin();

    let x2 = lat2.cos() * lon2.cos();
    let y2 = lat2.cos() * lon2.sin();
    let z2 = lat2.sin();

    let (dx, dy, dz) = (x1 - x2, y1 - y2, z1 - z2);
    R * (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Length in kilometers of the circle of constant latitude. Equals the
/// full circumference `C` at the equator and approaches zero toward the
/// poles.
pub fn circumference_km(lat: f64) -> f64 {
    2.0 * std::f64::consts::PI * R * lat.to_radians().cos()
}

/// True when the longitudinal gap between two points is wider than 180
/// degrees.
///
/// Pure threshold check on the raw inputs. Longitudes already wrapped
/// outside [-180, 180] must be normalized by the caller first.
pub fn is_date_line_crossover(lon1: f64, lon2: f64) -> bool {
    (lon1 - lon2).abs() > 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::C;
    use geo::{Distance, Haversine};
    use geo_types::Point;

    #[test]
    fn test_symmetry() {
        let pairs = [
            ((52.5, 13.4), (51.5, -0.1)),
            ((0.0, 0.0), (0.0, 1.0)),
            ((-33.9, 151.2), (35.7, 139.7)),
            ((89.0, 0.0), (-89.0, 180.0)),
        ];
        for (a, b) in pairs {
            assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_identity() {
        for p in [(0.0, 0.0), (52.5, 13.4), (-90.0, 0.0), (45.0, -120.0)] {
            assert_eq!(distance_km(&p, &p), 0.0);
        }
    }

    #[test]
    fn test_one_degree_on_equator() {
        let d = distance_km(&(0.0, 0.0), &(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.5);
    }

    #[test]
    fn test_berlin_to_london() {
        let d = distance_km(&(52.5, 13.4), &(51.5, -0.1));
        assert!(d > 930.0 && d < 940.0, "got {}", d);
    }

    #[test]
    fn test_matches_geo_haversine_reference() {
        let berlin = Point::new(13.4, 52.5);
        let london = Point::new(-0.1, 51.5);

        let ours = distance_km(&berlin, &london);
        let reference = Haversine.distance(berlin, london) / 1000.0;

        // geo uses the mean radius in meters (6371008.8), we use 6371 km
        assert!((ours - reference).abs() / reference < 1e-4);
    }

    #[test]
    fn test_point_and_tuple_agree() {
        let from_tuple = distance_km(&(52.5, 13.4), &(51.5, -0.1));
        let from_point = distance_km(&Point::new(13.4, 52.5), &Point::new(-0.1, 51.5));
        assert_eq!(from_tuple, from_point);
    }

    #[test]
    fn test_normalized_consistency() {
        let pairs = [
            ((52.5, 13.4), (51.5, -0.1)),
            ((0.0, 0.0), (10.0, 10.0)),
            ((-45.0, 170.0), (-44.0, -170.0)),
        ];
        for (a, b) in pairs {
            let direct = normalized_dist_between(&a, &b);
            let via_distance = normalized_dist(distance_km(&a, &b));
            assert!((direct - via_distance).abs() < 1e-12);
        }
    }

    #[test]
    fn test_monotone_along_meridian() {
        let origin = (0.0, 0.0);
        let mut last_dist = -1.0;
        let mut last_norm = -1.0;
        for step in 1..=90 {
            let target = (f64::from(step), 0.0);
            let d = distance_km(&origin, &target);
            let n = normalized_dist_between(&origin, &target);
            assert!(d > last_dist);
            assert!(n > last_norm);
            last_dist = d;
            last_norm = n;
        }
    }

    #[test]
    #[allow(deprecated)]
    fn test_chord_close_to_arc_for_short_distances() {
        // over ~100 km the chord understates the arc by about s^2/(24 R^2)
        let a = (52.5, 13.4);
        let b = (52.5, 14.8);
        let arc = distance_km(&a, &b);
        let chord = cartesian_chord_distance_km(&a, &b);
        assert!(arc < 100.0);
        assert!((arc - chord).abs() / arc < 1e-4);
    }

    #[test]
    #[allow(deprecated)]
    fn test_chord_never_exceeds_arc() {
        let pairs = [
            ((0.0, 0.0), (0.0, 90.0)),
            ((52.5, 13.4), (-33.9, 151.2)),
            ((0.0, 0.0), (0.0, 179.0)),
        ];
        for (a, b) in pairs {
            assert!(cartesian_chord_distance_km(&a, &b) <= distance_km(&a, &b) + 1e-9);
        }
    }

    #[test]
    fn test_circumference() {
        assert!((circumference_km(0.0) - C).abs() < 1e-9);
        assert!(circumference_km(90.0).abs() < 1e-6);
        assert!(circumference_km(-90.0).abs() < 1e-6);
        // cos is even, so north and south mirror each other
        assert!((circumference_km(45.0) - circumference_km(-45.0)).abs() < 1e-9);
    }

    #[test]
    fn test_date_line_crossover() {
        assert!(is_date_line_crossover(179.0, -179.0));
        assert!(is_date_line_crossover(-179.0, 179.0));
        assert!(!is_date_line_crossover(10.0, 20.0));
        assert!(!is_date_line_crossover(90.0, -90.0));
    }

    #[test]
    fn test_nan_propagates() {
        assert!(distance_km(&(f64::NAN, 0.0), &(0.0, 0.0)).is_nan());
        assert!(normalized_dist(f64::NAN).is_nan());
        assert!(circumference_km(f64::NAN).is_nan());
    }
}
