use crate::core::constants::{C, DIST_PRECISION};
use once_cell::sync::Lazy;

/// Distance thresholds scaled by `DIST_PRECISION`, ascending.
///
/// The last entry is the scaled half circumference and every earlier
/// entry halves its successor (integer division), so `THRESHOLDS[i]` is
/// the largest scaled distance a key can still resolve after `63 - i`
/// halvings. The low end collapses into duplicate zeros once the halving
/// drops below one integer unit; the rank query below tolerates that.
///
/// Built once on first use and read-only afterwards, safe to share
/// across threads without synchronization.
static THRESHOLDS: Lazy<[i32; 64]> = Lazy::new(|| {
    let mut arr = [0i32; 64];
    arr[63] = ((C * DIST_PRECISION).round() as i64 / 2) as i32;
    for i in (1..64).rev() {
        arr[i - 1] = arr[i] / 2;
    }
    arr
});

/// Deepest spatial-key bit position whose cell still spans at least
/// `dist_km` of latitude extent.
///
/// Runs in O(1): a single rank query over the 64 precomputed thresholds.
///
/// Any distance above a quarter circumference saturates to `0` (the
/// coarsest level) and a negative distance returns the `-1` sentinel
/// rather than an error; callers must check for it. Valid results are
/// even values in `0..=126` — one key bit per latitude halving and one
/// per longitude halving.
pub fn bit_position_for(dist_km: f64) -> i32 {
    if dist_km > C / 4.0 {
        return 0;
    }
    if dist_km < 0.0 {
        return -1;
    }

    let dist_int = (dist_km * DIST_PRECISION).round() as i32;
    // rank of dist_int: the number of thresholds strictly below it
    let bit_pos = THRESHOLDS.partition_point(|&t| t < dist_int);

    ((63 - bit_pos) * 2) as i32
}

/// Maximum distance in kilometers still resolvable at the given
/// spatial-key bit position — the inverse direction of
/// [`bit_position_for`].
///
/// One halving of the distance costs two bit positions, since the key
/// interleaves a latitude and a longitude bit per level. Results carry
/// three decimal places; levels too fine to represent at that precision
/// return 0.
pub fn spatial_key_max_distance_km(bit_pos: u32) -> f64 {
    let shift = bit_pos / 2 + 1;
    if shift >= 63 {
        return 0.0;
    }
    (((C * 1000.0) as i64) >> shift) as f64 / 1000.0
}
