//! Turn geometry: radius, distance flown in a turn, and the distance lost by
//! a 90° turn compared with flying the corner.

use std::f64::consts::PI;

use tracing::debug;

use super::common::{
    FEET_PER_NM, FEET_PER_SECOND_PER_KNOT, GRAVITY_FT_PER_S2, ZERO_BANK_SURROGATE_RAD,
    deg_to_rad, guard_divisor,
};

/// Radius of a coordinated level turn in NM.
///
/// `r = V² / (g · tan φ)` with `V` in ft/s. A bank of exactly zero is
/// replaced by [`ZERO_BANK_SURROGATE_RAD`]. A divisor smaller in magnitude
/// than [`DIVISOR_EPSILON`](super::common::DIVISOR_EPSILON) is widened to it
/// with its sign kept, so the result stays finite.
///
/// # Examples
///
/// ```
/// use navcard_core::calculations::turn_radius_nm;
///
/// let r = turn_radius_nm(150.0, 30.0);
/// assert!(r > 0.56 && r < 0.58);
/// ```
pub fn turn_radius_nm(
    tas_kt: f64,
    bank_deg: f64,
) -> f64 {
    let velocity_fps = tas_kt * FEET_PER_SECOND_PER_KNOT;

    let mut bank_rad = deg_to_rad(bank_deg);
    if bank_rad == 0.0 {
        debug!(
            surrogate_rad = ZERO_BANK_SURROGATE_RAD,
            "zero bank angle replaced by surrogate"
        );
        bank_rad = ZERO_BANK_SURROGATE_RAD;
    }

    // Subnormal banks survive the surrogate check but still underflow tan.
    let divisor = GRAVITY_FT_PER_S2 * bank_rad.tan();
    let divisor = divisor.signum() * guard_divisor(divisor.abs());

    let radius_ft = velocity_fps * velocity_fps / divisor;
    radius_ft / FEET_PER_NM
}

/// Arc length flown while turning `turn_deg` degrees on a radius of `radius_nm`.
pub fn turning_distance_nm(
    turn_deg: f64,
    radius_nm: f64,
) -> f64 {
    (turn_deg / 360.0) * 2.0 * PI * radius_nm
}

/// Distance saved by a 90° turn versus flying both legs of the corner:
/// `2r − quarter circumference`.
pub fn loss_90_nm(radius_nm: f64) -> f64 {
    2.0 * radius_nm - (90.0 / 360.0) * 2.0 * PI * radius_nm
}
