//! Climb and descent planning.
//!
//! | Formula | Result |
//! |---------|--------|
//! | Gradient | altitude ÷ distance (ft/NM) |
//! | Pitch | gradient % ÷ 100 + level-flight pitch (°) |
//! | VVI | gradient × TAS in NM/min (ft/min) |
//! | Climb/descend distance | altitude ÷ gradient (NM) |
//! | VDP | HAT ÷ (6076.12 × tan slope) (NM) |

use serde::Serialize;

use super::common::{FEET_PER_NM, MINUTES_PER_HOUR, deg_to_rad, guard_divisor};

/// Climb or descent gradient in ft/NM for an altitude change over a distance.
///
/// # Examples
///
/// ```
/// use navcard_core::calculations::gradient_ft_per_nm;
///
/// assert_eq!(gradient_ft_per_nm(1000.0, 2000.0), 0.5);
/// assert!(gradient_ft_per_nm(1000.0, 0.0).is_finite());
/// ```
pub fn gradient_ft_per_nm(
    altitude_ft: f64,
    distance_nm: f64,
) -> f64 {
    altitude_ft / guard_divisor(distance_nm)
}

/// Pitch attitude in degrees for a gradient given in percent.
///
/// `level_pitch_deg` is the pitch the aircraft holds in level flight and is
/// added as a correction.
pub fn pitch_deg(
    gradient_pct: f64,
    level_pitch_deg: f64,
) -> f64 {
    gradient_pct / 100.0 + level_pitch_deg
}

/// Vertical speed in ft/min needed to fly a gradient at a true airspeed.
///
/// TAS in NM/min takes precedence; a TAS in NM/hr is only used when the
/// per-minute value is absent. Returns `None` when the gradient is missing or
/// non-finite, or when neither TAS value is usable, so "cannot compute" stays
/// distinct from a computed zero.
///
/// # Examples
///
/// ```
/// use navcard_core::calculations::vertical_speed_fpm;
///
/// assert_eq!(vertical_speed_fpm(Some(300.0), Some(2.0), None), Some(600.0));
/// assert_eq!(vertical_speed_fpm(Some(300.0), None, Some(120.0)), Some(600.0));
/// assert_eq!(vertical_speed_fpm(Some(300.0), None, None), None);
/// ```
pub fn vertical_speed_fpm(
    gradient_ft_per_nm: Option<f64>,
    tas_nm_per_min: Option<f64>,
    tas_nm_per_hr: Option<f64>,
) -> Option<f64> {
    let gradient = gradient_ft_per_nm.filter(|g| g.is_finite())?;
    let tas_per_min = tas_nm_per_min
        .filter(|t| t.is_finite())
        .or_else(|| {
            tas_nm_per_hr
                .filter(|t| t.is_finite())
                .map(|t| t / MINUTES_PER_HOUR)
        })?;

    Some(gradient * tas_per_min)
}

/// Horizontal distance in NM to change altitude at a gradient.
pub fn climb_descend_distance_nm(
    altitude_ft: f64,
    gradient_ft_per_nm: f64,
) -> f64 {
    altitude_ft / guard_divisor(gradient_ft_per_nm)
}

/// Visual descent point and the slope it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualDescentPoint {
    /// Distance from the threshold at which to leave the MDA, in NM.
    pub vdp_nm: f64,

    /// The glide slope expressed in ft/NM.
    pub slope_ft_per_nm: f64,
}

/// Computes the visual descent point for a height above touchdown and a
/// glide-slope angle.
pub fn visual_descent_point(
    hat_ft: f64,
    slope_deg: f64,
) -> VisualDescentPoint {
    let slope_ft_per_nm = FEET_PER_NM * deg_to_rad(slope_deg).tan();

    VisualDescentPoint {
        vdp_nm: hat_ft / guard_divisor(slope_ft_per_nm),
        slope_ft_per_nm,
    }
}
