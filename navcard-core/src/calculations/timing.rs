//! Distance covered over fixed times at a groundspeed, used for timed
//! outbound legs and holding.

use serde::Serialize;

use super::common::MINUTES_PER_HOUR;

/// Distances in NM flown after 3, 2 and 1 minutes, plus an optional custom
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeOutDistances {
    pub three_min_nm: f64,
    pub two_min_nm: f64,
    pub one_min_nm: f64,

    /// `None` when no custom time was entered.
    pub custom_nm: Option<f64>,
}

/// Distance in NM flown in `minutes` at `groundspeed_kt`.
pub fn distance_after_minutes(
    groundspeed_kt: f64,
    minutes: f64,
) -> f64 {
    groundspeed_kt / MINUTES_PER_HOUR * minutes
}

/// Computes the standard time-out table for a groundspeed.
///
/// # Examples
///
/// ```
/// use navcard_core::calculations::time_out;
///
/// let table = time_out(120.0, Some(4.5));
/// assert_eq!(table.three_min_nm, 6.0);
/// assert_eq!(table.one_min_nm, 2.0);
/// assert_eq!(table.custom_nm, Some(9.0));
/// ```
pub fn time_out(
    groundspeed_kt: f64,
    custom_minutes: Option<f64>,
) -> TimeOutDistances {
    TimeOutDistances {
        three_min_nm: distance_after_minutes(groundspeed_kt, 3.0),
        two_min_nm: distance_after_minutes(groundspeed_kt, 2.0),
        one_min_nm: distance_after_minutes(groundspeed_kt, 1.0),
        custom_nm: custom_minutes.map(|minutes| distance_after_minutes(groundspeed_kt, minutes)),
    }
}
