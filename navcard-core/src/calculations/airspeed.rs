//! True airspeed estimates.
//!
//! Uses the rule of thumb that TAS grows by 5 kt for every 1,000 ft of
//! pressure altitude above IAS.

use serde::Serialize;

use super::common::MINUTES_PER_HOUR;

/// A true airspeed in both knots and NM per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrueAirspeed {
    pub knots: f64,
    pub nm_per_min: f64,
}

impl TrueAirspeed {
    /// Builds the pair from a speed in knots.
    pub fn from_knots(knots: f64) -> Self {
        Self {
            knots,
            nm_per_min: knots / MINUTES_PER_HOUR,
        }
    }
}

/// Estimates TAS from indicated airspeed and pressure altitude.
///
/// # Examples
///
/// ```
/// use navcard_core::calculations::ias_to_tas;
///
/// let tas = ias_to_tas(120.0, 6000.0);
/// assert_eq!(tas.knots, 150.0);
/// assert_eq!(tas.nm_per_min, 2.5);
/// ```
pub fn ias_to_tas(
    ias_kt: f64,
    pressure_altitude_ft: f64,
) -> TrueAirspeed {
    TrueAirspeed::from_knots(ias_kt + 5.0 * (pressure_altitude_ft / 1000.0))
}

/// Averages the TAS at the bottom and top of a climb or descent.
pub fn average_tas(
    tas_low_kt: f64,
    tas_high_kt: f64,
) -> TrueAirspeed {
    TrueAirspeed::from_knots((tas_low_kt + tas_high_kt) / 2.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ias_to_tas_adds_five_knots_per_thousand_feet() {
        let result = ias_to_tas(120.0, 6000.0);

        assert_eq!(result.knots, 150.0);
        assert_eq!(result.nm_per_min, 2.5);
    }

    #[test]
    fn ias_to_tas_at_sea_level_is_ias() {
        let result = ias_to_tas(90.0, 0.0);

        assert_eq!(result, TrueAirspeed::from_knots(90.0));
        assert_eq!(result.nm_per_min, 1.5);
    }

    #[test]
    fn ias_to_tas_handles_fractional_altitude() {
        assert_eq!(ias_to_tas(100.0, 2500.0).knots, 112.5);
    }

    #[test]
    fn average_tas_is_midpoint() {
        let result = average_tas(150.0, 210.0);

        assert_eq!(result.knots, 180.0);
        assert_eq!(result.nm_per_min, 3.0);
    }

    #[test]
    fn average_tas_zero_inputs() {
        assert_eq!(average_tas(0.0, 0.0), TrueAirspeed::from_knots(0.0));
    }
}
