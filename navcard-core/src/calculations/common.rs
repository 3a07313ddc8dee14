//! Shared constants and guards used across the formula modules.

use tracing::debug;

/// Smallest divisor any formula will divide by.
pub const DIVISOR_EPSILON: f64 = 1e-9;

/// Feet in one nautical mile.
pub const FEET_PER_NM: f64 = 6076.12;

/// Feet per second in one knot.
pub const FEET_PER_SECOND_PER_KNOT: f64 = 1.68781;

/// Standard gravity in ft/s².
pub const GRAVITY_FT_PER_S2: f64 = 32.174;

/// Bank angle used in place of exactly zero so `tan` never returns zero.
pub const ZERO_BANK_SURROGATE_RAD: f64 = 0.0001;

pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Returns `divisor`, or [`DIVISOR_EPSILON`] when the divisor is smaller.
///
/// # Examples
///
/// ```
/// use navcard_core::calculations::common::{DIVISOR_EPSILON, guard_divisor};
///
/// assert_eq!(guard_divisor(2.0), 2.0);
/// assert_eq!(guard_divisor(0.0), DIVISOR_EPSILON);
/// assert_eq!(guard_divisor(-5.0), DIVISOR_EPSILON);
/// ```
pub fn guard_divisor(divisor: f64) -> f64 {
    let guarded = divisor.max(DIVISOR_EPSILON);
    if guarded != divisor {
        debug!(divisor, epsilon = DIVISOR_EPSILON, "divisor clamped to epsilon");
    }
    guarded
}

/// Converts degrees to radians as `deg × π / 180`.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// Routes debug output through the test harness so clamping is visible
    /// with `--nocapture`.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    #[test]
    fn guard_divisor_passes_through_normal_values() {
        assert_eq!(guard_divisor(2000.0), 2000.0);
        assert_eq!(guard_divisor(DIVISOR_EPSILON), DIVISOR_EPSILON);
    }

    #[test]
    fn guard_divisor_clamps_zero() {
        let _guard = init_test_tracing();

        assert_eq!(guard_divisor(0.0), DIVISOR_EPSILON);
        assert_eq!(guard_divisor(-0.0), DIVISOR_EPSILON);
    }

    #[test]
    fn guard_divisor_clamps_tiny_and_negative_values() {
        assert_eq!(guard_divisor(1e-12), DIVISOR_EPSILON);
        assert_eq!(guard_divisor(-300.0), DIVISOR_EPSILON);
    }

    #[test]
    fn deg_to_rad_converts_common_angles() {
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert_eq!(deg_to_rad(180.0), std::f64::consts::PI);
        assert!((deg_to_rad(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
