//! Closed-form navigation formulas.
//!
//! Each submodule groups the formulas for one area of instrument flying.
//! All functions are pure: they take plain `f64` values in the units named by
//! their parameters and never fail. Division by a zero or negative divisor is
//! replaced by division by [`common::DIVISOR_EPSILON`].

pub mod airspeed;
pub mod arcs;
pub mod climb;
pub mod common;
pub mod timing;
pub mod turns;

pub use airspeed::{TrueAirspeed, average_tas, ias_to_tas};
pub use arcs::{LeadDme, LeadRadials, arc_distance_nm, lead_dme, lead_radials};
pub use climb::{
    VisualDescentPoint, climb_descend_distance_nm, gradient_ft_per_nm, pitch_deg,
    vertical_speed_fpm, visual_descent_point,
};
pub use timing::{TimeOutDistances, distance_after_minutes, time_out};
pub use turns::{loss_90_nm, turn_radius_nm, turning_distance_nm};
