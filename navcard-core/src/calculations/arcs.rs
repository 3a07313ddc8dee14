//! DME arc flying: lead radials, lead DMEs and arc length.
//!
//! Lead values use the 60:1 rule, where one degree of arc at 60 NM is one
//! nautical mile.

use serde::Serialize;

use super::common::guard_divisor;

/// Radials at which to start the turn onto or off an arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadRadials {
    /// Intercept radial minus the lead.
    pub minus: f64,

    /// Intercept radial plus the lead.
    pub plus: f64,
}

/// Computes the lead radials for joining a radial from an arc.
///
/// The lead in degrees is `60 · r / DME`. Radials are not wrapped into
/// 0–360.
///
/// # Examples
///
/// ```
/// use navcard_core::calculations::lead_radials;
///
/// let lead = lead_radials(1.0, 10.0, 180.0);
/// assert_eq!(lead.minus, 174.0);
/// assert_eq!(lead.plus, 186.0);
/// ```
pub fn lead_radials(
    radius_nm: f64,
    arcing_dme_nm: f64,
    intercept_radial_deg: f64,
) -> LeadRadials {
    let lead = 60.0 * radius_nm / guard_divisor(arcing_dme_nm);

    LeadRadials {
        minus: intercept_radial_deg - lead,
        plus: intercept_radial_deg + lead,
    }
}

/// DME readings at which to start the turn onto an arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadDme {
    /// Lead point when tracking inbound toward the station.
    pub inbound: f64,

    /// Lead point when tracking outbound from the station.
    pub outbound: f64,
}

/// Computes lead DMEs as the arc distance minus and plus the turn radius.
pub fn lead_dme(
    arcing_dme_nm: f64,
    radius_nm: f64,
) -> LeadDme {
    LeadDme {
        inbound: arcing_dme_nm - radius_nm,
        outbound: arcing_dme_nm + radius_nm,
    }
}

/// Length in NM of the arc between two radials at a given DME.
pub fn arc_distance_nm(
    start_radial_deg: f64,
    end_radial_deg: f64,
    arcing_dme_nm: f64,
) -> f64 {
    ((start_radial_deg - end_radial_deg).abs() / 60.0) * arcing_dme_nm
}
