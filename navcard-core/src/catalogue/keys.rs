//! Input and output keys used by the standard catalogue.
//!
//! Keys live in one flat namespace. An output key that matches an input key
//! of another formula (`tasKt`, `tasNMmin`, `gradientFtPerNM`, `rNM`) names
//! the same quantity, so a front end can copy one card's result into the
//! next card's field.

// gradient
pub const ALTITUDE_FT: &str = "altFt";
pub const DISTANCE_NM: &str = "distNM";
pub const GRADIENT_FT_PER_NM: &str = "gradientFtPerNM";

// pitch
pub const GRADIENT_PCT: &str = "gradientPct";
pub const LEVEL_PITCH_DEG: &str = "levelPitchDeg";
pub const PITCH_DEG: &str = "pitchDeg";

// ias2tas / avgTas
pub const IAS_KT: &str = "iasKt";
pub const PRESSURE_ALT_FT: &str = "pressureAltFt";
pub const TAS_KT: &str = "tasKt";
pub const TAS_NM_MIN: &str = "tasNMmin";
pub const TAS_LOW_KT: &str = "tasLowKt";
pub const TAS_HIGH_KT: &str = "tasHighKt";
pub const AVG_TAS_KT: &str = "avgTasKt";
pub const AVG_TAS_NM_MIN: &str = "avgTasNMmin";

// vvi
pub const TAS_NM_HR: &str = "tasNMhr";
pub const VVI_FPM: &str = "vviFpm";

// turns
pub const BANK_DEG: &str = "bankDeg";
pub const RADIUS_NM: &str = "rNM";
pub const TURN_DEG: &str = "turnDeg";
pub const TURN_DISTANCE_NM: &str = "turnDistNM";
pub const LOSS_90_NM: &str = "loss90NM";

// arcs
pub const ARCING_DME: &str = "arcingDME";
pub const INTERCEPT_RADIAL: &str = "interceptRadial";
pub const LEAD_MINUS: &str = "leadMinus";
pub const LEAD_PLUS: &str = "leadPlus";
pub const INBOUND_NM: &str = "inboundNM";
pub const OUTBOUND_NM: &str = "outboundNM";
pub const START_RADIAL: &str = "startRadial";
pub const END_RADIAL: &str = "endRadial";
pub const ARC_NM: &str = "arcNM";

// climbDescend
pub const DELTA_ALT_FT: &str = "deltaAltFt";
pub const CLIMB_DISTANCE_NM: &str = "climbDistNM";

// vdp
pub const HAT_FT: &str = "hatFt";
pub const SLOPE_DEG: &str = "slopeDeg";
pub const VDP_NM: &str = "vdpNM";
pub const SLOPE_FT_PER_NM: &str = "slopeFtPerNM";

// timeOut
pub const GROUNDSPEED_KT: &str = "gsKt";
pub const CUSTOM_MIN: &str = "customMin";
pub const DIST_3_MIN_NM: &str = "dist3MinNM";
pub const DIST_2_MIN_NM: &str = "dist2MinNM";
pub const DIST_1_MIN_NM: &str = "dist1MinNM";
pub const DIST_CUSTOM_NM: &str = "distCustomNM";
