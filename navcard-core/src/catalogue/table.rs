//! The standard catalogue of fourteen formula cards.
//!
//! Each compute function parses its inputs from the store, calls the typed
//! formula in [`crate::calculations`], and packages the outputs in the order
//! the card declares them.

use super::keys::*;
use crate::calculations::{
    arc_distance_nm, average_tas, climb_descend_distance_nm, gradient_ft_per_nm, ias_to_tas,
    lead_dme, lead_radials, loss_90_nm, pitch_deg, time_out, turn_radius_nm, turning_distance_nm,
    vertical_speed_fpm, visual_descent_point,
};
use crate::models::{FormulaDefinition, InputField, OutputField, Outputs};
use crate::store::InputStore;

/// Bank angle assumed when the bank field is left blank.
const DEFAULT_BANK_DEG: f64 = 30.0;

pub(super) static STANDARD: [FormulaDefinition; 14] = [
    FormulaDefinition {
        id: "gradient",
        title: "Climb/Descent Gradient",
        inputs: &[
            InputField::new(ALTITUDE_FT, "Altitude change (ft)"),
            InputField::new(DISTANCE_NM, "Distance (NM)"),
        ],
        outputs: &[OutputField::new(GRADIENT_FT_PER_NM, "Gradient (ft/NM)")],
        compute: compute_gradient,
        equation: Some("ft/NM = altitude ÷ distance"),
    },
    FormulaDefinition {
        id: "pitch",
        title: "Pitch for Gradient",
        inputs: &[
            InputField::new(GRADIENT_PCT, "Gradient (%)"),
            InputField::new(LEVEL_PITCH_DEG, "Level-flight pitch (°)").optional(),
        ],
        outputs: &[OutputField::new(PITCH_DEG, "Pitch (°)")],
        compute: compute_pitch,
        equation: Some("pitch = gradient ÷ 100 + level pitch"),
    },
    FormulaDefinition {
        id: "ias2tas",
        title: "IAS to TAS",
        inputs: &[
            InputField::new(IAS_KT, "IAS (kt)"),
            InputField::new(PRESSURE_ALT_FT, "Pressure altitude (ft)"),
        ],
        outputs: &[
            OutputField::new(TAS_KT, "TAS (kt)"),
            OutputField::new(TAS_NM_MIN, "TAS (NM/min)"),
        ],
        compute: compute_ias_to_tas,
        equation: Some("TAS = IAS + 5 × (altitude ÷ 1000)"),
    },
    FormulaDefinition {
        id: "avgTas",
        title: "Average TAS",
        inputs: &[
            InputField::new(TAS_LOW_KT, "TAS at low altitude (kt)"),
            InputField::new(TAS_HIGH_KT, "TAS at high altitude (kt)"),
        ],
        outputs: &[
            OutputField::new(AVG_TAS_KT, "Average TAS (kt)"),
            OutputField::new(AVG_TAS_NM_MIN, "Average TAS (NM/min)"),
        ],
        compute: compute_average_tas,
        equation: Some("avg TAS = (low + high) ÷ 2"),
    },
    FormulaDefinition {
        id: "vvi",
        title: "VVI for Gradient",
        inputs: &[
            InputField::new(GRADIENT_FT_PER_NM, "Gradient (ft/NM)"),
            InputField::new(TAS_NM_MIN, "TAS (NM/min)").optional(),
            InputField::new(TAS_NM_HR, "TAS (NM/hr)").optional(),
        ],
        outputs: &[OutputField::new(VVI_FPM, "VVI (ft/min)")],
        compute: compute_vvi,
        equation: Some("VVI = gradient × TAS (NM/min)"),
    },
    FormulaDefinition {
        id: "turnRadius",
        title: "Turn Radius",
        inputs: &[
            InputField::new(TAS_KT, "TAS (kt)"),
            InputField::new(BANK_DEG, "Bank angle (°)").with_default("30"),
        ],
        outputs: &[OutputField::new(RADIUS_NM, "Radius (NM)")],
        compute: compute_turn_radius,
        equation: Some("r = (TAS × 1.68781)² ÷ (32.174 × tan bank) ÷ 6076.12"),
    },
    FormulaDefinition {
        id: "leadRadial",
        title: "Lead Radial",
        inputs: &[
            InputField::new(RADIUS_NM, "Turn radius (NM)"),
            InputField::new(ARCING_DME, "Arcing DME (NM)"),
            InputField::new(INTERCEPT_RADIAL, "Intercept radial (°)"),
        ],
        outputs: &[
            OutputField::new(LEAD_MINUS, "Lead radial (−)"),
            OutputField::new(LEAD_PLUS, "Lead radial (+)"),
        ],
        compute: compute_lead_radial,
        equation: Some("lead = 60 × r ÷ DME; radial ∓ lead"),
    },
    FormulaDefinition {
        id: "leadDME",
        title: "Lead DME",
        inputs: &[
            InputField::new(ARCING_DME, "Arcing DME (NM)"),
            InputField::new(RADIUS_NM, "Turn radius (NM)"),
        ],
        outputs: &[
            OutputField::new(INBOUND_NM, "Inbound lead (NM)"),
            OutputField::new(OUTBOUND_NM, "Outbound lead (NM)"),
        ],
        compute: compute_lead_dme,
        equation: Some("inbound = DME − r; outbound = DME + r"),
    },
    FormulaDefinition {
        id: "arcDistance",
        title: "Arc Distance",
        inputs: &[
            InputField::new(START_RADIAL, "Start radial (°)"),
            InputField::new(END_RADIAL, "End radial (°)"),
            InputField::new(ARCING_DME, "Arcing DME (NM)"),
        ],
        outputs: &[OutputField::new(ARC_NM, "Arc distance (NM)")],
        compute: compute_arc_distance,
        equation: Some("arc = (|start − end| ÷ 60) × DME"),
    },
    FormulaDefinition {
        id: "turningDistance",
        title: "Turning Distance",
        inputs: &[
            InputField::new(TURN_DEG, "Turn amount (°)"),
            InputField::new(RADIUS_NM, "Turn radius (NM)"),
        ],
        outputs: &[OutputField::new(TURN_DISTANCE_NM, "Distance (NM)")],
        compute: compute_turning_distance,
        equation: Some("distance = (degrees ÷ 360) × 2π × r"),
    },
    FormulaDefinition {
        id: "loss90",
        title: "Distance Lost in 90° Turn",
        inputs: &[InputField::new(RADIUS_NM, "Turn radius (NM)")],
        outputs: &[OutputField::new(LOSS_90_NM, "Distance lost (NM)")],
        compute: compute_loss_90,
        equation: Some("loss = 2r − (90 ÷ 360) × 2π × r"),
    },
    FormulaDefinition {
        id: "climbDescend",
        title: "Climb/Descent Distance",
        inputs: &[
            InputField::new(DELTA_ALT_FT, "Altitude change (ft)"),
            InputField::new(GRADIENT_FT_PER_NM, "Gradient (ft/NM)"),
        ],
        outputs: &[OutputField::new(CLIMB_DISTANCE_NM, "Distance (NM)")],
        compute: compute_climb_descend,
        equation: Some("distance = altitude ÷ gradient"),
    },
    FormulaDefinition {
        id: "vdp",
        title: "Visual Descent Point",
        inputs: &[
            InputField::new(HAT_FT, "Height above touchdown (ft)"),
            InputField::new(SLOPE_DEG, "Descent angle (°)"),
        ],
        outputs: &[
            OutputField::new(VDP_NM, "VDP (NM)"),
            OutputField::new(SLOPE_FT_PER_NM, "Slope (ft/NM)"),
        ],
        compute: compute_vdp,
        equation: Some("VDP = HAT ÷ (6076.12 × tan angle)"),
    },
    FormulaDefinition {
        id: "timeOut",
        title: "Time Out Distances",
        inputs: &[
            InputField::new(GROUNDSPEED_KT, "Groundspeed (kt)"),
            InputField::new(CUSTOM_MIN, "Custom time (min)").optional(),
        ],
        outputs: &[
            OutputField::new(DIST_3_MIN_NM, "3 min (NM)"),
            OutputField::new(DIST_2_MIN_NM, "2 min (NM)"),
            OutputField::new(DIST_1_MIN_NM, "1 min (NM)"),
            OutputField::new(DIST_CUSTOM_NM, "Custom (NM)"),
        ],
        compute: compute_time_out,
        equation: Some("distance = GS ÷ 60 × minutes"),
    },
];

fn compute_gradient(store: &InputStore) -> Outputs {
    let gradient = gradient_ft_per_nm(store.number(ALTITUDE_FT), store.number(DISTANCE_NM));
    Outputs::new().with(GRADIENT_FT_PER_NM, gradient)
}

fn compute_pitch(store: &InputStore) -> Outputs {
    let pitch = pitch_deg(store.number(GRADIENT_PCT), store.number(LEVEL_PITCH_DEG));
    Outputs::new().with(PITCH_DEG, pitch)
}

fn compute_ias_to_tas(store: &InputStore) -> Outputs {
    let tas = ias_to_tas(store.number(IAS_KT), store.number(PRESSURE_ALT_FT));
    Outputs::new()
        .with(TAS_KT, tas.knots)
        .with(TAS_NM_MIN, tas.nm_per_min)
}

fn compute_average_tas(store: &InputStore) -> Outputs {
    let tas = average_tas(store.number(TAS_LOW_KT), store.number(TAS_HIGH_KT));
    Outputs::new()
        .with(AVG_TAS_KT, tas.knots)
        .with(AVG_TAS_NM_MIN, tas.nm_per_min)
}

fn compute_vvi(store: &InputStore) -> Outputs {
    let vvi = vertical_speed_fpm(
        store.optional_number(GRADIENT_FT_PER_NM),
        store.optional_number(TAS_NM_MIN),
        store.optional_number(TAS_NM_HR),
    );
    Outputs::new().with_optional(VVI_FPM, vvi)
}

fn compute_turn_radius(store: &InputStore) -> Outputs {
    let radius = turn_radius_nm(
        store.number(TAS_KT),
        store.number_or(BANK_DEG, DEFAULT_BANK_DEG),
    );
    Outputs::new().with(RADIUS_NM, radius)
}

fn compute_lead_radial(store: &InputStore) -> Outputs {
    let lead = lead_radials(
        store.number(RADIUS_NM),
        store.number(ARCING_DME),
        store.number(INTERCEPT_RADIAL),
    );
    Outputs::new()
        .with(LEAD_MINUS, lead.minus)
        .with(LEAD_PLUS, lead.plus)
}

fn compute_lead_dme(store: &InputStore) -> Outputs {
    let lead = lead_dme(store.number(ARCING_DME), store.number(RADIUS_NM));
    Outputs::new()
        .with(INBOUND_NM, lead.inbound)
        .with(OUTBOUND_NM, lead.outbound)
}

fn compute_arc_distance(store: &InputStore) -> Outputs {
    let arc = arc_distance_nm(
        store.number(START_RADIAL),
        store.number(END_RADIAL),
        store.number(ARCING_DME),
    );
    Outputs::new().with(ARC_NM, arc)
}

fn compute_turning_distance(store: &InputStore) -> Outputs {
    let distance = turning_distance_nm(store.number(TURN_DEG), store.number(RADIUS_NM));
    Outputs::new().with(TURN_DISTANCE_NM, distance)
}

fn compute_loss_90(store: &InputStore) -> Outputs {
    Outputs::new().with(LOSS_90_NM, loss_90_nm(store.number(RADIUS_NM)))
}

fn compute_climb_descend(store: &InputStore) -> Outputs {
    let distance = climb_descend_distance_nm(
        store.number(DELTA_ALT_FT),
        store.number(GRADIENT_FT_PER_NM),
    );
    Outputs::new().with(CLIMB_DISTANCE_NM, distance)
}

fn compute_vdp(store: &InputStore) -> Outputs {
    let vdp = visual_descent_point(store.number(HAT_FT), store.number(SLOPE_DEG));
    Outputs::new()
        .with(VDP_NM, vdp.vdp_nm)
        .with(SLOPE_FT_PER_NM, vdp.slope_ft_per_nm)
}

fn compute_time_out(store: &InputStore) -> Outputs {
    // Any typed text, even non-numeric, enables the custom row.
    let custom_minutes = store
        .is_filled(CUSTOM_MIN)
        .then(|| store.number(CUSTOM_MIN));
    let table = time_out(store.number(GROUNDSPEED_KT), custom_minutes);

    Outputs::new()
        .with(DIST_3_MIN_NM, table.three_min_nm)
        .with(DIST_2_MIN_NM, table.two_min_nm)
        .with(DIST_1_MIN_NM, table.one_min_nm)
        .with_optional(DIST_CUSTOM_NM, table.custom_nm)
}
