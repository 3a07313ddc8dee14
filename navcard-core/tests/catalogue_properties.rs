//! End-to-end checks of the standard catalogue through the store, the way a
//! front end drives it: raw text in, formatted values out.

use std::f64::consts::PI;

use navcard_core::calculations::common::DIVISOR_EPSILON;
use navcard_core::{Catalogue, InputStore, format_value, keys};
use pretty_assertions::assert_eq;

fn store_with(pairs: &[(&str, &str)]) -> InputStore {
    let mut store = InputStore::with_defaults(&Catalogue::standard());
    store.extend(pairs.iter().copied());
    store
}

fn output(
    id: &str,
    key: &str,
    store: &InputStore,
) -> Option<f64> {
    Catalogue::standard()
        .evaluate(id, store)
        .expect("formula exists")
        .outputs
        .get(key)
}

fn assert_close(
    actual: Option<f64>,
    expected: f64,
    tolerance: f64,
) {
    let actual = actual.expect("value present");
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn gradient_accepts_comma_grouped_distance() {
    let store = store_with(&[(keys::ALTITUDE_FT, "1000"), (keys::DISTANCE_NM, "2,000")]);

    assert_eq!(output("gradient", keys::GRADIENT_FT_PER_NM, &store), Some(0.5));
}

#[test]
fn gradient_zero_distance_is_large_but_finite() {
    let store = store_with(&[(keys::ALTITUDE_FT, "1000"), (keys::DISTANCE_NM, "0")]);

    let value = output("gradient", keys::GRADIENT_FT_PER_NM, &store).unwrap();
    assert!(value.is_finite());
    assert_eq!(value, 1000.0 / DIVISOR_EPSILON);
}

#[test]
fn pitch_without_correction() {
    let store = store_with(&[(keys::GRADIENT_PCT, "450")]);

    assert_eq!(output("pitch", keys::PITCH_DEG, &store), Some(4.5));
}

#[test]
fn ias_to_tas_produces_both_units() {
    let store = store_with(&[(keys::IAS_KT, "120"), (keys::PRESSURE_ALT_FT, "6,000")]);

    assert_eq!(output("ias2tas", keys::TAS_KT, &store), Some(150.0));
    assert_eq!(output("ias2tas", keys::TAS_NM_MIN, &store), Some(2.5));
}

#[test]
fn average_tas_produces_both_units() {
    let store = store_with(&[(keys::TAS_LOW_KT, "150"), (keys::TAS_HIGH_KT, "210")]);

    assert_eq!(output("avgTas", keys::AVG_TAS_KT, &store), Some(180.0));
    assert_eq!(output("avgTas", keys::AVG_TAS_NM_MIN, &store), Some(3.0));
}

#[test]
fn vvi_with_nm_per_min() {
    let store = store_with(&[(keys::GRADIENT_FT_PER_NM, "300"), (keys::TAS_NM_MIN, "2")]);

    assert_eq!(output("vvi", keys::VVI_FPM, &store), Some(600.0));
}

#[test]
fn vvi_with_only_nm_per_hr() {
    let store = store_with(&[(keys::GRADIENT_FT_PER_NM, "300"), (keys::TAS_NM_HR, "120")]);

    assert_eq!(output("vvi", keys::VVI_FPM, &store), Some(600.0));
}

#[test]
fn vvi_without_tas_is_null() {
    let store = store_with(&[(keys::GRADIENT_FT_PER_NM, "300")]);

    assert_eq!(output("vvi", keys::VVI_FPM, &store), None);
}

#[test]
fn vvi_without_gradient_is_null() {
    let store = store_with(&[(keys::TAS_NM_MIN, "2")]);

    assert_eq!(output("vvi", keys::VVI_FPM, &store), None);
}

#[test]
fn turn_radius_matches_closed_form() {
    let store = store_with(&[(keys::TAS_KT, "150"), (keys::BANK_DEG, "30")]);
    let v = 150.0 * 1.68781;
    let expected = v * v / (32.174 * (30.0 * PI / 180.0).tan()) / 6076.12;

    assert_close(output("turnRadius", keys::RADIUS_NM, &store), expected, 1e-12);
}

#[test]
fn turn_radius_uses_default_bank() {
    let with_default = store_with(&[(keys::TAS_KT, "150")]);
    let explicit = store_with(&[(keys::TAS_KT, "150"), (keys::BANK_DEG, "30")]);

    assert_eq!(
        output("turnRadius", keys::RADIUS_NM, &with_default),
        output("turnRadius", keys::RADIUS_NM, &explicit)
    );
}

#[test]
fn turn_radius_zero_bank_is_finite() {
    let store = store_with(&[(keys::TAS_KT, "150"), (keys::BANK_DEG, "0")]);

    assert!(output("turnRadius", keys::RADIUS_NM, &store).is_some_and(f64::is_finite));
}

#[test]
fn lead_radial_applies_lead_both_ways() {
    let store = store_with(&[
        (keys::RADIUS_NM, "1"),
        (keys::ARCING_DME, "10"),
        (keys::INTERCEPT_RADIAL, "180"),
    ]);

    assert_eq!(output("leadRadial", keys::LEAD_MINUS, &store), Some(174.0));
    assert_eq!(output("leadRadial", keys::LEAD_PLUS, &store), Some(186.0));
}

#[test]
fn lead_radial_zero_dme_is_finite() {
    let store = store_with(&[(keys::RADIUS_NM, "1"), (keys::ARCING_DME, "0")]);

    let minus = output("leadRadial", keys::LEAD_MINUS, &store).unwrap();
    let plus = output("leadRadial", keys::LEAD_PLUS, &store).unwrap();
    assert!(minus.is_finite() && plus.is_finite());
    assert_eq!(plus, 60.0 / DIVISOR_EPSILON);
}

#[test]
fn lead_dme_inbound_and_outbound() {
    let store = store_with(&[(keys::ARCING_DME, "15"), (keys::RADIUS_NM, "2")]);

    assert_eq!(output("leadDME", keys::INBOUND_NM, &store), Some(13.0));
    assert_eq!(output("leadDME", keys::OUTBOUND_NM, &store), Some(17.0));
}

#[test]
fn arc_distance_between_radials() {
    let store = store_with(&[
        (keys::START_RADIAL, "090"),
        (keys::END_RADIAL, "030"),
        (keys::ARCING_DME, "12"),
    ]);

    assert_eq!(output("arcDistance", keys::ARC_NM, &store), Some(12.0));
}

#[test]
fn turning_distance_quarter_turn() {
    let store = store_with(&[(keys::TURN_DEG, "90"), (keys::RADIUS_NM, "2")]);

    assert_close(
        output("turningDistance", keys::TURN_DISTANCE_NM, &store),
        PI,
        1e-12,
    );
}

#[test]
fn loss_90_unit_radius() {
    let store = store_with(&[(keys::RADIUS_NM, "1")]);

    assert_close(output("loss90", keys::LOSS_90_NM, &store), 2.0 - PI / 2.0, 1e-12);
}

#[test]
fn climb_descend_distance() {
    let store = store_with(&[(keys::DELTA_ALT_FT, "3,000"), (keys::GRADIENT_FT_PER_NM, "300")]);

    assert_eq!(output("climbDescend", keys::CLIMB_DISTANCE_NM, &store), Some(10.0));
}

#[test]
fn vdp_three_degree_path() {
    let store = store_with(&[(keys::HAT_FT, "400"), (keys::SLOPE_DEG, "3")]);
    let slope = 6076.12 * (3.0 * PI / 180.0).tan();

    assert_close(output("vdp", keys::SLOPE_FT_PER_NM, &store), slope, 1e-9);
    assert_close(output("vdp", keys::VDP_NM, &store), 400.0 / slope, 1e-12);
}

#[test]
fn time_out_custom_row_only_when_entered() {
    let without = store_with(&[(keys::GROUNDSPEED_KT, "120")]);
    let with = store_with(&[(keys::GROUNDSPEED_KT, "120"), (keys::CUSTOM_MIN, "4.5")]);

    assert_eq!(output("timeOut", keys::DIST_3_MIN_NM, &without), Some(6.0));
    assert_eq!(output("timeOut", keys::DIST_2_MIN_NM, &without), Some(4.0));
    assert_eq!(output("timeOut", keys::DIST_1_MIN_NM, &without), Some(2.0));
    assert_eq!(output("timeOut", keys::DIST_CUSTOM_NM, &without), None);
    assert_eq!(output("timeOut", keys::DIST_CUSTOM_NM, &with), Some(9.0));
}

#[test]
fn time_out_non_numeric_custom_text_computes_zero() {
    let store = store_with(&[(keys::GROUNDSPEED_KT, "120"), (keys::CUSTOM_MIN, "soon")]);

    assert_eq!(output("timeOut", keys::DIST_CUSTOM_NM, &store), Some(0.0));
}

#[test]
fn cleared_store_yields_zero_or_null_everywhere() {
    let catalogue = Catalogue::standard();
    let mut store = store_with(&[
        (keys::TAS_KT, "150"),
        (keys::GRADIENT_FT_PER_NM, "300"),
        (keys::TAS_NM_MIN, "2"),
        (keys::CUSTOM_MIN, "5"),
        (keys::GROUNDSPEED_KT, "90"),
    ]);
    store.clear(&catalogue);

    for evaluation in catalogue.evaluate_all(&store) {
        for entry in &evaluation.outputs {
            if let Some(value) = entry.value {
                assert!(
                    value == 0.0,
                    "{}.{} = {value} after clear",
                    evaluation.formula.id,
                    entry.key
                );
            }
        }
    }

    assert_eq!(output("vvi", keys::VVI_FPM, &store), None);
    assert_eq!(output("timeOut", keys::DIST_CUSTOM_NM, &store), None);
}

#[test]
fn hostile_text_never_panics_and_formats() {
    let catalogue = Catalogue::standard();
    let hostile = ["", " ", "abc", "NaN", "Infinity", "-Infinity", "1e400", ",,,", "1,2,3", "--5"];

    for text in hostile {
        let mut store = InputStore::new();
        for key in catalogue.input_keys() {
            store.set(key, text);
        }

        for evaluation in catalogue.evaluate_all(&store) {
            for entry in &evaluation.outputs {
                let shown = format_value(entry.value);
                assert!(!shown.is_empty(), "{text:?} produced empty display");
            }
        }
    }
}

#[test]
fn output_of_one_card_feeds_the_next_through_shared_keys() {
    let catalogue = Catalogue::standard();
    let mut store = store_with(&[(keys::TAS_KT, "150"), (keys::ARCING_DME, "10")]);

    let radius = output("turnRadius", keys::RADIUS_NM, &store).unwrap();
    store.set(keys::RADIUS_NM, radius.to_string());

    let lead = catalogue.evaluate("leadDME", &store).unwrap();
    assert_close(lead.outputs.get(keys::INBOUND_NM), 10.0 - radius, 1e-12);
}

#[test]
fn zero_results_with_negative_inputs_display_unsigned() {
    let arc = store_with(&[(keys::ARCING_DME, "-5")]);
    let turn = store_with(&[(keys::BANK_DEG, "-30")]);

    assert_eq!(format_value(output("arcDistance", keys::ARC_NM, &arc)), "0.000");
    assert_eq!(format_value(output("turnRadius", keys::RADIUS_NM, &turn)), "0.000");
}
