use optimizer_viz::distribution::{
    CategoricalDistribution, Distribution, FloatDistribution, IntDistribution,
};
use optimizer_viz::{
    is_reverse_scale, make_hovertext, make_json_compatible, AttrValue, Direction, ParamValue,
    StudySummary, Target, TrialRecord,
};
use serde_json::Value;

fn sample_trial() -> TrialRecord {
    TrialRecord::new(3)
        .with_value(0.5)
        .with_param(
            "lr",
            ParamValue::Float(0.001),
            Distribution::Float(FloatDistribution::new(1e-5, 1e-1).log_scale()),
        )
        .with_param(
            "layers",
            ParamValue::Int(4),
            Distribution::Int(IntDistribution::new(1, 8)),
        )
        .with_param(
            "optimizer",
            ParamValue::Str("adam".to_owned()),
            Distribution::Categorical(CategoricalDistribution::new(vec![
                ParamValue::from("adam"),
                ParamValue::from("sgd"),
            ])),
        )
}

#[test]
fn hovertext_contains_no_literal_newline() {
    let trial = sample_trial().with_user_attr("note", AttrValue::String("baseline".to_owned()));
    let text = make_hovertext(&trial);
    assert!(!text.contains('\n'));
    assert!(text.contains("<br>"));
}

#[test]
fn hovertext_round_trips_through_json() {
    let trial = sample_trial();
    let restored = make_hovertext(&trial).replace("<br>", "\n");
    let decoded: Value = serde_json::from_str(&restored).unwrap();

    assert_eq!(decoded["number"], Value::from(3));
    assert_eq!(decoded["values"], serde_json::json!([0.5]));
    assert_eq!(decoded["params"]["lr"], serde_json::json!(0.001));
    assert_eq!(decoded["params"]["layers"], serde_json::json!(4));
    assert_eq!(decoded["params"]["optimizer"], serde_json::json!("adam"));
}

#[test]
fn hovertext_omits_empty_user_attrs() {
    let text = make_hovertext(&sample_trial()).replace("<br>", "\n");
    let decoded: Value = serde_json::from_str(&text).unwrap();
    assert!(decoded.get("user_attrs").is_none());
}

#[test]
fn hovertext_includes_user_attrs_when_present() {
    let trial = sample_trial()
        .with_user_attr("epoch", AttrValue::Int(12))
        .with_user_attr("score", AttrValue::Float(f64::INFINITY));
    let restored = make_hovertext(&trial).replace("<br>", "\n");
    let decoded: Value = serde_json::from_str(&restored).unwrap();

    assert_eq!(decoded["user_attrs"]["epoch"], serde_json::json!(12));
    // Non-representable floats fall back to their textual form.
    assert_eq!(decoded["user_attrs"]["score"], serde_json::json!("inf"));
}

#[test]
fn hovertext_lists_all_objective_values() {
    let trial = TrialRecord::new(0).with_values(vec![1.0, 2.5]);
    let restored = make_hovertext(&trial).replace("<br>", "\n");
    let decoded: Value = serde_json::from_str(&restored).unwrap();
    assert_eq!(decoded["values"], serde_json::json!([1.0, 2.5]));
}

#[test]
fn json_compatible_round_trips_directly_encodable_values() {
    for (value, expected) in [
        (AttrValue::Float(1.5), serde_json::json!(1.5)),
        (AttrValue::Int(-2), serde_json::json!(-2)),
        (AttrValue::Bool(true), serde_json::json!(true)),
        (
            AttrValue::String("hello".to_owned()),
            serde_json::json!("hello"),
        ),
    ] {
        assert_eq!(make_json_compatible(&value), expected);
    }
}

#[test]
fn json_compatible_falls_back_to_text_for_nonfinite_floats() {
    assert_eq!(
        make_json_compatible(&AttrValue::Float(f64::NAN)),
        serde_json::json!("NaN")
    );
    assert_eq!(
        make_json_compatible(&AttrValue::Float(f64::NEG_INFINITY)),
        serde_json::json!("-inf")
    );
}

#[test]
fn reverse_scale_for_minimize_without_target() {
    let study = StudySummary::new(Direction::Minimize);
    assert!(is_reverse_scale(&study, None));
}

#[test]
fn no_reverse_scale_for_maximize_without_target() {
    let study = StudySummary::new(Direction::Maximize);
    assert!(!is_reverse_scale(&study, None));
}

#[test]
fn any_target_always_reverses_the_scale() {
    // Even a target selecting the primary objective reverses the scale.
    let study = StudySummary::new(Direction::Maximize);
    let primary: &Target = &|t: &TrialRecord| Ok(t.values[0]);
    assert!(is_reverse_scale(&study, Some(primary)));
}
