//! Hover-text formatting and color-scale orientation helpers.

use serde_json::{Map, Value};

use crate::record::{AttrValue, ParamValue, Target, TrialRecord};
use crate::study::StudySummary;
use crate::types::Direction;

/// Marker substituted for literal newlines so hover text stays single-line.
const LINE_BREAK: &str = "<br>";

/// Returns `true` if the color scale of a plot should be reversed.
///
/// Scales are inverted so the best trial always renders at the same visual
/// extreme regardless of the optimization direction. Supplying any target
/// accessor also reverses the scale, even one selecting the primary
/// objective; this is a long-standing quirk of the heuristic that callers
/// depend on, so it is preserved as-is.
#[must_use]
pub fn is_reverse_scale(study: &StudySummary, target: Option<&Target>) -> bool {
    target.is_some() || study.direction() == Direction::Minimize
}

/// Encodes an attribute value as JSON, falling back to its textual
/// representation when the value cannot be represented.
///
/// JSON numbers cannot carry `NaN` or infinities; such floats come back as
/// their string form instead. Pure, no side effects.
#[must_use]
pub fn make_json_compatible(value: &AttrValue) -> Value {
    match value {
        AttrValue::Float(v) => serde_json::Number::from_f64(*v)
            .map_or_else(|| Value::String(v.to_string()), Value::Number),
        AttrValue::Int(v) => Value::from(*v),
        AttrValue::Bool(v) => Value::from(*v),
        AttrValue::String(v) => Value::from(v.clone()),
    }
}

fn param_to_json(value: &ParamValue) -> Value {
    match value {
        ParamValue::Float(v) => serde_json::Number::from_f64(*v)
            .map_or_else(|| Value::String(v.to_string()), Value::Number),
        ParamValue::Int(v) => Value::from(*v),
        ParamValue::Bool(v) => Value::from(*v),
        ParamValue::Str(v) => Value::from(v.clone()),
    }
}

fn objective_to_json(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map_or_else(|| Value::String(value.to_string()), Value::Number)
}

/// Builds the hover text shown for one plotted trial.
///
/// The text is an indented JSON object with the trial number, objective
/// value(s), parameters, and (only when non-empty) the user attributes, each
/// attribute passed through [`make_json_compatible`]. Maps are serialized in
/// name order so the output is deterministic. Literal newlines are replaced
/// by `<br>` so the result is safe to embed in a single-line display field.
#[must_use]
pub fn make_hovertext(trial: &TrialRecord) -> String {
    let mut text = Map::new();
    text.insert("number".to_owned(), Value::from(trial.number));
    text.insert(
        "values".to_owned(),
        Value::Array(trial.values.iter().copied().map(objective_to_json).collect()),
    );

    let mut params: Vec<_> = trial.params.iter().collect();
    params.sort_by(|a, b| a.0.cmp(b.0));
    text.insert(
        "params".to_owned(),
        Value::Object(
            params
                .into_iter()
                .map(|(name, value)| (name.clone(), param_to_json(value)))
                .collect(),
        ),
    );

    if !trial.user_attrs.is_empty() {
        let mut attrs: Vec<_> = trial.user_attrs.iter().collect();
        attrs.sort_by(|a, b| a.0.cmp(b.0));
        text.insert(
            "user_attrs".to_owned(),
            Value::Object(
                attrs
                    .into_iter()
                    .map(|(key, value)| (key.clone(), make_json_compatible(value)))
                    .collect(),
            ),
        );
    }

    let text = Value::Object(text);
    let rendered = serde_json::to_string_pretty(&text).unwrap_or_else(|_| text.to_string());
    rendered.replace('\n', LINE_BREAK)
}
