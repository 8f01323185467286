//! Boundary normalization of raw form payloads.
//!
//! Historical clients submitted criteria and ship info under several field
//! spellings and with scores as numbers or locale-formatted strings. All of
//! that tolerance lives here; nothing past this module sees a non-canonical
//! shape. The whole module is best-effort coercion and never fails.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::criteria::CriterionKey;
use super::domain::{CriterionScore, ShipInfo};

const CREW_NATIONALITY_FIELDS: [&str; 4] = [
    "crew_nationality",
    "crewNationality",
    "nacionalidadeTripulacao",
    "tripulacao",
];
const CABIN_COUNT_FIELDS: [&str; 2] = ["cabin_count", "cabinCount"];
const MINIBAR_FIELDS: [&str; 2] = ["minibar", "miniBar"];
const SINK_FIELDS: [&str; 1] = ["sink"];
const MICROWAVE_FIELDS: [&str; 2] = ["microwave", "microondas"];

/// Coerce a raw criteria map into the canonical shape.
///
/// Every canonical key is present in the output; entries the pilot skipped
/// get a zero score and an empty observation, which keeps them out of
/// aggregation.
pub fn normalize_criteria(raw: &Map<String, Value>) -> BTreeMap<CriterionKey, CriterionScore> {
    let mut scores = BTreeMap::new();
    for key in CriterionKey::ALL {
        let entry = lookup_criterion(raw, key);
        let score = entry
            .and_then(|value| value.get("score"))
            .map(coerce_score)
            .unwrap_or(0.0);
        let observation = entry
            .and_then(|value| value.get("observation"))
            .map(coerce_text)
            .unwrap_or_default();
        scores.insert(key, CriterionScore { score, observation });
    }
    scores
}

/// Coerce raw ship info, keeping a field only when the client supplied it.
/// Omitted fields stay `None` so the merge step never clobbers known values
/// with defaults.
pub fn normalize_info(raw: &Map<String, Value>) -> ShipInfo {
    ShipInfo {
        crew_nationality: lookup(raw, &CREW_NATIONALITY_FIELDS)
            .map(|value| coerce_text(value).trim().to_string()),
        cabin_count: lookup(raw, &CABIN_COUNT_FIELDS).map(coerce_count),
        minibar: lookup(raw, &MINIBAR_FIELDS).map(coerce_flag),
        sink: lookup(raw, &SINK_FIELDS).map(coerce_flag),
        microwave: lookup(raw, &MICROWAVE_FIELDS).map(coerce_flag),
    }
}

fn lookup_criterion<'a>(raw: &'a Map<String, Value>, key: CriterionKey) -> Option<&'a Value> {
    raw.iter()
        .find(|(field, value)| CriterionKey::parse(field) == Some(key) && !value.is_null())
        .map(|(_, value)| value)
}

fn lookup<'a>(raw: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .find_map(|field| raw.get(*field))
        .filter(|value| !value.is_null())
}

/// Numbers pass through; strings parse after swapping the decimal comma for
/// a dot; anything else scores 0.0.
fn coerce_score(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().replace(',', ".").parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce_count(value: &Value) -> u32 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(|float| float.max(0.0) as u64))
            .unwrap_or(0) as u32,
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Strict coercion: only a literal `true` counts.
fn coerce_flag(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}
