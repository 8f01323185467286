use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::criteria::CriterionKey;

/// Identifier wrapper for canonical ship records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShipId(pub String);

/// Identifier wrapper for rating documents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RatingId(pub String);

/// The single deduplicated representation of a vessel that all ratings
/// attach to. At most one record exists per IMO code; when the code is
/// absent, dedup falls back to exact name match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub ship_id: ShipId,
    pub name: String,
    /// IMO code. Preferred dedup key because codes are globally unique
    /// while names collide.
    pub code: Option<String>,
    pub info: ShipInfo,
    /// Per-criterion mean scores rendered with one fractional digit.
    /// Recomputed in full after every rating addition.
    pub averages: BTreeMap<CriterionKey, String>,
}

/// Fields needed to create a ship lazily on first submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShip {
    pub name: String,
    pub code: Option<String>,
}

/// Auxiliary vessel facts collected alongside ratings.
///
/// Every field is optional so that merging only touches keys the pilot
/// actually supplied; an omitted field stays "unknown" rather than being
/// overwritten with a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minibar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microwave: Option<bool>,
}

impl ShipInfo {
    /// Shallow merge: overwrite only the keys present in `incoming`,
    /// preserving unrelated existing values.
    pub fn merge_from(&mut self, incoming: &ShipInfo) {
        if let Some(nationality) = &incoming.crew_nationality {
            self.crew_nationality = Some(nationality.clone());
        }
        if let Some(count) = incoming.cabin_count {
            self.cabin_count = Some(count);
        }
        if let Some(minibar) = incoming.minibar {
            self.minibar = Some(minibar);
        }
        if let Some(sink) = incoming.sink {
            self.sink = Some(sink);
        }
        if let Some(microwave) = incoming.microwave {
            self.microwave = Some(microwave);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.crew_nationality.is_none()
            && self.cabin_count.is_none()
            && self.minibar.is_none()
            && self.sink.is_none()
            && self.microwave.is_none()
    }
}

/// Where the pilot rested on board, from the fixed set the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinType {
    Authority,
    Officer,
    Shared,
    NoCabin,
}

impl CabinType {
    pub const fn label(self) -> &'static str {
        match self {
            CabinType::Authority => "authority cabin",
            CabinType::Officer => "officer cabin",
            CabinType::Shared => "shared cabin",
            CabinType::NoCabin => "no cabin",
        }
    }
}

/// One criterion entry on a rating. A score of `0.0` marks a question the
/// pilot never answered; it is excluded from aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: f64,
    #[serde(default)]
    pub observation: String,
}

/// One pilot's evaluation of one ship on one occasion. Immutable once
/// appended; `evaluator_display_name` is snapshotted at submission time so
/// later profile renames never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub rating_id: RatingId,
    pub evaluator_id: String,
    pub evaluator_display_name: String,
    /// Assigned by the store when the document is appended.
    pub submitted_at: DateTime<Utc>,
    pub disembarkation_date: NaiveDate,
    pub cabin_type: CabinType,
    pub general_observation: String,
    /// Always contains every canonical criterion key.
    pub criteria_scores: BTreeMap<CriterionKey, CriterionScore>,
}

/// Rating fields supplied by the orchestrator; id and timestamp are
/// assigned by the store on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRating {
    pub evaluator_id: String,
    pub evaluator_display_name: String,
    pub disembarkation_date: NaiveDate,
    pub cabin_type: CabinType,
    pub general_observation: String,
    pub criteria_scores: BTreeMap<CriterionKey, CriterionScore>,
}

/// Raw submission exactly as the rating form collaborator posts it.
///
/// Criteria and ship info arrive as loose JSON maps; the normalizer is the
/// only place allowed to interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSubmission {
    #[serde(default)]
    pub evaluator_id: Option<String>,
    #[serde(default)]
    pub evaluator_display_name: String,
    #[serde(default)]
    pub ship_name: String,
    #[serde(default)]
    pub ship_code: String,
    pub cabin_type: CabinType,
    pub disembarkation_date: NaiveDate,
    #[serde(default)]
    pub general_observation: String,
    #[serde(default)]
    pub criteria: Map<String, Value>,
    #[serde(default)]
    pub ship_info: Map<String, Value>,
}

/// Confirmation returned to the form UI after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub ship_id: ShipId,
    pub rating_id: RatingId,
    pub averages: BTreeMap<CriterionKey, String>,
}

/// Read model for the ship detail collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSummaryView {
    pub ship_id: ShipId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub info: ShipInfo,
    pub averages: BTreeMap<CriterionKey, String>,
    pub rating_count: usize,
}
