use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde_json::{json, Map, Value};

use crate::ratings::criteria::CriterionKey;
use crate::ratings::domain::{
    CabinType, CriterionScore, NewRating, NewShip, RatingId, RatingRecord, RatingSubmission,
    ShipId, ShipInfo, ShipRecord,
};
use crate::ratings::memory::MemoryShipStore;
use crate::ratings::service::RatingService;
use crate::ratings::store::{ShipStore, StoreError};

pub(super) fn disembarkation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 12).expect("valid date")
}

/// Raw criteria map the way the form posts it: storage-key fields holding
/// `{score, observation}` objects.
pub(super) fn criteria_map(entries: &[(CriterionKey, f64)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, score) in entries {
        map.insert(
            key.storage_key().to_string(),
            json!({ "score": score, "observation": "" }),
        );
    }
    map
}

pub(super) fn submission() -> RatingSubmission {
    RatingSubmission {
        evaluator_id: Some("pilot-007".to_string()),
        evaluator_display_name: "A. Silva".to_string(),
        ship_name: "MV Horizon".to_string(),
        ship_code: "IMO9319466".to_string(),
        cabin_type: CabinType::Authority,
        disembarkation_date: disembarkation_date(),
        general_observation: "Smooth boarding, attentive crew.".to_string(),
        criteria: criteria_map(&[
            (CriterionKey::Food, 4.0),
            (CriterionKey::CabinCleanliness, 5.0),
        ]),
        ship_info: ship_info_map(),
    }
}

pub(super) fn ship_info_map() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("crew_nationality".to_string(), json!("Philippine"));
    map.insert("minibar".to_string(), json!(true));
    map
}

pub(super) fn build_service() -> (RatingService<MemoryShipStore>, Arc<MemoryShipStore>) {
    let store = Arc::new(MemoryShipStore::new());
    let service = RatingService::new(store.clone());
    (service, store)
}

/// Rating record with every canonical key present, zero-scored except for
/// the given entries. For exercising the pure aggregation path.
pub(super) fn rating_record(suffix: &str, entries: &[(CriterionKey, f64)]) -> RatingRecord {
    let mut criteria_scores: BTreeMap<CriterionKey, CriterionScore> = CriterionKey::ALL
        .iter()
        .map(|key| {
            (
                *key,
                CriterionScore {
                    score: 0.0,
                    observation: String::new(),
                },
            )
        })
        .collect();
    for (key, score) in entries {
        criteria_scores.insert(
            *key,
            CriterionScore {
                score: *score,
                observation: String::new(),
            },
        );
    }

    RatingRecord {
        rating_id: RatingId(format!("rating-{suffix}")),
        evaluator_id: "pilot-007".to_string(),
        evaluator_display_name: "A. Silva".to_string(),
        submitted_at: Utc::now(),
        disembarkation_date: disembarkation_date(),
        cabin_type: CabinType::Officer,
        general_observation: String::new(),
        criteria_scores,
    }
}

pub(super) fn new_rating(entries: &[(CriterionKey, f64)]) -> NewRating {
    let record = rating_record("seed", entries);
    NewRating {
        evaluator_id: record.evaluator_id,
        evaluator_display_name: record.evaluator_display_name,
        disembarkation_date: record.disembarkation_date,
        cabin_type: record.cabin_type,
        general_observation: record.general_observation,
        criteria_scores: record.criteria_scores,
    }
}

/// Store stub simulating a backend outage on every call.
pub(super) struct UnavailableStore;

fn offline() -> StoreError {
    StoreError::Unavailable("backend offline".to_string())
}

#[async_trait]
impl ShipStore for UnavailableStore {
    async fn find_ship_by_code(&self, _code: &str) -> Result<Option<ShipRecord>, StoreError> {
        Err(offline())
    }

    async fn find_ship_by_name(&self, _name: &str) -> Result<Option<ShipRecord>, StoreError> {
        Err(offline())
    }

    async fn create_ship(&self, _ship: NewShip) -> Result<ShipRecord, StoreError> {
        Err(offline())
    }

    async fn fetch_ship(&self, _ship_id: &ShipId) -> Result<Option<ShipRecord>, StoreError> {
        Err(offline())
    }

    async fn append_rating(
        &self,
        _ship_id: &ShipId,
        _rating: NewRating,
    ) -> Result<RatingRecord, StoreError> {
        Err(offline())
    }

    async fn ratings_for_ship(&self, _ship_id: &ShipId) -> Result<Vec<RatingRecord>, StoreError> {
        Err(offline())
    }

    async fn merge_ship_info(&self, _ship_id: &ShipId, _info: &ShipInfo) -> Result<(), StoreError> {
        Err(offline())
    }

    async fn replace_ship_averages(
        &self,
        _ship_id: &ShipId,
        _averages: &BTreeMap<CriterionKey, String>,
    ) -> Result<(), StoreError> {
        Err(offline())
    }
}
