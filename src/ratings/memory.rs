use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::criteria::CriterionKey;
use super::domain::{NewRating, NewShip, RatingId, RatingRecord, ShipId, ShipInfo, ShipRecord};
use super::store::{ShipStore, StoreError};

/// In-process store backing the dev server and the test suites.
///
/// Mirrors the hosted backend's observable semantics: last-write-wins per
/// document, no isolation across calls, query-by-field returning the first
/// match in a stable order.
#[derive(Default)]
pub struct MemoryShipStore {
    ships: Mutex<BTreeMap<ShipId, StoredShip>>,
    ship_sequence: AtomicU64,
    rating_sequence: AtomicU64,
}

#[derive(Debug, Clone)]
struct StoredShip {
    record: ShipRecord,
    ratings: Vec<RatingRecord>,
}

impl MemoryShipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all ship records, for assertions and the demo CLI.
    pub fn ships(&self) -> Vec<ShipRecord> {
        let guard = self.ships.lock().expect("store mutex poisoned");
        guard.values().map(|stored| stored.record.clone()).collect()
    }

    pub fn ship_count(&self) -> usize {
        self.ships.lock().expect("store mutex poisoned").len()
    }

    pub fn rating_count(&self) -> usize {
        let guard = self.ships.lock().expect("store mutex poisoned");
        guard.values().map(|stored| stored.ratings.len()).sum()
    }

    fn next_ship_id(&self) -> ShipId {
        let id = self.ship_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        ShipId(format!("ship-{id:06}"))
    }

    fn next_rating_id(&self) -> RatingId {
        let id = self.rating_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        RatingId(format!("rating-{id:06}"))
    }
}

#[async_trait]
impl ShipStore for MemoryShipStore {
    async fn find_ship_by_code(&self, code: &str) -> Result<Option<ShipRecord>, StoreError> {
        let guard = self.ships.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .find(|stored| stored.record.code.as_deref() == Some(code))
            .map(|stored| stored.record.clone()))
    }

    async fn find_ship_by_name(&self, name: &str) -> Result<Option<ShipRecord>, StoreError> {
        let guard = self.ships.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .find(|stored| stored.record.name == name)
            .map(|stored| stored.record.clone()))
    }

    async fn create_ship(&self, ship: NewShip) -> Result<ShipRecord, StoreError> {
        let record = ShipRecord {
            ship_id: self.next_ship_id(),
            name: ship.name,
            code: ship.code,
            info: ShipInfo::default(),
            averages: BTreeMap::new(),
        };
        let mut guard = self.ships.lock().expect("store mutex poisoned");
        guard.insert(
            record.ship_id.clone(),
            StoredShip {
                record: record.clone(),
                ratings: Vec::new(),
            },
        );
        Ok(record)
    }

    async fn fetch_ship(&self, ship_id: &ShipId) -> Result<Option<ShipRecord>, StoreError> {
        let guard = self.ships.lock().expect("store mutex poisoned");
        Ok(guard.get(ship_id).map(|stored| stored.record.clone()))
    }

    async fn append_rating(
        &self,
        ship_id: &ShipId,
        rating: NewRating,
    ) -> Result<RatingRecord, StoreError> {
        let record = RatingRecord {
            rating_id: self.next_rating_id(),
            evaluator_id: rating.evaluator_id,
            evaluator_display_name: rating.evaluator_display_name,
            submitted_at: Utc::now(),
            disembarkation_date: rating.disembarkation_date,
            cabin_type: rating.cabin_type,
            general_observation: rating.general_observation,
            criteria_scores: rating.criteria_scores,
        };
        let mut guard = self.ships.lock().expect("store mutex poisoned");
        let stored = guard.get_mut(ship_id).ok_or(StoreError::ShipNotFound)?;
        stored.ratings.push(record.clone());
        Ok(record)
    }

    async fn ratings_for_ship(&self, ship_id: &ShipId) -> Result<Vec<RatingRecord>, StoreError> {
        let guard = self.ships.lock().expect("store mutex poisoned");
        let stored = guard.get(ship_id).ok_or(StoreError::ShipNotFound)?;
        Ok(stored.ratings.clone())
    }

    async fn merge_ship_info(&self, ship_id: &ShipId, info: &ShipInfo) -> Result<(), StoreError> {
        let mut guard = self.ships.lock().expect("store mutex poisoned");
        let stored = guard.get_mut(ship_id).ok_or(StoreError::ShipNotFound)?;
        stored.record.info.merge_from(info);
        Ok(())
    }

    async fn replace_ship_averages(
        &self,
        ship_id: &ShipId,
        averages: &BTreeMap<CriterionKey, String>,
    ) -> Result<(), StoreError> {
        let mut guard = self.ships.lock().expect("store mutex poisoned");
        let stored = guard.get_mut(ship_id).ok_or(StoreError::ShipNotFound)?;
        stored.record.averages = averages.clone();
        Ok(())
    }
}
