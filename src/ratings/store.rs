use std::collections::BTreeMap;

use async_trait::async_trait;

use super::criteria::CriterionKey;
use super::domain::{NewRating, NewShip, RatingRecord, ShipId, ShipInfo, ShipRecord};

/// Narrow abstraction over the document store holding ships and their
/// nested rating documents. Every call is one network round trip against
/// the hosted backend; none of them are transactional with each other.
#[async_trait]
pub trait ShipStore: Send + Sync {
    /// Exact match on the IMO code field, limit 1. First result wins if the
    /// backend ever returns more than one.
    async fn find_ship_by_code(&self, code: &str) -> Result<Option<ShipRecord>, StoreError>;

    /// Exact, case-sensitive match on the name field, limit 1.
    async fn find_ship_by_name(&self, name: &str) -> Result<Option<ShipRecord>, StoreError>;

    async fn create_ship(&self, ship: NewShip) -> Result<ShipRecord, StoreError>;

    async fn fetch_ship(&self, ship_id: &ShipId) -> Result<Option<ShipRecord>, StoreError>;

    /// Append a rating document under the ship, assigning the rating id and
    /// the server timestamp.
    async fn append_rating(
        &self,
        ship_id: &ShipId,
        rating: NewRating,
    ) -> Result<RatingRecord, StoreError>;

    async fn ratings_for_ship(&self, ship_id: &ShipId) -> Result<Vec<RatingRecord>, StoreError>;

    /// Shallow merge: only the keys present in `info` overwrite stored
    /// values; everything else on the ship document is untouched.
    async fn merge_ship_info(&self, ship_id: &ShipId, info: &ShipInfo) -> Result<(), StoreError>;

    /// Replace (not merge) the ship's averages map.
    async fn replace_ship_averages(
        &self,
        ship_id: &ShipId,
        averages: &BTreeMap<CriterionKey, String>,
    ) -> Result<(), StoreError>;
}

/// Store failures surface unchanged to the caller; there is no retry or
/// suppression anywhere in the core.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("ship record not found")]
    ShipNotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
