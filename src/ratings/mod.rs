//! Ship rating core: canonical ship resolution, submission normalization,
//! rating append, and per-criterion average aggregation.
//!
//! The data flow for one submission is strictly sequential: resolve the ship
//! (find-or-create by IMO code, then name), normalize the raw criteria and
//! vessel info, append the rating document, shallow-merge the info into the
//! ship record, recompute averages from the full rating set. No step is
//! transactional with the next; partial failures are surfaced, not rolled
//! back, and the next recompute restores consistent averages.

pub mod aggregator;
pub mod criteria;
pub mod domain;
pub mod memory;
pub mod normalizer;
pub mod resolver;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use aggregator::{compute_averages, recompute_averages};
pub use criteria::CriterionKey;
pub use domain::{
    CabinType, CriterionScore, NewRating, NewShip, RatingId, RatingRecord, RatingSubmission,
    ShipId, ShipInfo, ShipRecord, ShipSummaryView, SubmissionReceipt,
};
pub use memory::MemoryShipStore;
pub use normalizer::{normalize_criteria, normalize_info};
pub use resolver::{resolve_ship, ResolveError};
pub use router::rating_router;
pub use service::{RatingService, SubmissionError};
pub use store::{ShipStore, StoreError};
