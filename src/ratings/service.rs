use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use super::aggregator::recompute_averages;
use super::criteria::CriterionKey;
use super::domain::{NewRating, RatingSubmission, ShipId, ShipSummaryView, SubmissionReceipt};
use super::normalizer::{normalize_criteria, normalize_info};
use super::resolver::{resolve_ship, ResolveError};
use super::store::{ShipStore, StoreError};

/// Facade composing ship resolution, normalization, rating append, info
/// merge, and average aggregation. The one entry point external
/// collaborators call to record a rating.
pub struct RatingService<S> {
    store: Arc<S>,
}

impl<S> RatingService<S>
where
    S: ShipStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record one pilot's rating of one ship.
    ///
    /// Steps run sequentially: resolve ship, normalize payloads, append the
    /// rating document, merge supplied info into the ship record, recompute
    /// averages. The steps are not transactional; a failure partway leaves
    /// the earlier writes committed, and the next full recompute for the
    /// ship restores consistent averages.
    pub async fn submit(
        &self,
        submission: RatingSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let evaluator_id = submission
            .evaluator_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(SubmissionError::Unauthenticated)?
            .to_string();

        let ship = resolve_ship(
            self.store.as_ref(),
            &submission.ship_name,
            &submission.ship_code,
        )
        .await?;

        let criteria_scores = normalize_criteria(&submission.criteria);
        let info = normalize_info(&submission.ship_info);

        let rating = self
            .store
            .append_rating(
                &ship.ship_id,
                NewRating {
                    evaluator_id,
                    // Snapshot of the name as it is today; rename events must
                    // not rewrite old ratings.
                    evaluator_display_name: submission.evaluator_display_name.trim().to_string(),
                    disembarkation_date: submission.disembarkation_date,
                    cabin_type: submission.cabin_type,
                    general_observation: submission.general_observation,
                    criteria_scores,
                },
            )
            .await?;

        if !info.is_empty() {
            self.store.merge_ship_info(&ship.ship_id, &info).await?;
        }

        let averages = recompute_averages(self.store.as_ref(), &ship.ship_id).await?;

        info!(
            ship_id = %ship.ship_id.0,
            rating_id = %rating.rating_id.0,
            "rating recorded"
        );

        Ok(SubmissionReceipt {
            ship_id: ship.ship_id,
            rating_id: rating.rating_id,
            averages,
        })
    }

    /// Re-run aggregation for a ship without adding a rating. Reads the full
    /// current rating set, so repeated calls yield identical maps.
    pub async fn recompute(
        &self,
        ship_id: &ShipId,
    ) -> Result<BTreeMap<CriterionKey, String>, SubmissionError> {
        Ok(recompute_averages(self.store.as_ref(), ship_id).await?)
    }

    /// Read model for the detail screen collaborator.
    pub async fn ship_summary(&self, ship_id: &ShipId) -> Result<ShipSummaryView, SubmissionError> {
        let ship = self
            .store
            .fetch_ship(ship_id)
            .await?
            .ok_or(SubmissionError::ShipNotFound)?;
        let ratings = self.store.ratings_for_ship(ship_id).await?;

        Ok(ShipSummaryView {
            ship_id: ship.ship_id,
            name: ship.name,
            code: ship.code,
            info: ship.info,
            averages: ship.averages,
            rating_count: ratings.len(),
        })
    }
}

/// Error taxonomy surfaced to callers. Store failures propagate unchanged
/// so the UI can let the pilot retry manually.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission carries no authenticated evaluator")]
    Unauthenticated,
    #[error("a ship name or IMO code is required")]
    InvalidArgument,
    #[error("ship record not found")]
    ShipNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ResolveError> for SubmissionError {
    fn from(value: ResolveError) -> Self {
        match value {
            ResolveError::MissingIdentity => Self::InvalidArgument,
            ResolveError::Store(err) => Self::Store(err),
        }
    }
}
