use std::collections::BTreeMap;

use tracing::debug;

use super::criteria::CriterionKey;
use super::domain::{RatingRecord, ShipId};
use super::store::{ShipStore, StoreError};

/// Compute per-criterion mean scores across a ship's full rating set.
///
/// Zero scores mark criteria the pilot never answered and stay out of both
/// the numerator and the count. A criterion appears in the result only when
/// at least one rating scored it, so stale keys vanish on recompute.
pub fn compute_averages(ratings: &[RatingRecord]) -> BTreeMap<CriterionKey, String> {
    let mut averages = BTreeMap::new();
    for key in CriterionKey::ALL {
        let mut sum = 0.0;
        let mut count = 0u32;
        for rating in ratings {
            if let Some(entry) = rating.criteria_scores.get(&key) {
                if entry.score > 0.0 {
                    sum += entry.score;
                    count += 1;
                }
            }
        }
        if count > 0 {
            averages.insert(key, format_average(sum / f64::from(count)));
        }
    }
    averages
}

/// Read every rating under the ship, recompute the averages map, and write
/// it back wholesale.
///
/// Full recomputation on every insert is deliberate: per-ship rating volume
/// is small and a fresh read-all pass self-heals whatever a concurrently
/// interleaved writer left behind.
pub async fn recompute_averages<S: ShipStore>(
    store: &S,
    ship_id: &ShipId,
) -> Result<BTreeMap<CriterionKey, String>, StoreError> {
    let ratings = store.ratings_for_ship(ship_id).await?;
    let averages = compute_averages(&ratings);
    store.replace_ship_averages(ship_id, &averages).await?;
    debug!(
        ship_id = %ship_id.0,
        ratings = ratings.len(),
        criteria = averages.len(),
        "recomputed ship averages"
    );
    Ok(averages)
}

/// One fractional digit, matching what the detail screens display.
fn format_average(value: f64) -> String {
    format!("{value:.1}")
}
