use tracing::debug;

use super::domain::{NewShip, ShipRecord};
use super::store::{ShipStore, StoreError};

/// Find-or-create the canonical ship record for a free-text identity.
///
/// The IMO code takes priority over the name because codes are globally
/// unique while names collide. Lookups are exact matches; a miss creates a
/// new record with empty info and averages. The query-then-create sequence
/// is not atomic, so two concurrent first-time submissions for the same new
/// vessel can still produce duplicates; later submissions keep attaching to
/// whichever record the query returns first.
pub async fn resolve_ship<S: ShipStore>(
    store: &S,
    name: &str,
    code: &str,
) -> Result<ShipRecord, ResolveError> {
    let name = name.trim();
    let code = code.trim();

    if name.is_empty() && code.is_empty() {
        return Err(ResolveError::MissingIdentity);
    }

    if !code.is_empty() {
        if let Some(ship) = store.find_ship_by_code(code).await? {
            return Ok(ship);
        }
    } else if let Some(ship) = store.find_ship_by_name(name).await? {
        return Ok(ship);
    }

    let created = store
        .create_ship(NewShip {
            name: name.to_string(),
            code: (!code.is_empty()).then(|| code.to_string()),
        })
        .await?;

    debug!(ship_id = %created.ship_id.0, name, code, "created canonical ship record");
    Ok(created)
}

/// Failure to identify a vessel from the submitted fields.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("a ship name or IMO code is required")]
    MissingIdentity,
    #[error(transparent)]
    Store(#[from] StoreError),
}
