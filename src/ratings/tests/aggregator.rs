use std::collections::BTreeMap;

use super::common::{new_rating, rating_record};
use crate::ratings::aggregator::{compute_averages, recompute_averages};
use crate::ratings::criteria::CriterionKey;
use crate::ratings::domain::NewShip;
use crate::ratings::memory::MemoryShipStore;
use crate::ratings::store::ShipStore;

#[test]
fn mean_of_two_food_scores() {
    let ratings = vec![
        rating_record("1", &[(CriterionKey::Food, 4.0)]),
        rating_record("2", &[(CriterionKey::Food, 5.0)]),
    ];

    let averages = compute_averages(&ratings);
    assert_eq!(averages.get(&CriterionKey::Food).map(String::as_str), Some("4.5"));
}

#[test]
fn zero_scores_stay_out_of_numerator_and_count() {
    let ratings = vec![
        rating_record("1", &[]),
        rating_record("2", &[(CriterionKey::Food, 3.0)]),
    ];

    let averages = compute_averages(&ratings);
    assert_eq!(averages.get(&CriterionKey::Food).map(String::as_str), Some("3.0"));
}

#[test]
fn unscored_criteria_are_absent_from_the_map() {
    let ratings = vec![rating_record("1", &[(CriterionKey::Food, 4.0)])];

    let averages = compute_averages(&ratings);
    assert_eq!(averages.len(), 1);
    assert!(!averages.contains_key(&CriterionKey::CabinTemperature));
}

#[test]
fn averages_render_with_one_fractional_digit() {
    let ratings = vec![
        rating_record("1", &[(CriterionKey::BridgeEquipment, 4.0)]),
        rating_record("2", &[(CriterionKey::BridgeEquipment, 4.0)]),
        rating_record("3", &[(CriterionKey::BridgeEquipment, 5.0)]),
    ];

    let averages = compute_averages(&ratings);
    assert_eq!(
        averages.get(&CriterionKey::BridgeEquipment).map(String::as_str),
        Some("4.3")
    );
}

#[test]
fn empty_rating_set_yields_empty_map() {
    assert!(compute_averages(&[]).is_empty());
}

#[tokio::test]
async fn recompute_is_idempotent() {
    let store = MemoryShipStore::new();
    let ship = store
        .create_ship(NewShip {
            name: "MV Horizon".to_string(),
            code: None,
        })
        .await
        .expect("create ship");
    store
        .append_rating(&ship.ship_id, new_rating(&[(CriterionKey::Food, 4.0)]))
        .await
        .expect("append rating");

    let first = recompute_averages(&store, &ship.ship_id)
        .await
        .expect("first recompute");
    let second = recompute_averages(&store, &ship.ship_id)
        .await
        .expect("second recompute");

    assert_eq!(first, second);
}

#[tokio::test]
async fn recompute_replaces_stale_average_keys() {
    let store = MemoryShipStore::new();
    let ship = store
        .create_ship(NewShip {
            name: "MV Horizon".to_string(),
            code: None,
        })
        .await
        .expect("create ship");

    // Simulate an externally written average with no backing ratings.
    let mut stale = BTreeMap::new();
    stale.insert(CriterionKey::Food, "9.9".to_string());
    store
        .replace_ship_averages(&ship.ship_id, &stale)
        .await
        .expect("seed stale averages");

    let recomputed = recompute_averages(&store, &ship.ship_id)
        .await
        .expect("recompute");

    assert!(recomputed.is_empty());
    let refreshed = store
        .fetch_ship(&ship.ship_id)
        .await
        .expect("fetch")
        .expect("ship present");
    assert!(refreshed.averages.is_empty());
}
