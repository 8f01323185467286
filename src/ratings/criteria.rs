use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of rating criteria a pilot scores after disembarking.
///
/// Storage keys are stable: they name map entries in persisted rating and
/// ship documents, so renaming a variant here must keep `storage_key` (and
/// the legacy spellings in [`CriterionKey::parse`]) intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKey {
    CabinTemperature,
    CabinCleanliness,
    BridgeEquipment,
    BridgeTemperature,
    EmbarkationDevice,
    Food,
    CrewRelationship,
}

impl CriterionKey {
    /// Canonical order, used for display and for iterating the full set
    /// during normalization and aggregation.
    pub const ALL: [CriterionKey; 7] = [
        CriterionKey::CabinTemperature,
        CriterionKey::CabinCleanliness,
        CriterionKey::BridgeEquipment,
        CriterionKey::BridgeTemperature,
        CriterionKey::EmbarkationDevice,
        CriterionKey::Food,
        CriterionKey::CrewRelationship,
    ];

    pub const fn storage_key(self) -> &'static str {
        match self {
            CriterionKey::CabinTemperature => "cabin_temperature",
            CriterionKey::CabinCleanliness => "cabin_cleanliness",
            CriterionKey::BridgeEquipment => "bridge_equipment",
            CriterionKey::BridgeTemperature => "bridge_temperature",
            CriterionKey::EmbarkationDevice => "embarkation_device",
            CriterionKey::Food => "food",
            CriterionKey::CrewRelationship => "crew_relationship",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CriterionKey::CabinTemperature => "Cabin temperature",
            CriterionKey::CabinCleanliness => "Cabin cleanliness",
            CriterionKey::BridgeEquipment => "Bridge equipment",
            CriterionKey::BridgeTemperature => "Bridge temperature",
            CriterionKey::EmbarkationDevice => "Embarkation device",
            CriterionKey::Food => "Food",
            CriterionKey::CrewRelationship => "Relationship with crew",
        }
    }

    /// Resolve a raw form field name to a canonical key.
    ///
    /// Accepts the storage key itself plus the camelCase spelling older form
    /// clients submitted. Unknown names yield `None` and the field is ignored
    /// upstream.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.iter().copied().find(|key| {
            trimmed.eq_ignore_ascii_case(key.storage_key())
                || trimmed.eq_ignore_ascii_case(&camel_case(key.storage_key()))
        })
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
