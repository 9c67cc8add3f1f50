// src/store.rs
//
// Name → record aggregation.
//
// - Keys keep first-seen position. A later row with the same name replaces
//   the whole record (values, tokens, weight) without moving the key.
// - `sort_by_weight` is stable, so equal weights stay in first-seen order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::specs::passives::PassiveRow;
use crate::weights::TokenWeights;

/// One passive as written to `data.json`. The name is the map key.
/// Field names on disk are `value` / `emotions`, as existing consumers read them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveRecord {
    #[serde(rename = "value")]
    pub values: Vec<String>,
    #[serde(rename = "emotions")]
    pub tokens: Vec<String>,
    pub weight: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassiveMap {
    entries: IndexMap<String, PassiveRecord>,
}

impl PassiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weigh `row` and store it under its name, replacing any earlier record in place.
    pub fn add(&mut self, row: PassiveRow, weights: &TokenWeights) {
        let weight = weights.total(&row.tokens);
        let record = PassiveRecord { values: row.values, tokens: row.tokens, weight };
        if let Some(old) = self.entries.insert(row.name, record) {
            logd!("Passives: duplicate name, replacing record (old weight {})", old.weight);
        }
    }

    pub fn sort_by_weight(&mut self) {
        self.entries.sort_by(|_, a, _, b| a.weight.cmp(&b.weight));
    }

    pub fn get(&self, name: &str) -> Option<&PassiveRecord> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PassiveRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fold rows in document order, then order by weight.
pub fn aggregate<I>(rows: I, weights: &TokenWeights) -> PassiveMap
where
    I: IntoIterator<Item = PassiveRow>,
{
    let mut map = PassiveMap::new();
    for row in rows {
        map.add(row, weights);
    }
    map.sort_by_weight();
    map
}
