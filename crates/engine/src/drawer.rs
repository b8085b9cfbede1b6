//! The physical cash drawer: counts per denomination.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{denominations, money::Money};

/// Counts per denomination id. Counts are non-negative by construction.
pub type CashCounts = HashMap<String, u64>;

/// The physical cash holdings.
///
/// The drawer total is never stored as a scalar; it is always recomputed from
/// the counts via the denomination catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drawer {
    counts: CashCounts,
}

impl Drawer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_counts(counts: CashCounts) -> Self {
        Self { counts }
    }

    #[must_use]
    pub fn counts(&self) -> &CashCounts {
        &self.counts
    }

    /// Count held for a denomination id (0 when absent).
    #[must_use]
    pub fn count(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Current drawer value.
    #[must_use]
    pub fn total(&self) -> Money {
        denominations::value_of(&self.counts)
    }

    /// Increase counts per entry in `deltas`.
    pub fn add(&mut self, deltas: &CashCounts) {
        for (id, delta) in deltas {
            *self.counts.entry(id.clone()).or_insert(0) += delta;
        }
    }

    /// Decrease counts per entry in `deltas`, saturating each count at 0.
    ///
    /// A subtract larger than the held count silently under-applies; the
    /// caller's recorded amount is not adjusted to match.
    pub fn remove_saturating(&mut self, deltas: &CashCounts) {
        for (id, delta) in deltas {
            let count = self.counts.entry(id.clone()).or_insert(0);
            *count = count.saturating_sub(*delta);
        }
    }
}
