//! Daily reconciliation records: one morning/evening snapshot pair per date.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{drawer::CashCounts, money::Money};

/// Which end of the day a recording belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Morning,
    Evening,
}

impl StatusKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }
}

/// One reconciliation record, keyed by calendar date.
///
/// The variance, when present, is `evening_total - morning_total` computed at
/// the moment the evening recording was made. A later morning re-recording
/// overwrites the morning fields only and deliberately leaves a previously
/// computed variance untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyStatus {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning_cash: Option<CashCounts>,
    #[serde(default)]
    pub morning_total: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening_cash: Option<CashCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening_total: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<Money>,
    pub recorded_at: DateTime<Utc>,
}

/// The reconciliation records, one per date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusBook {
    records: BTreeMap<NaiveDate, DailyStatus>,
}

impl StatusBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the morning or evening snapshot for `date`.
    ///
    /// State transitions per date:
    /// - no record + morning: record created, evening fields absent;
    /// - no record + evening: record created with a zero opening balance,
    ///   `variance = total - 0`;
    /// - existing record + morning: morning fields overwritten, evening
    ///   fields and any stale variance left as they are;
    /// - existing record + evening: evening fields overwritten,
    ///   `variance = total - morning_total` as currently on record.
    ///
    /// `recorded_at` is refreshed on every recording.
    pub fn record(
        &mut self,
        kind: StatusKind,
        date: NaiveDate,
        snapshot: CashCounts,
        total: Money,
        recorded_at: DateTime<Utc>,
    ) -> &DailyStatus {
        let record = self.records.entry(date).or_insert_with(|| DailyStatus {
            date,
            morning_cash: None,
            morning_total: Money::ZERO,
            evening_cash: None,
            evening_total: None,
            variance: None,
            recorded_at,
        });

        match kind {
            StatusKind::Morning => {
                record.morning_cash = Some(snapshot);
                record.morning_total = total;
            }
            StatusKind::Evening => {
                record.evening_cash = Some(snapshot);
                record.evening_total = Some(total);
                record.variance = Some(total - record.morning_total);
            }
        }
        record.recorded_at = recorded_at;
        record
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyStatus> {
        self.records.get(&date)
    }

    /// All records, most recent date first.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &DailyStatus> {
        self.records.values().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn insert(&mut self, status: DailyStatus) {
        self.records.insert(status.date, status);
    }
}
