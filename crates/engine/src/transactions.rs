//! Transaction primitives.
//!
//! A `Transaction` is an atomic event that moves value into or out of the
//! drawer and/or one named balance. Once created it is immutable and never
//! removed from the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, balances::Source, drawer::CashCounts, money::Money,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Add,
    Subtract,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            other => Err(EngineError::InvalidFormat(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Money,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominations: Option<CashCounts>,
    #[serde(default)]
    pub source: Source,
}

impl Transaction {
    /// Validates and builds a transaction record.
    ///
    /// The amount must be strictly positive and the reason non-empty once
    /// trimmed; violations fail before anything is recorded.
    pub(crate) fn new(
        kind: TransactionKind,
        amount: Money,
        reason: &str,
        denominations: Option<CashCounts>,
        source: Source,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(EngineError::InvalidReason(
                "reason must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            reason: reason.to_string(),
            occurred_at,
            denominations,
            source,
        })
    }
}

/// Filter applied when listing ledger transactions.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    pub kinds: Option<Vec<TransactionKind>>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// Case-insensitive substring match against the reason.
    pub reason_contains: Option<String>,
}

impl TransactionFilter {
    pub(crate) fn matches(&self, tx: &Transaction) -> bool {
        if let Some(kinds) = &self.kinds
            && !kinds.contains(&tx.kind)
        {
            return false;
        }
        if let Some(from) = self.from
            && tx.occurred_at < from
        {
            return false;
        }
        if let Some(to) = self.to
            && tx.occurred_at >= to
        {
            return false;
        }
        if let Some(needle) = &self.reason_contains
            && !tx
                .reason
                .to_lowercase()
                .contains(&needle.to_lowercase())
        {
            return false;
        }
        true
    }
}

/// Added/removed totals over a window of the ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivitySummary {
    pub added: Money,
    pub removed: Money,
    pub transactions: usize,
}

impl ActivitySummary {
    /// `added - removed`.
    #[must_use]
    pub fn net(&self) -> Money {
        self.added - self.removed
    }

    pub(crate) fn record(&mut self, tx: &Transaction) {
        match tx.kind {
            TransactionKind::Add => self.added += tx.amount,
            TransactionKind::Subtract => self.removed += tx.amount,
        }
        self.transactions += 1;
    }
}
