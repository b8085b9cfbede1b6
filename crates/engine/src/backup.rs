//! The backup bundle: a single JSON document carrying the whole state.
//!
//! Field names follow the backup file format (`cash`, `balances`,
//! `transactions`, `dailyStatuses`, `exportDate`). Every field is optional on
//! decode so a partial bundle restores only the sections it carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    EngineError, ResultEngine, balances::BalanceSet, drawer::CashCounts, status::DailyStatus,
    transactions::Transaction,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Backup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash: Option<CashCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<BalanceSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_statuses: Option<Vec<DailyStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
}

impl Backup {
    /// Decodes a bundle, failing with [`EngineError::InvalidFormat`] when the
    /// document is not valid JSON or does not match the expected shape.
    pub fn from_json(raw: &str) -> ResultEngine<Self> {
        serde_json::from_str(raw)
            .map_err(|err| EngineError::InvalidFormat(format!("invalid backup bundle: {err}")))
    }

    pub fn to_json(&self) -> ResultEngine<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;

    #[test]
    fn decodes_partial_bundle() {
        let backup = Backup::from_json(r#"{"balances": {"csc": 1000, "csp": 0, "other": 50}}"#)
            .unwrap();

        assert!(backup.cash.is_none());
        assert!(backup.transactions.is_none());
        assert!(backup.daily_statuses.is_none());
        let balances = backup.balances.unwrap();
        assert_eq!(balances.csc, Money::from_paise(1000));
        assert_eq!(balances.other, Money::from_paise(50));
    }

    #[test]
    fn rejects_malformed_bundle() {
        assert!(matches!(
            Backup::from_json("{not json"),
            Err(EngineError::InvalidFormat(_))
        ));
        // Negative drawer counts do not fit the expected shape.
        assert!(matches!(
            Backup::from_json(r#"{"cash": {"500": -2}}"#),
            Err(EngineError::InvalidFormat(_))
        ));
    }

    #[test]
    fn field_names_are_camel_case() {
        let backup = Backup {
            export_date: Some("2026-03-14T08:00:00Z".parse().unwrap()),
            ..Default::default()
        };
        let raw = backup.to_json().unwrap();
        assert!(raw.contains("exportDate"));
    }
}
