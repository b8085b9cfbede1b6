//! Request/response types shared between the server and its clients.
//!
//! Monetary values travel as integer paise (`_paise` fields); timestamps are
//! RFC 3339 strings.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Counts per denomination id.
pub type CashCounts = HashMap<String, u64>;

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Add,
        Subtract,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Source {
        Csc,
        Csp,
        Other,
        #[default]
        Cash,
    }

    /// Request body for applying a transaction.
    ///
    /// `amount_paise` may be omitted when `denominations` is supplied: the
    /// engine derives the amount from the breakdown's valuation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub kind: TransactionKind,
        pub amount_paise: Option<i64>,
        pub reason: String,
        pub denominations: Option<CashCounts>,
        pub source: Option<Source>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCreated {
        pub id: Uuid,
        pub amount_paise: i64,
    }

    /// Filters for listing the ledger; all fields optional.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionList {
        pub kinds: Option<Vec<TransactionKind>>,
        pub from: Option<DateTime<FixedOffset>>,
        pub to: Option<DateTime<FixedOffset>>,
        /// Case-insensitive substring match against the reason.
        pub search: Option<String>,
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub kind: TransactionKind,
        pub amount_paise: i64,
        pub reason: String,
        /// RFC3339 timestamp.
        pub occurred_at: DateTime<FixedOffset>,
        pub denominations: Option<CashCounts>,
        pub source: Source,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }
}

pub mod status {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum StatusKind {
        Morning,
        Evening,
    }

    /// Request body for recording a morning/evening snapshot.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct StatusRecord {
        pub kind: StatusKind,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DailyStatusView {
        pub date: NaiveDate,
        pub morning_cash: Option<CashCounts>,
        pub morning_total_paise: i64,
        pub evening_cash: Option<CashCounts>,
        pub evening_total_paise: Option<i64>,
        pub variance_paise: Option<i64>,
        pub recorded_at: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StatusListResponse {
        pub statuses: Vec<DailyStatusView>,
    }
}

pub mod drawer {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DenominationClass {
        Note,
        Coin,
    }

    /// One denomination of the fixed catalog, for rendering.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DenominationView {
        pub id: String,
        pub face_value_paise: i64,
        pub class: DenominationClass,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DenominationsResponse {
        pub denominations: Vec<DenominationView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DrawerView {
        pub counts: CashCounts,
        pub total_paise: i64,
    }
}

pub mod stats {
    use super::*;

    /// The header summary: drawer value, named balances, combined total and
    /// lifetime ledger activity.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Overview {
        pub cash_paise: i64,
        pub csc_paise: i64,
        pub csp_paise: i64,
        pub other_paise: i64,
        pub total_paise: i64,
        pub lifetime_added_paise: i64,
        pub lifetime_removed_paise: i64,
    }
}

pub mod report {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ReportPeriod {
        #[default]
        Daily,
        Weekly,
        Monthly,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ReportQuery {
        pub period: Option<ReportPeriod>,
    }

    /// One time bucket of ledger activity.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReportBucket {
        pub label: String,
        pub added_paise: i64,
        pub removed_paise: i64,
        pub net_paise: i64,
        pub transactions: u64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReportResponse {
        pub buckets: Vec<ReportBucket>,
    }
}
