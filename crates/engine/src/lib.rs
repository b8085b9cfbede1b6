//! Cash ledger & reconciliation engine.
//!
//! The engine owns the whole mutable state of the till — the physical drawer,
//! the named balances, the transaction ledger and the daily reconciliation
//! records — and is the only component allowed to change it. Every mutation
//! is persisted to the key-value store before the in-memory state is updated,
//! so a failed write leaves both the database and the memory image untouched.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

pub use backup::Backup;
pub use balances::{BalanceSet, Source};
pub use denominations::{CATALOG, Denomination, DenominationClass};
pub use drawer::{CashCounts, Drawer};
pub use error::EngineError;
pub use money::Money;
pub use status::{DailyStatus, StatusBook, StatusKind};
pub use transactions::{ActivitySummary, Transaction, TransactionFilter, TransactionKind};

mod backup;
mod balances;
pub mod denominations;
mod drawer;
mod error;
mod money;
mod status;
mod store;
mod transactions;

use store::StoreKey;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug)]
pub struct Engine {
    drawer: Drawer,
    balances: BalanceSet,
    ledger: Vec<Transaction>,
    statuses: StatusBook,
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Validates and applies one transaction.
    ///
    /// When `denominations` is supplied the amount is derived from its
    /// valuation — the processor, not the caller, owns the consistency
    /// between the two. The drawer and the selected balance are updated with
    /// add/saturating-subtract semantics, and the immutable transaction is
    /// appended to the ledger. Nothing is mutated when validation fails.
    pub async fn apply(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        reason: &str,
        denominations: Option<CashCounts>,
        source: Source,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Transaction> {
        let amount = match &denominations {
            Some(counts) => denominations::value_of(counts),
            None => amount,
        };
        let tx = Transaction::new(kind, amount, reason, denominations, source, occurred_at)?;

        // Compute the post-transaction state first; the database write happens
        // before the in-memory state is replaced.
        let mut drawer = self.drawer.clone();
        if let Some(counts) = &tx.denominations {
            match tx.kind {
                TransactionKind::Add => drawer.add(counts),
                TransactionKind::Subtract => drawer.remove_saturating(counts),
            }
        }

        let mut balances = self.balances;
        if let Some(balance) = balances.slot_mut(tx.source) {
            match tx.kind {
                TransactionKind::Add => *balance += tx.amount,
                TransactionKind::Subtract => *balance = balance.clamped_sub(tx.amount),
            }
        }

        let mut ledger = self.ledger.clone();
        ledger.push(tx.clone());

        let db_tx = self.database.begin().await?;
        if tx.denominations.is_some() {
            store::write(&db_tx, StoreKey::Cash, serde_json::to_string(&drawer)?).await?;
        }
        if tx.source != Source::Cash {
            store::write(
                &db_tx,
                StoreKey::Balances,
                serde_json::to_string(&balances)?,
            )
            .await?;
        }
        store::write(
            &db_tx,
            StoreKey::Transactions,
            serde_json::to_string(&ledger)?,
        )
        .await?;
        db_tx.commit().await?;

        self.drawer = drawer;
        self.balances = balances;
        self.ledger = ledger;
        Ok(tx)
    }

    /// Upserts the morning or evening reconciliation snapshot for `date`
    /// from the current drawer contents.
    ///
    /// See [`StatusBook::record`] for the per-date state transitions.
    pub async fn record_status(
        &mut self,
        kind: StatusKind,
        date: NaiveDate,
        recorded_at: DateTime<Utc>,
    ) -> ResultEngine<DailyStatus> {
        let mut statuses = self.statuses.clone();
        let record = statuses
            .record(
                kind,
                date,
                self.drawer.counts().clone(),
                self.drawer.total(),
                recorded_at,
            )
            .clone();

        store::write(
            &self.database,
            StoreKey::DailyStatuses,
            serde_json::to_string(&statuses)?,
        )
        .await?;

        self.statuses = statuses;
        Ok(record)
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn balances(&self) -> &BalanceSet {
        &self.balances
    }

    /// Current physical drawer value, recomputed from the counts.
    pub fn drawer_total(&self) -> Money {
        self.drawer.total()
    }

    /// Drawer value plus the three named balances.
    pub fn total_balance(&self) -> Money {
        self.drawer.total() + self.balances.total()
    }

    /// Ledger transactions matching `filter`, newest first, at most `limit`.
    pub fn transactions(&self, filter: &TransactionFilter, limit: usize) -> Vec<&Transaction> {
        self.ledger
            .iter()
            .rev()
            .filter(|tx| filter.matches(tx))
            .take(limit)
            .collect()
    }

    /// Added/removed totals for transactions with `from <= occurred_at < to`.
    pub fn activity_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> ActivitySummary {
        let filter = TransactionFilter {
            from: Some(from),
            to: Some(to),
            ..Default::default()
        };
        self.ledger
            .iter()
            .filter(|tx| filter.matches(tx))
            .fold(ActivitySummary::default(), |mut summary, tx| {
                summary.record(tx);
                summary
            })
    }

    /// Added/removed totals over the whole ledger.
    pub fn lifetime_activity(&self) -> ActivitySummary {
        self.ledger
            .iter()
            .fold(ActivitySummary::default(), |mut summary, tx| {
                summary.record(tx);
                summary
            })
    }

    pub fn statuses(&self) -> &StatusBook {
        &self.statuses
    }

    pub fn status_for(&self, date: NaiveDate) -> Option<&DailyStatus> {
        self.statuses.get(date)
    }

    /// Copies the whole state into a backup bundle.
    pub fn export_state(&self, export_date: DateTime<Utc>) -> Backup {
        Backup {
            cash: Some(self.drawer.counts().clone()),
            balances: Some(self.balances),
            transactions: Some(self.ledger.clone()),
            daily_statuses: Some(self.statuses.iter_newest_first().cloned().collect()),
            export_date: Some(export_date),
        }
    }

    /// Replaces state wholesale from a backup bundle.
    ///
    /// Sections absent from the bundle keep their current value (partial
    /// restore). The current state stays fully intact when any write fails.
    pub async fn import_state(&mut self, backup: Backup) -> ResultEngine<()> {
        let drawer = match backup.cash {
            Some(counts) => Drawer::from_counts(counts),
            None => self.drawer.clone(),
        };
        let balances = backup.balances.unwrap_or(self.balances);
        let ledger = match backup.transactions {
            Some(transactions) => transactions,
            None => self.ledger.clone(),
        };
        let statuses = match backup.daily_statuses {
            Some(records) => {
                let mut book = StatusBook::new();
                for record in records {
                    book.insert(record);
                }
                book
            }
            None => self.statuses.clone(),
        };

        let db_tx = self.database.begin().await?;
        store::write(&db_tx, StoreKey::Cash, serde_json::to_string(&drawer)?).await?;
        store::write(
            &db_tx,
            StoreKey::Balances,
            serde_json::to_string(&balances)?,
        )
        .await?;
        store::write(
            &db_tx,
            StoreKey::Transactions,
            serde_json::to_string(&ledger)?,
        )
        .await?;
        store::write(
            &db_tx,
            StoreKey::DailyStatuses,
            serde_json::to_string(&statuses)?,
        )
        .await?;
        db_tx.commit().await?;

        self.drawer = drawer;
        self.balances = balances;
        self.ledger = ledger;
        self.statuses = statuses;
        Ok(())
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`, loading any previously persisted state.
    pub async fn build(self) -> ResultEngine<Engine> {
        let drawer = match store::read(&self.database, StoreKey::Cash).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Drawer::new(),
        };
        let balances = match store::read(&self.database, StoreKey::Balances).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => BalanceSet::default(),
        };
        let ledger = match store::read(&self.database, StoreKey::Transactions).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        let statuses = match store::read(&self.database, StoreKey::DailyStatuses).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => StatusBook::new(),
        };

        Ok(Engine {
            drawer,
            balances,
            ledger,
            statuses,
            database: self.database,
        })
    }
}
