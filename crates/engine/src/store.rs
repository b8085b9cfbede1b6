//! Key-value persistence for the engine state.
//!
//! The whole state lives under four fixed keys in a single `store` table,
//! each holding one JSON document. The engine reads all keys at startup and
//! rewrites the affected keys on every state change.

use sea_orm::{
    ConnectionTrait, DbErr, entity::prelude::*, sea_query::OnConflict, ActiveValue,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The fixed keys the engine persists under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StoreKey {
    Cash,
    Balances,
    Transactions,
    DailyStatuses,
}

impl StoreKey {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Balances => "balances",
            Self::Transactions => "transactions",
            Self::DailyStatuses => "daily_statuses",
        }
    }
}

pub(crate) async fn read<C: ConnectionTrait>(
    db: &C,
    key: StoreKey,
) -> Result<Option<String>, DbErr> {
    Entity::find_by_id(key.as_str())
        .one(db)
        .await
        .map(|model| model.map(|model| model.value))
}

pub(crate) async fn write<C: ConnectionTrait>(
    db: &C,
    key: StoreKey,
    value: String,
) -> Result<(), DbErr> {
    let model = ActiveModel {
        key: ActiveValue::Set(key.as_str().to_string()),
        value: ActiveValue::Set(value),
    };
    Entity::insert(model)
        .on_conflict(
            OnConflict::column(Column::Key)
                .update_column(Column::Value)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}
