//! Reports API endpoints
//!
//! Buckets are built over the operator's local calendar: the last 7 days,
//! the last 4 weeks, or the last 6 months.

use api_types::report::{ReportBucket, ReportPeriod, ReportQuery, ReportResponse};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Datelike, Duration, Local, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::{ServerError, server::ServerState};
use engine::ActivitySummary;

fn day_start_utc(day: NaiveDate) -> DateTime<Utc> {
    match day.and_time(NaiveTime::MIN).and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)),
    }
}

fn bucket(label: String, summary: ActivitySummary) -> ReportBucket {
    ReportBucket {
        label,
        added_paise: summary.added.paise(),
        removed_paise: summary.removed.paise(),
        net_paise: summary.net().paise(),
        transactions: summary.transactions as u64,
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, ServerError> {
    let period = query.period.unwrap_or_default();
    let today = Local::now().date_naive();
    let engine = state.engine.read().await;

    let mut buckets = Vec::new();
    match period {
        ReportPeriod::Daily => {
            for i in (0..7i64).rev() {
                let day = today - Duration::days(i);
                let summary =
                    engine.activity_between(day_start_utc(day), day_start_utc(day + Duration::days(1)));
                buckets.push(bucket(day.format("%d %b").to_string(), summary));
            }
        }
        ReportPeriod::Weekly => {
            for i in (0..4i64).rev() {
                let end = today - Duration::days(i * 7);
                let start = end - Duration::days(6);
                let summary = engine
                    .activity_between(day_start_utc(start), day_start_utc(end + Duration::days(1)));
                buckets.push(bucket(
                    format!("{} - {}", start.format("%d %b"), end.format("%d %b")),
                    summary,
                ));
            }
        }
        ReportPeriod::Monthly => {
            for i in (0..6u32).rev() {
                let anchor = today
                    .checked_sub_months(Months::new(i))
                    .unwrap_or(today);
                let start = anchor.with_day(1).unwrap_or(anchor);
                let next = start
                    .checked_add_months(Months::new(1))
                    .unwrap_or(start);
                let summary =
                    engine.activity_between(day_start_utc(start), day_start_utc(next));
                buckets.push(bucket(start.format("%b %Y").to_string(), summary));
            }
        }
    }

    Ok(Json(ReportResponse { buckets }))
}
