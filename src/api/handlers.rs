//! Route handlers for the read API and the ingestion trigger.

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use super::responses::*;
use super::AppState;
use crate::cli::types::{StatType, Week};
use crate::error::{LeadersError, Result};
use crate::ingest::run_ingestion;

fn status_for(err: &LeadersError) -> StatusCode {
    match err {
        LeadersError::Validation { .. } => StatusCode::BAD_REQUEST,
        LeadersError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn into_response<T: serde::Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            let status = status_for(&err);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                error!(%err, "request failed");
            }
            (
                status,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET `/` and `/current`: leaders for the most recent stored week.
pub(super) async fn current_week(State(state): State<AppState>) -> Response {
    let result = async {
        let db = state.db.lock().await;
        let week = db
            .max_week(state.season)?
            .ok_or_else(|| LeadersError::not_found("No data found for current season"))?;
        let leaders = db.leaders_for_week(state.season, week)?;
        Ok(WeekLeadersBody {
            season: state.season.to_string(),
            week: week.as_u8(),
            leaders: leaders.into_iter().map(LeaderView::from).collect(),
        })
    }
    .await;
    into_response(result)
}

/// GET `/week/{n}`: leaders for one specific week.
pub(super) async fn week_leaders(
    State(state): State<AppState>,
    Path(week): Path<String>,
) -> Response {
    let result = async {
        let week = Week::from_str(&week)?.validate()?;

        let db = state.db.lock().await;
        let leaders = db.leaders_for_week(state.season, week)?;
        if leaders.is_empty() {
            return Err(LeadersError::not_found(format!(
                "No data found for week {week}"
            )));
        }
        Ok(WeekLeadersBody {
            season: state.season.to_string(),
            week: week.as_u8(),
            leaders: leaders.into_iter().map(LeaderView::from).collect(),
        })
    }
    .await;
    into_response(result)
}

/// GET `/season`: every stored week, grouped and sorted ascending.
pub(super) async fn season_leaders(State(state): State<AppState>) -> Response {
    let result = async {
        let db = state.db.lock().await;
        let records = db.season_leaders(state.season)?;
        if records.is_empty() {
            return Err(LeadersError::not_found("No data found for current season"));
        }

        let mut by_week: BTreeMap<u8, Vec<LeaderView>> = BTreeMap::new();
        for record in records {
            by_week
                .entry(record.week.as_u8())
                .or_default()
                .push(LeaderView::from(record));
        }

        Ok(SeasonBody {
            season: state.season.to_string(),
            total_weeks: by_week.len(),
            weeks: by_week
                .into_iter()
                .map(|(week, leaders)| WeekGroup { week, leaders })
                .collect(),
        })
    }
    .await;
    into_response(result)
}

/// GET `/stat/{type}`: one stat across all weeks.
pub(super) async fn stat_history(
    State(state): State<AppState>,
    Path(stat_type): Path<String>,
) -> Response {
    let result = async {
        let stat_type = StatType::from_str(&stat_type)?;

        let db = state.db.lock().await;
        let records = db.stat_history(state.season, stat_type)?;
        if records.is_empty() {
            return Err(LeadersError::not_found(format!(
                "No data found for {stat_type}"
            )));
        }

        Ok(StatHistoryBody {
            season: state.season.to_string(),
            stat_type,
            total_weeks: records.len(),
            history: records.into_iter().map(LeaderView::from).collect(),
        })
    }
    .await;
    into_response(result)
}

/// Parameters for the ingestion trigger; both fields optional.
#[derive(Debug, Default, Deserialize)]
pub struct IngestParams {
    pub season: Option<crate::cli::types::Season>,
    pub week: Option<Week>,
}

/// POST `/ingest`: run one ingestion pass. Week omitted means the
/// configured week policy derives it.
pub(super) async fn trigger_ingest(
    State(state): State<AppState>,
    payload: Option<Json<IngestParams>>,
) -> Response {
    let params = payload.map(|Json(p)| p).unwrap_or_default();
    let season = params.season.unwrap_or(state.season);

    let result = async {
        let mut db = state.db.lock().await;
        let report = run_ingestion(
            &state.espn,
            &mut db,
            season,
            params.week,
            state.week_policy.as_ref(),
        )
        .await?;

        Ok(IngestBody {
            message: "Successfully ingested NFL leaders".to_string(),
            season: report.season.to_string(),
            week: report.week.as_u8(),
            leaders: report.leaders,
        })
    }
    .await;
    into_response(result)
}

/// GET `/health`: liveness probe.
pub(super) async fn health() -> Response {
    (StatusCode::OK, Json(HealthBody { status: "healthy" })).into_response()
}

/// Anything else: 404 with the path in the error body.
pub(super) async fn unknown_route(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("Endpoint not found: {}", uri.path()),
        }),
    )
        .into_response()
}
