use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::combinations::{
    combinations_for_skill, recalculate_combinations, top_combinations,
};
use crate::analytics::trends::recalculate_trend;
use crate::errors::AppError;
use crate::models::analytics::{MarketTrendRow, SkillCombinationRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct RecalculateResponse {
    pub combinations_persisted: i64,
}

#[derive(Deserialize)]
pub struct TrendRequest {
    pub skill_id: Uuid,
    pub month: u32,
    pub year: i32,
}

/// GET /api/v1/analytics/combinations?limit=
pub async fn handle_top_combinations(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Vec<SkillCombinationRow>>, AppError> {
    let limit = params.limit.unwrap_or(20).clamp(1, 200);
    Ok(Json(top_combinations(&state.db, limit).await?))
}

/// GET /api/v1/analytics/combinations/skill/:skill_id
pub async fn handle_skill_combinations(
    State(state): State<AppState>,
    Path(skill_id): Path<Uuid>,
) -> Result<Json<Vec<SkillCombinationRow>>, AppError> {
    Ok(Json(combinations_for_skill(&state.db, skill_id).await?))
}

/// POST /api/v1/analytics/combinations/recalculate
/// Batch entry point; invoked by the periodic scheduler.
pub async fn handle_recalculate_combinations(
    State(state): State<AppState>,
) -> Result<Json<RecalculateResponse>, AppError> {
    let combinations_persisted = recalculate_combinations(&state.db, &state.scoring).await?;
    Ok(Json(RecalculateResponse {
        combinations_persisted,
    }))
}

/// POST /api/v1/analytics/trends/recalculate
pub async fn handle_recalculate_trend(
    State(state): State<AppState>,
    Json(req): Json<TrendRequest>,
) -> Result<Json<MarketTrendRow>, AppError> {
    let trend = recalculate_trend(&state.db, req.skill_id, req.month, req.year).await?;
    Ok(Json(trend))
}
