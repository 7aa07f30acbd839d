use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skill::{SkillLevelRow, SkillRow, UserSkillRow};
use crate::skills::popularity::recalculate_popularity;
use crate::skills::tracking::{list_user_skills, set_skill_status, SkillStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct SkillStatusRequest {
    pub user_id: Uuid,
    pub status: SkillStatus,
    pub level_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct PopularityResponse {
    pub skills_updated: i64,
}

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillRow>>, AppError> {
    let skills: Vec<SkillRow> =
        sqlx::query_as("SELECT * FROM skills ORDER BY popularity_score DESC, name")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(skills))
}

/// GET /api/v1/skills/levels
pub async fn handle_list_levels(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillLevelRow>>, AppError> {
    let levels: Vec<SkillLevelRow> =
        sqlx::query_as("SELECT * FROM skill_levels ORDER BY level_order")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(levels))
}

/// GET /api/v1/skills/user?user_id=
pub async fn handle_user_skills(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<UserSkillRow>>, AppError> {
    Ok(Json(list_user_skills(&state.db, params.user_id).await?))
}

/// PATCH /api/v1/skills/user/:skill_id/status
pub async fn handle_skill_status(
    State(state): State<AppState>,
    Path(skill_id): Path<Uuid>,
    Json(req): Json<SkillStatusRequest>,
) -> Result<Json<UserSkillRow>, AppError> {
    let row = set_skill_status(&state.db, req.user_id, skill_id, req.status, req.level_id).await?;
    Ok(Json(row))
}

/// POST /api/v1/skills/popularity/recalculate
/// Batch entry point; invoked by the periodic scheduler.
pub async fn handle_recalculate_popularity(
    State(state): State<AppState>,
) -> Result<Json<PopularityResponse>, AppError> {
    let skills_updated = recalculate_popularity(&state.db).await?;
    Ok(Json(PopularityResponse { skills_updated }))
}
