use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::career::analyzer::{self, analyze_user_for_role};
use crate::career::gap::GapReport;
use crate::career::recommend::{recommend_roles, skill_gap_detail, GapDetail, RoleRecommendation};
use crate::errors::AppError;
use crate::models::role::{
    MissingSkillRow, RoleRequiredSkillRow, RoleRow, SkillGapAnalysisRow, UserRecommendedRoleRow,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct RecommendationQuery {
    pub user_id: Uuid,
    pub top_n: Option<i64>,
}

#[derive(Serialize)]
pub struct RoleDetailResponse {
    pub role: RoleRow,
    pub required_skills: Vec<RoleRequiredSkillRow>,
}

#[derive(Serialize)]
pub struct GapAnalysisResponse {
    pub gap_analysis_id: Uuid,
    pub role: RoleRow,
    pub report: GapReport,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub count: usize,
    pub recommendations: Vec<RoleRecommendation>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleRow>>, AppError> {
    let roles: Vec<RoleRow> =
        sqlx::query_as("SELECT * FROM roles ORDER BY demand_score DESC, title")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(roles))
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoleDetailResponse>, AppError> {
    let role = analyzer::load_role(&state.db, id).await?;
    let required_skills: Vec<RoleRequiredSkillRow> =
        sqlx::query_as("SELECT * FROM role_required_skills WHERE role_id = $1")
            .bind(id)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(RoleDetailResponse {
        role,
        required_skills,
    }))
}

/// GET /api/v1/roles/:id/analyze?user_id=
/// Runs the gap analysis and persists the snapshot rows.
pub async fn handle_analyze_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<GapAnalysisResponse>, AppError> {
    let role = analyzer::load_role(&state.db, id).await?;
    let outcome = analyze_user_for_role(&state.db, &state.scoring, params.user_id, id).await?;
    Ok(Json(GapAnalysisResponse {
        gap_analysis_id: outcome.gap_analysis_id,
        role,
        report: outcome.report,
    }))
}

/// GET /api/v1/roles/:id/gaps?user_id=
pub async fn handle_gap_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<GapDetail>, AppError> {
    let detail = skill_gap_detail(&state.db, params.user_id, id).await?;
    Ok(Json(detail))
}

#[derive(Serialize)]
pub struct SavedAnalysisResponse {
    pub analysis: SkillGapAnalysisRow,
    pub missing_skills: Vec<MissingSkillRow>,
}

/// GET /api/v1/roles/:id/analysis?user_id=
/// Returns the last persisted gap analysis without recomputing it.
pub async fn handle_saved_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedAnalysisResponse>, AppError> {
    let analysis: Option<SkillGapAnalysisRow> =
        sqlx::query_as("SELECT * FROM skill_gap_analyses WHERE user_id = $1 AND role_id = $2")
            .bind(params.user_id)
            .bind(id)
            .fetch_optional(&state.db)
            .await?;
    let analysis = analysis.ok_or_else(|| {
        AppError::NotFound(format!(
            "No gap analysis for user {} and role {id}",
            params.user_id
        ))
    })?;

    let missing_skills: Vec<MissingSkillRow> = sqlx::query_as(
        "SELECT * FROM missing_skills WHERE gap_analysis_id = $1 ORDER BY priority, id",
    )
    .bind(analysis.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(SavedAnalysisResponse {
        analysis,
        missing_skills,
    }))
}

/// GET /api/v1/recommendations/saved?user_id=
/// Returns the persisted recommendation summaries written by past analyses.
pub async fn handle_saved_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<UserRecommendedRoleRow>>, AppError> {
    let rows: Vec<UserRecommendedRoleRow> = sqlx::query_as(
        r#"
        SELECT * FROM user_recommended_roles
        WHERE user_id = $1 AND is_active
        ORDER BY match_percentage DESC, readiness_score DESC
        "#,
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/v1/recommendations?user_id=&top_n=
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let top_n = params.top_n.unwrap_or(10).clamp(1, 50);
    let recommendations = recommend_roles(&state.db, params.user_id, top_n).await?;
    Ok(Json(RecommendationsResponse {
        count: recommendations.len(),
        recommendations,
    }))
}
