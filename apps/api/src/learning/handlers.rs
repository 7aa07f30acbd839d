use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::learning::progress::{set_item_status, ItemStatus};
use crate::learning::roadmap::{generate_roadmap, load_roadmap, RoadmapOutcome};
use crate::models::learning::RoadmapItemRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRoadmapRequest {
    pub user_id: Uuid,
    pub role_id: Uuid,
}

#[derive(Deserialize)]
pub struct RoadmapQuery {
    pub user_id: Uuid,
    pub role_id: Uuid,
}

#[derive(Deserialize)]
pub struct ItemStatusRequest {
    pub status: ItemStatus,
}

/// POST /api/v1/roadmaps
/// Generates (or regenerates) the roadmap for a (user, role) pair.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(req): Json<GenerateRoadmapRequest>,
) -> Result<Json<RoadmapOutcome>, AppError> {
    let outcome = generate_roadmap(&state.db, &state.scoring, req.user_id, req.role_id).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/roadmaps?user_id=&role_id=
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Query(params): Query<RoadmapQuery>,
) -> Result<Json<RoadmapOutcome>, AppError> {
    let outcome = load_roadmap(&state.db, params.user_id, params.role_id).await?;
    Ok(Json(outcome))
}

/// PATCH /api/v1/roadmaps/items/:id/status
pub async fn handle_item_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ItemStatusRequest>,
) -> Result<Json<RoadmapItemRow>, AppError> {
    let item = set_item_status(&state.db, id, req.status).await?;
    Ok(Json(item))
}
