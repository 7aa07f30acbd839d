use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::discovery::quiz::{QuizQuestion, QUESTIONS};
use crate::discovery::scoring::{recommend, DiscoveryRecommendation};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DiscoveryRequest {
    /// question_id -> selected option value
    pub responses: HashMap<String, String>,
    pub top_n: Option<usize>,
}

#[derive(Serialize)]
pub struct DiscoveryResponse {
    pub recommendations: Vec<DiscoveryRecommendation>,
}

/// GET /api/v1/discovery/questions
pub async fn handle_questions() -> Json<&'static [QuizQuestion]> {
    Json(QUESTIONS)
}

/// POST /api/v1/discovery/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(req): Json<DiscoveryRequest>,
) -> Result<Json<DiscoveryResponse>, AppError> {
    if req.responses.is_empty() {
        return Err(AppError::Validation(
            "At least one quiz response is required".to_string(),
        ));
    }
    let top_n = req.top_n.unwrap_or(5).clamp(1, 20);
    let recommendations = recommend(&state.db, &req.responses, top_n).await?;
    Ok(Json(DiscoveryResponse { recommendations }))
}
