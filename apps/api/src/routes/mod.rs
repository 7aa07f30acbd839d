pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::career::handlers as career;
use crate::discovery::handlers as discovery;
use crate::learning::handlers as learning;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skills
        .route("/api/v1/skills", get(skills::handle_list_skills))
        .route("/api/v1/skills/levels", get(skills::handle_list_levels))
        .route("/api/v1/skills/user", get(skills::handle_user_skills))
        .route(
            "/api/v1/skills/user/:skill_id/status",
            patch(skills::handle_skill_status),
        )
        .route(
            "/api/v1/skills/popularity/recalculate",
            post(skills::handle_recalculate_popularity),
        )
        // Career: roles, gap analysis, recommendations
        .route("/api/v1/roles", get(career::handle_list_roles))
        .route("/api/v1/roles/:id", get(career::handle_get_role))
        .route("/api/v1/roles/:id/analyze", get(career::handle_analyze_role))
        .route("/api/v1/roles/:id/gaps", get(career::handle_gap_detail))
        .route(
            "/api/v1/roles/:id/analysis",
            get(career::handle_saved_analysis),
        )
        .route(
            "/api/v1/recommendations",
            get(career::handle_recommendations),
        )
        .route(
            "/api/v1/recommendations/saved",
            get(career::handle_saved_recommendations),
        )
        // Learning roadmaps
        .route(
            "/api/v1/roadmaps",
            post(learning::handle_generate_roadmap).get(learning::handle_get_roadmap),
        )
        .route(
            "/api/v1/roadmaps/items/:id/status",
            patch(learning::handle_item_status),
        )
        // Analytics: combinations and trends
        .route(
            "/api/v1/analytics/combinations",
            get(analytics::handle_top_combinations),
        )
        .route(
            "/api/v1/analytics/combinations/skill/:skill_id",
            get(analytics::handle_skill_combinations),
        )
        .route(
            "/api/v1/analytics/combinations/recalculate",
            post(analytics::handle_recalculate_combinations),
        )
        .route(
            "/api/v1/analytics/trends/recalculate",
            post(analytics::handle_recalculate_trend),
        )
        // Career discovery quiz
        .route(
            "/api/v1/discovery/questions",
            get(discovery::handle_questions),
        )
        .route(
            "/api/v1/discovery/recommendations",
            post(discovery::handle_recommendations),
        )
        .with_state(state)
}
