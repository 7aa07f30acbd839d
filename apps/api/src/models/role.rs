use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleRow {
    pub id: Uuid,
    pub title: String,
    /// Stable identifier; quiz scoring and seed data reference roles by slug,
    /// never by display title.
    pub slug: String,
    pub description: String,
    pub demand_score: f64,
    pub growth_potential: f64,
    pub average_salary_min: Option<f64>,
    pub average_salary_max: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleRequiredSkillRow {
    pub id: Uuid,
    pub role_id: Uuid,
    pub skill_id: Uuid,
    /// critical | important | nice_to_have
    pub importance: String,
    pub minimum_level_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillGapAnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub overall_match_percentage: f64,
    /// not_ready | partially_ready | job_ready
    pub readiness_level: String,
    pub estimated_learning_weeks: i32,
    pub analysis_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MissingSkillRow {
    pub id: Uuid,
    pub gap_analysis_id: Uuid,
    pub skill_id: Uuid,
    pub required_level_id: Option<Uuid>,
    /// high | medium | low
    pub priority: String,
    pub estimated_learning_weeks: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecommendedRoleRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub match_percentage: f64,
    pub readiness_score: f64,
    pub missing_skills_count: i32,
    pub is_active: bool,
    pub recommendation_date: DateTime<Utc>,
}
