use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    /// Derived from job market demand (0-100); recomputed by the popularity batch.
    pub popularity_score: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillLevelRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub level_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkillRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_id: Uuid,
    pub level_id: Option<Uuid>,
    /// not_started | in_progress | learned
    pub status: String,
    pub self_assessed: bool,
    pub date_added: DateTime<Utc>,
    pub date_marked_learned: Option<DateTime<Utc>>,
}
