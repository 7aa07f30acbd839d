use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningRoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub is_active: bool,
    pub completion_percentage: f64,
    pub estimated_completion_date: Option<NaiveDate>,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapItemRow {
    pub id: Uuid,
    pub roadmap_id: Uuid,
    pub skill_id: Uuid,
    /// Dense 1..N within the roadmap.
    pub sequence_order: i32,
    /// pending | in_progress | completed | skipped
    pub status: String,
    /// high | medium | low
    pub priority: String,
    pub estimated_duration_weeks: i32,
    pub started_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
}
