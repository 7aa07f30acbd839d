use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One canonical skill pair. Invariant: skill_1_id < skill_2_id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillCombinationRow {
    pub id: Uuid,
    pub skill_1_id: Uuid,
    pub skill_2_id: Uuid,
    pub co_occurrence_count: i64,
    /// Jaccard similarity over the two skills' job-posting sets (0-1).
    pub correlation_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MarketTrendRow {
    pub id: Uuid,
    pub skill_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub demand_count: i32,
    pub average_salary: Option<f64>,
    /// rising | stable | declining
    pub trend_direction: String,
}
