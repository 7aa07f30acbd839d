//! User skill tracking: the not_started → in_progress → learned state machine.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skill::UserSkillRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    NotStarted,
    InProgress,
    Learned,
}

impl SkillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillStatus::NotStarted => "not_started",
            SkillStatus::InProgress => "in_progress",
            SkillStatus::Learned => "learned",
        }
    }
}

/// Sets the learning status of a skill for a user, creating the user_skills
/// row when absent. Marking learned stamps date_marked_learned; an optional
/// level can be set at the same time.
pub async fn set_skill_status(
    pool: &PgPool,
    user_id: Uuid,
    skill_id: Uuid,
    status: SkillStatus,
    level_id: Option<Uuid>,
) -> Result<UserSkillRow, AppError> {
    let skill_exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM skills WHERE id = $1")
        .bind(skill_id)
        .fetch_optional(pool)
        .await?;
    if skill_exists.is_none() {
        return Err(AppError::NotFound(format!("Skill {skill_id} not found")));
    }

    let row: UserSkillRow = sqlx::query_as(
        r#"
        INSERT INTO user_skills (user_id, skill_id, level_id, status, self_assessed,
                                 date_marked_learned)
        VALUES ($1, $2, $3, $4, TRUE,
                CASE WHEN $4 = 'learned' THEN now() END)
        ON CONFLICT (user_id, skill_id) DO UPDATE SET
            status = EXCLUDED.status,
            level_id = COALESCE(EXCLUDED.level_id, user_skills.level_id),
            date_marked_learned = CASE
                WHEN EXCLUDED.status = 'learned' THEN now()
                ELSE user_skills.date_marked_learned
            END
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(skill_id)
    .bind(level_id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await?;

    info!(%user_id, %skill_id, status = status.as_str(), "User skill status updated");
    Ok(row)
}

/// All skill rows for one user, most recently added first.
pub async fn list_user_skills(pool: &PgPool, user_id: Uuid) -> Result<Vec<UserSkillRow>, AppError> {
    let rows: Vec<UserSkillRow> =
        sqlx::query_as("SELECT * FROM user_skills WHERE user_id = $1 ORDER BY date_added DESC")
            .bind(user_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}
