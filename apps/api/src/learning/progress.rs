//! Roadmap item progress: pending → in_progress → completed (or skipped).
//! Completing an item marks the corresponding user skill learned.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::learning::RoadmapItemRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Completed => "completed",
            ItemStatus::Skipped => "skipped",
        }
    }
}

/// Completion over a roadmap's items; 0 when the roadmap is empty.
pub fn completion_percentage(completed: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (completed as f64 / total as f64) * 100.0
    }
}

/// Applies a status transition to a roadmap item, then refreshes the parent
/// roadmap's completion percentage. Completing an item upserts the user's
/// skill to learned (created at the lowest level when absent).
pub async fn set_item_status(
    pool: &PgPool,
    item_id: Uuid,
    status: ItemStatus,
) -> Result<RoadmapItemRow, AppError> {
    if status == ItemStatus::Pending {
        return Err(AppError::Validation(
            "Roadmap items cannot be reset to pending".to_string(),
        ));
    }

    let existing: Option<RoadmapItemRow> =
        sqlx::query_as("SELECT * FROM roadmap_items WHERE id = $1")
            .bind(item_id)
            .fetch_optional(pool)
            .await?;
    let existing =
        existing.ok_or_else(|| AppError::NotFound(format!("Roadmap item {item_id} not found")))?;

    let mut tx = pool.begin().await?;

    let updated: RoadmapItemRow = match status {
        ItemStatus::InProgress => {
            // Re-starting keeps the original started_date.
            sqlx::query_as(
                r#"
                UPDATE roadmap_items
                SET status = 'in_progress',
                    started_date = COALESCE(started_date, now())
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(item_id)
            .fetch_one(&mut *tx)
            .await?
        }
        ItemStatus::Completed => {
            let row: RoadmapItemRow = sqlx::query_as(
                r#"
                UPDATE roadmap_items
                SET status = 'completed', completed_date = now()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(item_id)
            .fetch_one(&mut *tx)
            .await?;

            let user_id: Uuid =
                sqlx::query_scalar("SELECT user_id FROM learning_roadmaps WHERE id = $1")
                    .bind(existing.roadmap_id)
                    .fetch_one(&mut *tx)
                    .await?;

            sqlx::query(
                r#"
                INSERT INTO user_skills
                    (user_id, skill_id, level_id, status, self_assessed,
                     date_marked_learned)
                VALUES ($1, $2,
                        (SELECT id FROM skill_levels ORDER BY level_order LIMIT 1),
                        'learned', TRUE, now())
                ON CONFLICT (user_id, skill_id) DO UPDATE SET
                    status = 'learned',
                    date_marked_learned = now()
                "#,
            )
            .bind(user_id)
            .bind(existing.skill_id)
            .execute(&mut *tx)
            .await?;

            row
        }
        ItemStatus::Skipped => {
            sqlx::query_as("UPDATE roadmap_items SET status = 'skipped' WHERE id = $1 RETURNING *")
                .bind(item_id)
                .fetch_one(&mut *tx)
                .await?
        }
        ItemStatus::Pending => unreachable!(),
    };

    let (completed, total): (i64, i64) = sqlx::query_as(
        r#"
        SELECT COUNT(*) FILTER (WHERE status = 'completed'), COUNT(*)
        FROM roadmap_items WHERE roadmap_id = $1
        "#,
    )
    .bind(existing.roadmap_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE learning_roadmaps
        SET completion_percentage = $1, last_updated = now()
        WHERE id = $2
        "#,
    )
    .bind(completion_percentage(completed, total))
    .bind(existing.roadmap_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        item_id = %item_id,
        status = status.as_str(),
        "Roadmap item updated"
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_empty_roadmap_is_zero() {
        assert_eq!(completion_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_completion_half() {
        assert_eq!(completion_percentage(2, 4), 50.0);
    }

    #[test]
    fn test_completion_full() {
        assert_eq!(completion_percentage(3, 3), 100.0);
    }
}
