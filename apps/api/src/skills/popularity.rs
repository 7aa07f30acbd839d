//! Skill popularity scoring, derived from job market demand.

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// Normalization ceiling: a skill with this weighted link score maps to 100.
const MAX_WEIGHTED_SCORE: f64 = 1000.0;

/// Popularity on a 0-100 scale. Required-skill links count double.
pub fn popularity_score(required_links: i64, total_links: i64) -> f64 {
    let weighted = (required_links * 2 + total_links) as f64;
    ((weighted / MAX_WEIGHTED_SCORE) * 100.0).min(100.0)
}

/// Recomputes popularity_score for every skill from current job_skills links.
/// Skills with no links score 0. Returns the number of skills updated.
pub async fn recalculate_popularity(pool: &PgPool) -> Result<i64, AppError> {
    let counts: Vec<(Uuid, i64, i64)> = sqlx::query_as(
        r#"
        SELECT skill_id,
               COUNT(*) FILTER (WHERE is_required) AS required_links,
               COUNT(*) AS total_links
        FROM job_skills
        GROUP BY skill_id
        "#,
    )
    .fetch_all(pool)
    .await?;
    let counts: HashMap<Uuid, (i64, i64)> = counts
        .into_iter()
        .map(|(id, required, total)| (id, (required, total)))
        .collect();

    let skill_ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM skills")
        .fetch_all(pool)
        .await?;

    let mut tx = pool.begin().await?;
    let mut updated = 0i64;
    for skill_id in skill_ids {
        let (required, total) = counts.get(&skill_id).copied().unwrap_or((0, 0));
        sqlx::query("UPDATE skills SET popularity_score = $1 WHERE id = $2")
            .bind(popularity_score(required, total))
            .bind(skill_id)
            .execute(&mut *tx)
            .await?;
        updated += 1;
    }
    tx.commit().await?;

    info!(skills = updated, "Skill popularity recalculated");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_links_score_zero() {
        assert_eq!(popularity_score(0, 0), 0.0);
    }

    #[test]
    fn test_required_links_count_double() {
        // 10 required among 10 total: (10*2 + 10)/1000 * 100 = 3.0
        assert_eq!(popularity_score(10, 10), 3.0);
        // Same total, none required: 10/1000 * 100 = 1.0
        assert_eq!(popularity_score(0, 10), 1.0);
    }

    #[test]
    fn test_capped_at_100() {
        assert_eq!(popularity_score(1000, 2000), 100.0);
    }
}
