//! Skill co-occurrence analytics: which skills job postings ask for together.
//!
//! The rebuild is a batch entry point (invoked via the recalculate endpoint,
//! typically from a monthly scheduler). Pair counting is pure; persistence
//! swaps the whole table inside one transaction so readers see either the
//! old generation or the new one, never an empty table.

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::errors::AppError;
use crate::models::analytics::SkillCombinationRow;

/// Counts unordered skill pairs across job postings. Keys are canonical:
/// (min, max) by uuid ordering, so a pair is counted once regardless of the
/// order skills appear in a posting.
pub fn count_pairs(job_skill_sets: &[Vec<Uuid>]) -> HashMap<(Uuid, Uuid), i64> {
    let mut pairs: HashMap<(Uuid, Uuid), i64> = HashMap::new();
    for skills in job_skill_sets {
        for i in 0..skills.len() {
            for j in (i + 1)..skills.len() {
                let key = canonical_pair(skills[i], skills[j]);
                *pairs.entry(key).or_insert(0) += 1;
            }
        }
    }
    pairs
}

pub fn canonical_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Jaccard similarity between two skills' job-posting sets:
/// co / (jobs_1 + jobs_2 - co). Zero when either skill has no job links.
pub fn jaccard(co_occurrence: i64, jobs_with_1: i64, jobs_with_2: i64) -> f64 {
    if jobs_with_1 == 0 || jobs_with_2 == 0 {
        return 0.0;
    }
    co_occurrence as f64 / (jobs_with_1 + jobs_with_2 - co_occurrence) as f64
}

/// Recomputes the skill_combinations table from current active job postings
/// and returns the number of rows persisted.
///
/// Pairs below `min_co_occurrence` are dropped as noise. The table is a pure
/// function of the job data: rerunning without job changes reproduces the
/// same row set.
pub async fn recalculate_combinations(
    pool: &PgPool,
    scoring: &ScoringConfig,
) -> Result<i64, AppError> {
    let links: Vec<(Uuid, Uuid)> = sqlx::query_as(
        r#"
        SELECT js.job_posting_id, js.skill_id
        FROM job_skills js
        JOIN job_postings jp ON jp.id = js.job_posting_id
        WHERE jp.is_active
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut by_job: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for (job_id, skill_id) in links {
        by_job.entry(job_id).or_default().push(skill_id);
    }
    let job_skill_sets: Vec<Vec<Uuid>> = by_job.into_values().collect();

    let pairs = count_pairs(&job_skill_sets);

    // Per-skill link counts over all postings, matching the denominator the
    // trend data uses.
    let per_skill: Vec<(Uuid, i64)> =
        sqlx::query_as("SELECT skill_id, COUNT(*) FROM job_skills GROUP BY skill_id")
            .fetch_all(pool)
            .await?;
    let per_skill: HashMap<Uuid, i64> = per_skill.into_iter().collect();

    let mut rows: Vec<(Uuid, Uuid, i64, f64)> = pairs
        .into_iter()
        .filter(|&(_, count)| count >= scoring.min_co_occurrence)
        .map(|((skill_1, skill_2), count)| {
            let jobs_1 = per_skill.get(&skill_1).copied().unwrap_or(0);
            let jobs_2 = per_skill.get(&skill_2).copied().unwrap_or(0);
            (skill_1, skill_2, count, jaccard(count, jobs_1, jobs_2))
        })
        .collect();
    rows.sort_by(|a, b| b.2.cmp(&a.2));

    // Atomic swap: the old generation stays readable until commit.
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM skill_combinations")
        .execute(&mut *tx)
        .await?;
    for (skill_1, skill_2, count, correlation) in &rows {
        sqlx::query(
            r#"
            INSERT INTO skill_combinations
                (skill_1_id, skill_2_id, co_occurrence_count, correlation_score)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(skill_1)
        .bind(skill_2)
        .bind(count)
        .bind(correlation)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    let persisted = rows.len() as i64;
    info!(combinations = persisted, "Skill combinations recalculated");
    Ok(persisted)
}

/// Top combinations by co-occurrence.
pub async fn top_combinations(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<SkillCombinationRow>, AppError> {
    let rows: Vec<SkillCombinationRow> = sqlx::query_as(
        r#"
        SELECT * FROM skill_combinations
        ORDER BY co_occurrence_count DESC, correlation_score DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// All combinations a skill takes part in, strongest first.
pub async fn combinations_for_skill(
    pool: &PgPool,
    skill_id: Uuid,
) -> Result<Vec<SkillCombinationRow>, AppError> {
    let rows: Vec<SkillCombinationRow> = sqlx::query_as(
        r#"
        SELECT * FROM skill_combinations
        WHERE skill_1_id = $1 OR skill_2_id = $1
        ORDER BY co_occurrence_count DESC
        "#,
    )
    .bind(skill_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_pair_orders_both_ways() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(canonical_pair(a, b), canonical_pair(b, a));
        let (lo, hi) = canonical_pair(a, b);
        assert!(lo < hi);
    }

    #[test]
    fn test_two_shared_jobs_count_once_per_pair() {
        // Two jobs list {Python, Django}; a third lists only {Python}.
        let python = Uuid::new_v4();
        let django = Uuid::new_v4();
        let jobs = vec![
            vec![python, django],
            vec![django, python], // order within a posting is irrelevant
            vec![python],
        ];

        let pairs = count_pairs(&jobs);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[&canonical_pair(python, django)], 2);
    }

    #[test]
    fn test_pairs_within_one_job_are_quadratic() {
        let skills: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let pairs = count_pairs(&[skills]);
        // C(4,2) = 6
        assert_eq!(pairs.len(), 6);
        assert!(pairs.values().all(|&c| c == 1));
    }

    #[test]
    fn test_count_pairs_deterministic() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let jobs = vec![vec![a, b, c], vec![a, b]];
        assert_eq!(count_pairs(&jobs), count_pairs(&jobs));
    }

    #[test]
    fn test_jaccard_worked_example() {
        // Python in 3 jobs, Django in 2, together in 2: 2/(3+2-2) = 2/3
        let score = jaccard(2, 3, 2);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_zero_denominator_is_zero() {
        assert_eq!(jaccard(0, 0, 5), 0.0);
        assert_eq!(jaccard(0, 5, 0), 0.0);
        assert_eq!(jaccard(0, 0, 0), 0.0);
    }

    #[test]
    fn test_jaccard_bounds() {
        for (co, j1, j2) in [(1, 1, 1), (2, 3, 2), (1, 10, 10), (5, 5, 5)] {
            let score = jaccard(co, j1, j2);
            assert!((0.0..=1.0).contains(&score), "jaccard({co},{j1},{j2}) = {score}");
        }
    }

    #[test]
    fn test_identical_job_sets_score_one() {
        assert_eq!(jaccard(4, 4, 4), 1.0);
    }
}
