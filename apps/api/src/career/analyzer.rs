//! Gap-analysis persistence. Loads the inputs, scores via [`super::gap`],
//! and writes the snapshot rows inside a single transaction so a failed run
//! never leaves a half-rebuilt analysis behind.

use std::collections::HashSet;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::career::gap::{score_gap, GapReport, Importance, RequiredSkill};
use crate::config::ScoringConfig;
use crate::errors::AppError;
use crate::models::role::{RoleRequiredSkillRow, RoleRow};

/// Result of a persisted gap analysis.
#[derive(Debug, Clone)]
pub struct GapOutcome {
    pub gap_analysis_id: Uuid,
    pub report: GapReport,
}

/// Fetches a role or fails with NotFound.
pub async fn load_role(pool: &PgPool, role_id: Uuid) -> Result<RoleRow, AppError> {
    let role: Option<RoleRow> = sqlx::query_as("SELECT * FROM roles WHERE id = $1")
        .bind(role_id)
        .fetch_optional(pool)
        .await?;
    role.ok_or_else(|| AppError::NotFound(format!("Role {role_id} not found")))
}

/// The set of skill ids the user has marked learned.
pub async fn load_learned_skill_ids(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<HashSet<Uuid>, AppError> {
    let ids: Vec<Uuid> = sqlx::query_scalar(
        "SELECT skill_id FROM user_skills WHERE user_id = $1 AND status = 'learned'",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(ids.into_iter().collect())
}

pub async fn load_requirements(
    pool: &PgPool,
    role_id: Uuid,
) -> Result<Vec<RequiredSkill>, AppError> {
    let rows: Vec<RoleRequiredSkillRow> =
        sqlx::query_as("SELECT * FROM role_required_skills WHERE role_id = $1")
            .bind(role_id)
            .fetch_all(pool)
            .await?;
    Ok(rows
        .into_iter()
        .map(|r| RequiredSkill {
            skill_id: r.skill_id,
            importance: Importance::parse(&r.importance),
            minimum_level_id: r.minimum_level_id,
        })
        .collect())
}

/// Scores the user against the role and persists the snapshot: the
/// skill_gap_analyses row is upserted, its missing_skills children are
/// deleted and rebuilt, and the user_recommended_roles summary is upserted.
/// Rerunning with unchanged inputs yields identical rows.
pub async fn analyze_user_for_role(
    pool: &PgPool,
    scoring: &ScoringConfig,
    user_id: Uuid,
    role_id: Uuid,
) -> Result<GapOutcome, AppError> {
    load_role(pool, role_id).await?;
    let user_skills = load_learned_skill_ids(pool, user_id).await?;
    let required = load_requirements(pool, role_id).await?;

    let report = score_gap(&user_skills, &required, scoring);

    let mut tx = pool.begin().await?;

    let gap_analysis_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO skill_gap_analyses
            (user_id, role_id, overall_match_percentage, readiness_level,
             estimated_learning_weeks, analysis_date)
        VALUES ($1, $2, $3, $4, $5, now())
        ON CONFLICT (user_id, role_id) DO UPDATE SET
            overall_match_percentage = EXCLUDED.overall_match_percentage,
            readiness_level = EXCLUDED.readiness_level,
            estimated_learning_weeks = EXCLUDED.estimated_learning_weeks,
            analysis_date = now()
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(role_id)
    .bind(report.match_percentage)
    .bind(report.readiness_level.as_str())
    .bind(report.estimated_learning_weeks)
    .fetch_one(&mut *tx)
    .await?;

    // Snapshot semantics: children are rebuilt from scratch on every run.
    sqlx::query("DELETE FROM missing_skills WHERE gap_analysis_id = $1")
        .bind(gap_analysis_id)
        .execute(&mut *tx)
        .await?;

    for missing in &report.missing_skills {
        sqlx::query(
            r#"
            INSERT INTO missing_skills
                (gap_analysis_id, skill_id, required_level_id, priority,
                 estimated_learning_weeks)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(gap_analysis_id)
        .bind(missing.skill_id)
        .bind(missing.required_level_id)
        .bind(missing.priority.as_str())
        .bind(missing.estimated_learning_weeks)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        r#"
        INSERT INTO user_recommended_roles
            (user_id, role_id, match_percentage, readiness_score,
             missing_skills_count, is_active, recommendation_date)
        VALUES ($1, $2, $3, $4, $5, TRUE, now())
        ON CONFLICT (user_id, role_id) DO UPDATE SET
            match_percentage = EXCLUDED.match_percentage,
            readiness_score = EXCLUDED.readiness_score,
            missing_skills_count = EXCLUDED.missing_skills_count,
            is_active = TRUE,
            recommendation_date = now()
        "#,
    )
    .bind(user_id)
    .bind(role_id)
    .bind(report.match_percentage)
    .bind(report.readiness_score)
    .bind(report.missing_count())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        %user_id, %role_id,
        match_percentage = report.match_percentage,
        readiness = report.readiness_level.as_str(),
        "Gap analysis persisted"
    );

    Ok(GapOutcome {
        gap_analysis_id,
        report,
    })
}
