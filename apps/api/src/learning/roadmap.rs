//! Roadmap generation: a gap analysis turned into an ordered learning plan.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::career::analyzer::analyze_user_for_role;
use crate::career::gap::{MissingSkillGap, Priority};
use crate::config::ScoringConfig;
use crate::errors::AppError;
use crate::models::learning::{LearningRoadmapRow, RoadmapItemRow};

/// One missing skill with its display name, ready for sequencing.
#[derive(Debug, Clone)]
pub struct PlannedSkill {
    pub skill_id: Uuid,
    pub skill_name: String,
    pub priority: Priority,
    pub estimated_weeks: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapOutcome {
    pub roadmap: LearningRoadmapRow,
    pub items: Vec<RoadmapItemRow>,
}

/// Orders missing skills for learning: highest priority first, then by name
/// so the sequence is stable across runs.
pub fn order_planned_skills(mut skills: Vec<PlannedSkill>) -> Vec<PlannedSkill> {
    skills.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.skill_name.cmp(&b.skill_name))
    });
    skills
}

/// Generates (or regenerates) the learning roadmap for a (user, role) pair.
///
/// Runs the gap analysis first, then rebuilds the roadmap from its missing
/// skills: prior items are deleted, fresh ones inserted with dense
/// sequence_order 1..N. The completion date is today plus the whole-plan
/// week estimate from the analysis.
pub async fn generate_roadmap(
    pool: &PgPool,
    scoring: &ScoringConfig,
    user_id: Uuid,
    role_id: Uuid,
) -> Result<RoadmapOutcome, AppError> {
    let outcome = analyze_user_for_role(pool, scoring, user_id, role_id).await?;

    let skill_ids: Vec<Uuid> = outcome
        .report
        .missing_skills
        .iter()
        .map(|m| m.skill_id)
        .collect();
    let names: HashMap<Uuid, String> = if skill_ids.is_empty() {
        HashMap::new()
    } else {
        let rows: Vec<(Uuid, String)> =
            sqlx::query_as("SELECT id, name FROM skills WHERE id = ANY($1)")
                .bind(&skill_ids)
                .fetch_all(pool)
                .await?;
        rows.into_iter().collect()
    };

    let planned = order_planned_skills(
        outcome
            .report
            .missing_skills
            .iter()
            .map(|m: &MissingSkillGap| PlannedSkill {
                skill_id: m.skill_id,
                skill_name: names.get(&m.skill_id).cloned().unwrap_or_default(),
                priority: m.priority,
                estimated_weeks: m.estimated_learning_weeks,
            })
            .collect(),
    );

    let estimated_completion_date = Utc::now().date_naive()
        + Duration::weeks(outcome.report.estimated_learning_weeks as i64);

    let mut tx = pool.begin().await?;

    let roadmap: LearningRoadmapRow = sqlx::query_as(
        r#"
        INSERT INTO learning_roadmaps
            (user_id, role_id, is_active, completion_percentage,
             estimated_completion_date, last_updated)
        VALUES ($1, $2, TRUE, 0.0, $3, now())
        ON CONFLICT (user_id, role_id) DO UPDATE SET
            is_active = TRUE,
            completion_percentage = 0.0,
            estimated_completion_date = EXCLUDED.estimated_completion_date,
            last_updated = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(role_id)
    .bind(estimated_completion_date)
    .fetch_one(&mut *tx)
    .await?;

    // Regeneration replaces the plan wholesale; no merge with prior items.
    sqlx::query("DELETE FROM roadmap_items WHERE roadmap_id = $1")
        .bind(roadmap.id)
        .execute(&mut *tx)
        .await?;

    let mut items = Vec::with_capacity(planned.len());
    for (idx, skill) in planned.iter().enumerate() {
        let item: RoadmapItemRow = sqlx::query_as(
            r#"
            INSERT INTO roadmap_items
                (roadmap_id, skill_id, sequence_order, status, priority,
                 estimated_duration_weeks)
            VALUES ($1, $2, $3, 'pending', $4, $5)
            RETURNING *
            "#,
        )
        .bind(roadmap.id)
        .bind(skill.skill_id)
        .bind((idx + 1) as i32)
        .bind(skill.priority.as_str())
        .bind(skill.estimated_weeks)
        .fetch_one(&mut *tx)
        .await?;
        items.push(item);
    }

    tx.commit().await?;

    info!(
        %user_id, %role_id,
        items = items.len(),
        weeks = outcome.report.estimated_learning_weeks,
        "Roadmap generated"
    );

    Ok(RoadmapOutcome { roadmap, items })
}

/// Loads a roadmap and its items for a (user, role) pair.
pub async fn load_roadmap(
    pool: &PgPool,
    user_id: Uuid,
    role_id: Uuid,
) -> Result<RoadmapOutcome, AppError> {
    let roadmap: Option<LearningRoadmapRow> =
        sqlx::query_as("SELECT * FROM learning_roadmaps WHERE user_id = $1 AND role_id = $2")
            .bind(user_id)
            .bind(role_id)
            .fetch_optional(pool)
            .await?;
    let roadmap = roadmap.ok_or_else(|| {
        AppError::NotFound(format!("No roadmap for user {user_id} and role {role_id}"))
    })?;

    let items: Vec<RoadmapItemRow> =
        sqlx::query_as("SELECT * FROM roadmap_items WHERE roadmap_id = $1 ORDER BY sequence_order")
            .bind(roadmap.id)
            .fetch_all(pool)
            .await?;

    Ok(RoadmapOutcome { roadmap, items })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planned(name: &str, priority: Priority) -> PlannedSkill {
        PlannedSkill {
            skill_id: Uuid::new_v4(),
            skill_name: name.to_string(),
            priority,
            estimated_weeks: priority as i32,
        }
    }

    #[test]
    fn test_priority_desc_then_name_asc() {
        let ordered = order_planned_skills(vec![
            planned("Terraform", Priority::Low),
            planned("Django", Priority::High),
            planned("Docker", Priority::Medium),
            planned("Ansible", Priority::Medium),
        ]);
        let names: Vec<&str> = ordered.iter().map(|p| p.skill_name.as_str()).collect();
        assert_eq!(names, vec!["Django", "Ansible", "Docker", "Terraform"]);
    }

    #[test]
    fn test_ordering_is_stable_across_runs() {
        let input = vec![
            planned("Kubernetes", Priority::High),
            planned("Django", Priority::High),
        ];
        let a = order_planned_skills(input.clone());
        let b = order_planned_skills(input);
        let names = |v: &[PlannedSkill]| {
            v.iter()
                .map(|p| p.skill_name.clone())
                .collect::<Vec<String>>()
        };
        assert_eq!(names(&a), names(&b));
        assert_eq!(a[0].skill_name, "Django");
    }

    #[test]
    fn test_empty_plan_stays_empty() {
        assert!(order_planned_skills(Vec::new()).is_empty());
    }
}
