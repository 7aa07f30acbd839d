//! Role recommendations and the per-requirement gap detail view.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::career::gap::{Importance, Priority};
use crate::errors::AppError;
use crate::models::role::RoleRow;

/// Weight of skill match vs market demand when ranking roles for a user.
const MATCH_WEIGHT: f64 = 0.7;
const DEMAND_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub role: RoleRow,
    pub match_percentage: f64,
    pub score: f64,
    pub missing_skills_count: i64,
}

/// Combined ranking score: mostly skill match, tempered by market demand so
/// a dead-end role the user happens to match does not top the list.
pub fn combined_score(match_percentage: f64, demand_score: f64) -> f64 {
    match_percentage * MATCH_WEIGHT + demand_score * DEMAND_WEIGHT
}

/// Ranks roles for a user by skill match and demand. Roles without any
/// requirements are skipped; a user with no learned skills gets the most
/// in-demand roles instead.
pub async fn recommend_roles(
    pool: &PgPool,
    user_id: Uuid,
    top_n: i64,
) -> Result<Vec<RoleRecommendation>, AppError> {
    let user_skills = super::analyzer::load_learned_skill_ids(pool, user_id).await?;

    if user_skills.is_empty() {
        let roles: Vec<RoleRow> =
            sqlx::query_as("SELECT * FROM roles ORDER BY demand_score DESC, title LIMIT $1")
                .bind(top_n)
                .fetch_all(pool)
                .await?;
        return Ok(roles
            .into_iter()
            .map(|role| {
                let score = combined_score(0.0, role.demand_score);
                RoleRecommendation {
                    role,
                    match_percentage: 0.0,
                    score,
                    missing_skills_count: 0,
                }
            })
            .collect());
    }

    let roles: Vec<RoleRow> = sqlx::query_as("SELECT * FROM roles")
        .fetch_all(pool)
        .await?;

    let requirement_rows: Vec<(Uuid, Uuid)> =
        sqlx::query_as("SELECT role_id, skill_id FROM role_required_skills")
            .fetch_all(pool)
            .await?;
    let mut requirements: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    for (role_id, skill_id) in requirement_rows {
        requirements.entry(role_id).or_default().insert(skill_id);
    }

    let mut recommendations: Vec<RoleRecommendation> = roles
        .into_iter()
        .filter_map(|role| {
            let required = requirements.get(&role.id)?;
            if required.is_empty() {
                return None;
            }
            let matching = required.intersection(&user_skills).count();
            let match_percentage = (matching as f64 / required.len() as f64) * 100.0;
            let score = combined_score(match_percentage, role.demand_score);
            let missing_skills_count = (required.len() - matching) as i64;
            Some(RoleRecommendation {
                role,
                match_percentage,
                score,
                missing_skills_count,
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(top_n as usize);
    Ok(recommendations)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingSkillDetail {
    pub skill_name: String,
    pub user_level: Option<String>,
    pub required_level: Option<String>,
    pub is_level_sufficient: bool,
    pub importance: Importance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkillDetail {
    pub skill_name: String,
    pub required_level: Option<String>,
    pub importance: Importance,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapDetail {
    pub matching_skills: Vec<MatchingSkillDetail>,
    pub missing_skills: Vec<MissingSkillDetail>,
    pub total_required: usize,
}

#[derive(Debug, sqlx::FromRow)]
struct RequirementDetailRow {
    skill_id: Uuid,
    skill_name: String,
    importance: String,
    required_level_name: Option<String>,
    required_level_order: Option<i32>,
}

#[derive(Debug, sqlx::FromRow)]
struct UserSkillDetailRow {
    skill_id: Uuid,
    level_name: Option<String>,
    level_order: Option<i32>,
}

/// Per-requirement view of one (user, role) pair: which requirements the user
/// covers (and at what level), and which are missing. Read-only; does not
/// write a snapshot.
pub async fn skill_gap_detail(
    pool: &PgPool,
    user_id: Uuid,
    role_id: Uuid,
) -> Result<GapDetail, AppError> {
    super::analyzer::load_role(pool, role_id).await?;

    let requirements: Vec<RequirementDetailRow> = sqlx::query_as(
        r#"
        SELECT rrs.skill_id, s.name AS skill_name, rrs.importance,
               sl.name AS required_level_name, sl.level_order AS required_level_order
        FROM role_required_skills rrs
        JOIN skills s ON s.id = rrs.skill_id
        LEFT JOIN skill_levels sl ON sl.id = rrs.minimum_level_id
        WHERE rrs.role_id = $1
        ORDER BY s.name
        "#,
    )
    .bind(role_id)
    .fetch_all(pool)
    .await?;

    let user_rows: Vec<UserSkillDetailRow> = sqlx::query_as(
        r#"
        SELECT us.skill_id, sl.name AS level_name, sl.level_order
        FROM user_skills us
        LEFT JOIN skill_levels sl ON sl.id = us.level_id
        WHERE us.user_id = $1 AND us.status = 'learned'
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    let user_levels: HashMap<Uuid, (Option<String>, i32)> = user_rows
        .into_iter()
        .map(|r| (r.skill_id, (r.level_name, r.level_order.unwrap_or(0))))
        .collect();

    let total_required = requirements.len();
    let mut matching_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for req in requirements {
        let importance = Importance::parse(&req.importance);
        match user_levels.get(&req.skill_id) {
            Some((user_level, user_order)) => {
                // Missing minimum level counts as the lowest rung.
                let required_order = req.required_level_order.unwrap_or(1);
                matching_skills.push(MatchingSkillDetail {
                    skill_name: req.skill_name,
                    user_level: user_level.clone(),
                    required_level: req.required_level_name,
                    is_level_sufficient: *user_order >= required_order,
                    importance,
                });
            }
            None => missing_skills.push(MissingSkillDetail {
                skill_name: req.skill_name,
                required_level: req.required_level_name,
                importance,
                priority: importance.priority(),
            }),
        }
    }

    Ok(GapDetail {
        matching_skills,
        missing_skills,
        total_required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_score_weights() {
        // 50% match on a role with demand 100: 50*0.7 + 100*0.3 = 65
        assert!((combined_score(50.0, 100.0) - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_match_low_demand_beats_no_match_high_demand() {
        assert!(combined_score(100.0, 0.0) > combined_score(0.0, 100.0));
    }
}
