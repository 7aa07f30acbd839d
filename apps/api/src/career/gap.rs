//! Pure skill-gap scoring. No I/O: callers load the user's learned skill set
//! and the role's requirements, score here, then persist via
//! [`crate::career::analyzer`]. Keeping the arithmetic free of the database
//! makes the readiness boundaries directly testable.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ScoringConfig;

/// How important a required skill is for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    Important,
    NiceToHave,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Critical => "critical",
            Importance::Important => "important",
            Importance::NiceToHave => "nice_to_have",
        }
    }

    /// Unknown importance strings degrade to nice-to-have rather than erroring;
    /// the requirements table predates the enum and may carry stale values.
    pub fn parse(s: &str) -> Importance {
        match s {
            "critical" => Importance::Critical,
            "important" => Importance::Important,
            _ => Importance::NiceToHave,
        }
    }

    /// Estimated weeks to learn a missing skill of this importance.
    pub fn learning_weeks(&self) -> i32 {
        match self {
            Importance::Critical => 4,
            Importance::Important => 2,
            Importance::NiceToHave => 1,
        }
    }

    /// Learning priority assigned to a missing skill of this importance.
    pub fn priority(&self) -> Priority {
        match self {
            Importance::Critical => Priority::High,
            Importance::Important => Priority::Medium,
            Importance::NiceToHave => Priority::Low,
        }
    }
}

/// Learning priority of a missing skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Priority {
        match s {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

/// Categorical readiness bucket derived from the match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    NotReady,
    PartiallyReady,
    JobReady,
}

impl ReadinessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLevel::NotReady => "not_ready",
            ReadinessLevel::PartiallyReady => "partially_ready",
            ReadinessLevel::JobReady => "job_ready",
        }
    }
}

/// One required skill for a role, as loaded from role_required_skills.
#[derive(Debug, Clone)]
pub struct RequiredSkill {
    pub skill_id: Uuid,
    pub importance: Importance,
    pub minimum_level_id: Option<Uuid>,
}

/// A required skill the user does not have yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkillGap {
    pub skill_id: Uuid,
    pub importance: Importance,
    pub priority: Priority,
    pub estimated_learning_weeks: i32,
    pub required_level_id: Option<Uuid>,
}

/// Result of scoring one (user, role) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub match_percentage: f64,
    pub readiness_level: ReadinessLevel,
    pub readiness_score: f64,
    pub matching_skill_ids: Vec<Uuid>,
    pub missing_skills: Vec<MissingSkillGap>,
    pub estimated_learning_weeks: i32,
}

impl GapReport {
    pub fn missing_count(&self) -> i32 {
        self.missing_skills.len() as i32
    }
}

/// Scores a user's learned skills against a role's requirements.
///
/// A role with zero requirements scores 0% by policy, not as an error.
/// Missing skills come back in requirement order; ordering for roadmaps
/// happens downstream where skill names are available.
pub fn score_gap(
    user_skills: &HashSet<Uuid>,
    required: &[RequiredSkill],
    config: &ScoringConfig,
) -> GapReport {
    let matching_skill_ids: Vec<Uuid> = required
        .iter()
        .filter(|r| user_skills.contains(&r.skill_id))
        .map(|r| r.skill_id)
        .collect();

    let missing_skills: Vec<MissingSkillGap> = required
        .iter()
        .filter(|r| !user_skills.contains(&r.skill_id))
        .map(|r| MissingSkillGap {
            skill_id: r.skill_id,
            importance: r.importance,
            priority: r.importance.priority(),
            estimated_learning_weeks: r.importance.learning_weeks(),
            required_level_id: r.minimum_level_id,
        })
        .collect();

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        (matching_skill_ids.len() as f64 / required.len() as f64) * 100.0
    };

    let (readiness_level, readiness_score) = if match_percentage >= config.job_ready_threshold {
        (ReadinessLevel::JobReady, match_percentage)
    } else if match_percentage >= config.partially_ready_threshold {
        (
            ReadinessLevel::PartiallyReady,
            match_percentage * config.partially_ready_multiplier,
        )
    } else {
        (
            ReadinessLevel::NotReady,
            match_percentage * config.not_ready_multiplier,
        )
    };

    let estimated_learning_weeks = missing_skills
        .iter()
        .map(|m| m.estimated_learning_weeks)
        .sum();

    GapReport {
        match_percentage,
        readiness_level,
        readiness_score,
        matching_skill_ids,
        missing_skills,
        estimated_learning_weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(skill_id: Uuid, importance: Importance) -> RequiredSkill {
        RequiredSkill {
            skill_id,
            importance,
            minimum_level_id: None,
        }
    }

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    /// Synthetic requirement set with `total` skills, `learned` of which the
    /// user has. All skills are `important`.
    fn scenario(learned: usize, total: usize) -> GapReport {
        let ids: Vec<Uuid> = (0..total).map(|_| Uuid::new_v4()).collect();
        let required: Vec<RequiredSkill> = ids
            .iter()
            .map(|id| req(*id, Importance::Important))
            .collect();
        let user: HashSet<Uuid> = ids.iter().take(learned).copied().collect();
        score_gap(&user, &required, &config())
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let user: HashSet<Uuid> = [Uuid::new_v4()].into_iter().collect();
        let report = score_gap(&user, &[], &config());
        assert_eq!(report.match_percentage, 0.0);
        assert_eq!(report.readiness_level, ReadinessLevel::NotReady);
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.estimated_learning_weeks, 0);
    }

    #[test]
    fn test_full_match_is_100_and_job_ready() {
        let report = scenario(4, 4);
        assert_eq!(report.match_percentage, 100.0);
        assert_eq!(report.readiness_level, ReadinessLevel::JobReady);
        assert_eq!(report.readiness_score, 100.0);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_match_percentage_bounded() {
        for (learned, total) in [(0, 5), (2, 5), (5, 5), (3, 7)] {
            let report = scenario(learned, total);
            assert!(report.match_percentage >= 0.0 && report.match_percentage <= 100.0);
        }
    }

    #[test]
    fn test_hundred_percent_iff_superset() {
        let report = scenario(3, 4);
        assert!(report.match_percentage < 100.0);
        assert!(!report.missing_skills.is_empty());
    }

    #[test]
    fn test_readiness_boundary_at_80_is_inclusive() {
        // 4/5 = 80.0 exactly
        let report = scenario(4, 5);
        assert_eq!(report.match_percentage, 80.0);
        assert_eq!(report.readiness_level, ReadinessLevel::JobReady);
        assert_eq!(report.readiness_score, 80.0);
    }

    #[test]
    fn test_just_below_80_is_partially_ready() {
        // 79/100 = 79.0
        let report = scenario(79, 100);
        assert_eq!(report.readiness_level, ReadinessLevel::PartiallyReady);
        assert!((report.readiness_score - 79.0 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_readiness_boundary_at_50_is_inclusive() {
        let report = scenario(1, 2);
        assert_eq!(report.match_percentage, 50.0);
        assert_eq!(report.readiness_level, ReadinessLevel::PartiallyReady);
        assert_eq!(report.readiness_score, 40.0);
    }

    #[test]
    fn test_just_below_50_is_not_ready() {
        let report = scenario(49, 100);
        assert_eq!(report.readiness_level, ReadinessLevel::NotReady);
        assert!((report.readiness_score - 49.0 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_backend_developer_worked_example() {
        // User knows Python and SQL. Backend Developer requires Python
        // (critical), Django (critical), SQL (important), Docker (nice to have).
        let python = Uuid::new_v4();
        let django = Uuid::new_v4();
        let sql = Uuid::new_v4();
        let docker = Uuid::new_v4();

        let user: HashSet<Uuid> = [python, sql].into_iter().collect();
        let required = vec![
            req(python, Importance::Critical),
            req(django, Importance::Critical),
            req(sql, Importance::Important),
            req(docker, Importance::NiceToHave),
        ];

        let report = score_gap(&user, &required, &config());
        assert_eq!(report.match_percentage, 50.0);
        assert_eq!(report.readiness_level, ReadinessLevel::PartiallyReady);
        assert_eq!(report.readiness_score, 40.0);
        assert_eq!(report.estimated_learning_weeks, 5);

        assert_eq!(report.missing_skills.len(), 2);
        let dj = report
            .missing_skills
            .iter()
            .find(|m| m.skill_id == django)
            .unwrap();
        assert_eq!(dj.priority, Priority::High);
        assert_eq!(dj.estimated_learning_weeks, 4);

        let dk = report
            .missing_skills
            .iter()
            .find(|m| m.skill_id == docker)
            .unwrap();
        assert_eq!(dk.priority, Priority::Low);
        assert_eq!(dk.estimated_learning_weeks, 1);
    }

    #[test]
    fn test_idempotent_scoring() {
        let ids: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
        let required: Vec<RequiredSkill> = ids
            .iter()
            .map(|id| req(*id, Importance::Critical))
            .collect();
        let user: HashSet<Uuid> = ids.iter().take(2).copied().collect();

        let a = score_gap(&user, &required, &config());
        let b = score_gap(&user, &required, &config());
        assert_eq!(a.match_percentage, b.match_percentage);
        assert_eq!(a.missing_skills.len(), b.missing_skills.len());
        assert_eq!(a.estimated_learning_weeks, b.estimated_learning_weeks);
    }

    #[test]
    fn test_importance_parse_round_trip() {
        for imp in [
            Importance::Critical,
            Importance::Important,
            Importance::NiceToHave,
        ] {
            assert_eq!(Importance::parse(imp.as_str()), imp);
        }
        // Unknown strings degrade to nice-to-have
        assert_eq!(Importance::parse("???"), Importance::NiceToHave);
    }

    #[test]
    fn test_priority_ordering_high_first() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
