//! Quiz response scoring: additive weighted accumulation into per-role scores.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::discovery::quiz::{question_by_id, question_weight, RoleKey};
use crate::errors::AppError;
use crate::models::role::RoleRow;

/// Scores quiz responses against the static config.
///
/// The selected option's `related_roles` receive the question's full weight;
/// `boosts` receive half. Unknown question ids and unknown option values are
/// skipped. Output is sorted by score descending; ties break by RoleKey
/// declaration order, so results are deterministic.
pub fn score_responses(responses: &HashMap<String, String>) -> Vec<(RoleKey, f64)> {
    let mut scores: BTreeMap<RoleKey, f64> = BTreeMap::new();

    for (question_id, answer_value) in responses {
        let Some(question) = question_by_id(question_id) else {
            continue;
        };
        let Some(selected) = question.options.iter().find(|o| o.value == answer_value) else {
            continue;
        };

        let weight = question_weight(question_id);
        for role in selected.related_roles {
            *scores.entry(*role).or_insert(0.0) += weight;
        }
        for role in selected.boosts {
            *scores.entry(*role).or_insert(0.0) += weight / 2.0;
        }
    }

    let mut ranked: Vec<(RoleKey, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// One recommended role. `role` is None when the scored key has no matching
/// row in the roles table yet; it is still surfaced as a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryRecommendation {
    pub role_id: Option<Uuid>,
    pub role_key: RoleKey,
    pub role_title: String,
    pub match_score: f64,
    pub demand_score: f64,
    pub average_salary_min: Option<f64>,
}

/// Scores responses and resolves the top-N keys against the roles table by
/// slug equality.
pub async fn recommend(
    pool: &PgPool,
    responses: &HashMap<String, String>,
    top_n: usize,
) -> Result<Vec<DiscoveryRecommendation>, AppError> {
    let mut ranked = score_responses(responses);
    ranked.truncate(top_n);

    let slugs: Vec<String> = ranked.iter().map(|(key, _)| key.slug().to_string()).collect();
    let rows: Vec<RoleRow> = if slugs.is_empty() {
        Vec::new()
    } else {
        sqlx::query_as("SELECT * FROM roles WHERE slug = ANY($1)")
            .bind(&slugs)
            .fetch_all(pool)
            .await?
    };
    let by_slug: HashMap<String, RoleRow> =
        rows.into_iter().map(|r| (r.slug.clone(), r)).collect();

    Ok(ranked
        .into_iter()
        .map(|(key, score)| match by_slug.get(key.slug()) {
            Some(role) => DiscoveryRecommendation {
                role_id: Some(role.id),
                role_key: key,
                role_title: role.title.clone(),
                match_score: score,
                demand_score: role.demand_score,
                average_salary_min: role.average_salary_min,
            },
            None => DiscoveryRecommendation {
                role_id: None,
                role_key: key,
                role_title: key.title().to_string(),
                match_score: score,
                demand_score: 0.0,
                average_salary_min: None,
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_primary_interest_contributes_full_weight() {
        let ranked = score_responses(&responses(&[("primary_interest", "backend_systems")]));
        let backend = ranked
            .iter()
            .find(|(k, _)| *k == RoleKey::BackendDeveloper)
            .unwrap();
        assert_eq!(backend.1, 50.0);
    }

    #[test]
    fn test_boosts_contribute_half_weight() {
        let ranked = score_responses(&responses(&[("work_style", "alone")]));
        let backend = ranked
            .iter()
            .find(|(k, _)| *k == RoleKey::BackendDeveloper)
            .unwrap();
        assert_eq!(backend.1, 5.0);
    }

    #[test]
    fn test_scores_accumulate_across_questions() {
        let ranked = score_responses(&responses(&[
            ("primary_interest", "backend_systems"),
            ("work_style", "alone"),
            ("problem_solving", "logical_structured"),
        ]));
        // Backend Developer: 50 + 10/2 + 20/2 = 65, and top of the list.
        assert_eq!(ranked[0].0, RoleKey::BackendDeveloper);
        assert_eq!(ranked[0].1, 65.0);
    }

    #[test]
    fn test_unknown_question_and_option_skipped() {
        let ranked = score_responses(&responses(&[
            ("favorite_color", "blue"),
            ("work_style", "no_such_option"),
        ]));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_neutral_options_add_nothing() {
        let ranked = score_responses(&responses(&[("work_style", "both")]));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let ranked = score_responses(&responses(&[
            ("primary_interest", "work_with_data"),
            ("math_comfort", "love_math"),
        ]));
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_tie_break_is_declaration_order() {
        // All three related roles of one interest tie at 50; declaration
        // order decides.
        let ranked = score_responses(&responses(&[("primary_interest", "create_mobile_apps")]));
        let keys: Vec<RoleKey> = ranked.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                RoleKey::MobileDeveloper,
                RoleKey::IosDeveloper,
                RoleKey::AndroidDeveloper
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let r = responses(&[
            ("primary_interest", "ai_ml"),
            ("math_comfort", "love_math"),
            ("patience_detail", "patient_detail"),
        ]);
        assert_eq!(score_responses(&r), score_responses(&r));
    }
}
