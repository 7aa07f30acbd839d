//! Monthly market trends: per-skill demand counts, average salary, and a
//! direction relative to the previous month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analytics::MarketTrendRow;

/// Demand must move by more than 10% month-over-month to count as a trend.
const RISING_FACTOR: f64 = 1.1;
const DECLINING_FACTOR: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Stable,
    Declining,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Stable => "stable",
            TrendDirection::Declining => "declining",
        }
    }
}

/// Classifies this month's demand against the previous month's. With no
/// previous data point the direction is stable.
pub fn classify_direction(demand: i64, previous_demand: Option<i64>) -> TrendDirection {
    match previous_demand {
        None => TrendDirection::Stable,
        Some(prev) => {
            let prev = prev as f64;
            if demand as f64 > prev * RISING_FACTOR {
                TrendDirection::Rising
            } else if (demand as f64) < prev * DECLINING_FACTOR {
                TrendDirection::Declining
            } else {
                TrendDirection::Stable
            }
        }
    }
}

/// First day of the month and first day of the following month, bounding the
/// half-open period postings are counted over.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, end))
}

fn previous_period(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Recomputes and upserts the trend row for one skill and month.
pub async fn recalculate_trend(
    pool: &PgPool,
    skill_id: Uuid,
    month: u32,
    year: i32,
) -> Result<MarketTrendRow, AppError> {
    let (start, end) = month_bounds(year, month)
        .ok_or_else(|| AppError::Validation(format!("Invalid month {month}")))?;

    let skill_exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM skills WHERE id = $1")
        .bind(skill_id)
        .fetch_optional(pool)
        .await?;
    if skill_exists.is_none() {
        return Err(AppError::NotFound(format!("Skill {skill_id} not found")));
    }

    let demand_count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM job_skills js
        JOIN job_postings jp ON jp.id = js.job_posting_id
        WHERE js.skill_id = $1 AND jp.published_at >= $2 AND jp.published_at < $3
        "#,
    )
    .bind(skill_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    let average_salary: Option<f64> = sqlx::query_scalar(
        r#"
        SELECT AVG(jp.salary_min)
        FROM job_postings jp
        JOIN job_skills js ON js.job_posting_id = jp.id
        WHERE js.skill_id = $1
          AND jp.published_at >= $2 AND jp.published_at < $3
          AND jp.salary_min IS NOT NULL
        "#,
    )
    .bind(skill_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    let (prev_year, prev_month) = previous_period(year, month);
    let previous_demand: Option<i32> = sqlx::query_scalar(
        "SELECT demand_count FROM market_trends WHERE skill_id = $1 AND month = $2 AND year = $3",
    )
    .bind(skill_id)
    .bind(prev_month as i32)
    .bind(prev_year)
    .fetch_optional(pool)
    .await?;

    let direction = classify_direction(demand_count, previous_demand.map(i64::from));

    let trend: MarketTrendRow = sqlx::query_as(
        r#"
        INSERT INTO market_trends
            (skill_id, month, year, demand_count, average_salary, trend_direction)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (skill_id, month, year) DO UPDATE SET
            demand_count = EXCLUDED.demand_count,
            average_salary = EXCLUDED.average_salary,
            trend_direction = EXCLUDED.trend_direction
        RETURNING *
        "#,
    )
    .bind(skill_id)
    .bind(month as i32)
    .bind(year)
    .bind(demand_count as i32)
    .bind(average_salary)
    .bind(direction.as_str())
    .fetch_one(pool)
    .await?;

    info!(
        %skill_id, month, year,
        demand = demand_count,
        direction = direction.as_str(),
        "Market trend recalculated"
    );
    Ok(trend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_previous_month_is_stable() {
        assert_eq!(classify_direction(42, None), TrendDirection::Stable);
    }

    #[test]
    fn test_rising_requires_more_than_ten_percent() {
        assert_eq!(classify_direction(11, Some(10)), TrendDirection::Stable);
        assert_eq!(classify_direction(12, Some(10)), TrendDirection::Rising);
    }

    #[test]
    fn test_declining_requires_more_than_ten_percent_drop() {
        assert_eq!(classify_direction(9, Some(10)), TrendDirection::Stable);
        assert_eq!(classify_direction(8, Some(10)), TrendDirection::Declining);
    }

    #[test]
    fn test_month_bounds_mid_year() {
        let (start, end) = month_bounds(2025, 6).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    }

    #[test]
    fn test_month_bounds_december_wraps_year() {
        let (start, end) = month_bounds(2025, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(month_bounds(2025, 13).is_none());
        assert!(month_bounds(2025, 0).is_none());
    }

    #[test]
    fn test_previous_period_january_wraps() {
        assert_eq!(previous_period(2025, 1), (2024, 12));
        assert_eq!(previous_period(2025, 7), (2025, 6));
    }
}
