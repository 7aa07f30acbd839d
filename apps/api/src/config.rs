use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub scoring: ScoringConfig,
}

/// Tunable scoring constants. Defaults match the values the platform has
/// always used; override via env only when experimenting with thresholds.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Match percentage at or above which a user is job-ready.
    pub job_ready_threshold: f64,
    /// Match percentage at or above which a user is partially ready.
    pub partially_ready_threshold: f64,
    /// Readiness score multiplier for partially-ready users.
    pub partially_ready_multiplier: f64,
    /// Readiness score multiplier for not-ready users.
    pub not_ready_multiplier: f64,
    /// Minimum number of jobs a skill pair must co-occur in to be persisted.
    pub min_co_occurrence: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            job_ready_threshold: 80.0,
            partially_ready_threshold: 50.0,
            partially_ready_multiplier: 0.8,
            not_ready_multiplier: 0.6,
            min_co_occurrence: 2,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut scoring = ScoringConfig::default();
        if let Ok(v) = std::env::var("MIN_CO_OCCURRENCE") {
            scoring.min_co_occurrence = v
                .parse::<i64>()
                .context("MIN_CO_OCCURRENCE must be an integer")?;
        }

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
