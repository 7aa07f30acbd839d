use sqlx::PgPool;

use crate::config::{Config, ScoringConfig};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Full config kept for handlers that need more than scoring constants.
    #[allow(dead_code)]
    pub config: Config,
    /// Scoring constants used by the gap analyzer and the combination engine.
    pub scoring: ScoringConfig,
}
