//! Liveness endpoint for the board server.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// The board is usable only while its SQLite file answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    Ok,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct BoardHealth {
    pub status: BoardStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl BoardHealth {
    fn from_db(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                BoardStatus::Ok
            } else {
                BoardStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn board_health(State(state): State<AppState>) -> Json<BoardHealth> {
    let db_healthy = match planboard_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database did not answer health check");
            false
        }
    };
    Json(BoardHealth::from_db(db_healthy))
}

/// ```text
/// GET /health   -> board_health
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(board_health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_degrades_status() {
        let health = BoardHealth::from_db(false);
        assert_eq!(health.status, BoardStatus::Degraded);

        let json = serde_json::to_value(BoardHealth::from_db(true)).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["db_healthy"], true);
    }
}
