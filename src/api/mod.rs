// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;

use handlers::{health_check, teams};

/// Builds the application router over a SQLite pool
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/teams",
            post(teams::create_team)
                .get(teams::list_team_names)
                .delete(teams::delete_all_teams),
        )
        .route("/api/teams/by-name/:name", get(teams::get_team_by_name))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::rename_team)
                .delete(teams::delete_team),
        )
        .with_state(pool)
}
