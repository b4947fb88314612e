use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::infrastructure::repositories::SqliteTeamRepository;

/// Request body for creating or renaming a team
#[derive(Debug, Deserialize)]
pub struct TeamNameRequest {
    pub name: String,
}

/// Team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Option<i64>,
    pub name: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
        }
    }
}

async fn existing_team(repo: &SqliteTeamRepository, id: i64) -> Result<Team, ApiError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(pool): State<SqlitePool>,
    Json(req): Json<TeamNameRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team_repo = SqliteTeamRepository::new(pool);
    let team = team_repo.save(&Team::new(&req.name)).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List the names of all teams, sorted
///
/// GET /api/teams
pub async fn list_team_names(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<String>>, ApiError> {
    let team_repo = SqliteTeamRepository::new(pool);
    let names = team_repo.find_all_team_names().await?;

    Ok(Json(names))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team_repo = SqliteTeamRepository::new(pool);
    let team = existing_team(&team_repo, id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Get a team by name
///
/// GET /api/teams/by-name/:name
pub async fn get_team_by_name(
    State(pool): State<SqlitePool>,
    Path(name): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team_repo = SqliteTeamRepository::new(pool);
    let team = team_repo
        .find_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", name.trim())))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Rename a team
///
/// PUT /api/teams/:id
pub async fn rename_team(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(req): Json<TeamNameRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team_repo = SqliteTeamRepository::new(pool);
    let mut team = existing_team(&team_repo, id).await?;

    team.rename(&req.name);
    let team = team_repo.save(&team).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let team_repo = SqliteTeamRepository::new(pool);
    let team = existing_team(&team_repo, id).await?;
    team_repo.delete(&team).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete every team
///
/// DELETE /api/teams
pub async fn delete_all_teams(State(pool): State<SqlitePool>) -> Result<StatusCode, ApiError> {
    let team_repo = SqliteTeamRepository::new(pool);
    team_repo.delete_all().await?;

    Ok(StatusCode::NO_CONTENT)
}
