use async_trait::async_trait;

use crate::domain::team::{Team, TeamDaoResult};

/// Repository trait for the Team entity
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team: insert when it has no id, update otherwise
    ///
    /// Returns the persisted team, carrying the id assigned by the store on insert.
    /// Fails with `InvalidName` for blank names and `DuplicateName` when another
    /// team already uses the name.
    async fn save(&self, team: &Team) -> TeamDaoResult<Team>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: i64) -> TeamDaoResult<Option<Team>>;

    /// Find a team by its (trimmed) name
    async fn find_by_name(&self, name: &str) -> TeamDaoResult<Option<Team>>;

    /// Names of all teams, in ascending order
    async fn find_all_team_names(&self) -> TeamDaoResult<Vec<String>>;

    /// Delete every team
    async fn delete_all(&self) -> TeamDaoResult<()>;

    /// Delete a team; does nothing if it was never persisted
    async fn delete(&self, team: &Team) -> TeamDaoResult<()>;
}
