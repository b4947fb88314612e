use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamDaoError, TeamDaoResult};

/// Row shape of the `teams` table
#[derive(Debug, FromRow)]
struct TeamRow {
    id: i64,
    name: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(row.id, row.name)
    }
}

/// SQLite implementation of TeamRepository
///
/// Persists teams in the `teams` table created by
/// [`initialize_schema`](crate::infrastructure::database::initialize_schema).
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Creates a new SqliteTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for SQLite
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn create_new_team(&self, team: &Team) -> TeamDaoResult<Team> {
        let name = team.name().trim();
        if name.is_empty() {
            let msg = "Attempting to create a team with an empty name";
            tracing::warn!("{}", msg);
            return Err(TeamDaoError::InvalidName(msg.to_string()));
        }

        // Check and insert in one statement so concurrent saves cannot both pass
        tracing::debug!("Creating new team with a name of '{}'", name);
        let result = sqlx::query(
            r#"
            INSERT INTO teams (name)
            SELECT ?1
            WHERE NOT EXISTS (SELECT 1 FROM teams WHERE name = ?1)
            "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!("Attempting to create duplicate team with the name '{}'", name);
            return Err(TeamDaoError::DuplicateName(name.to_string()));
        }

        let id = result.last_insert_rowid();
        Ok(Team::from_persistence(id, name.to_string()))
    }

    async fn update_existing_team(&self, id: i64, team: &Team) -> TeamDaoResult<Team> {
        let name = team.name().trim();
        if name.is_empty() {
            let msg = "Attempting to rename a team to an empty name";
            tracing::warn!(team_id = id, "{}", msg);
            return Err(TeamDaoError::InvalidName(msg.to_string()));
        }

        tracing::debug!(team_id = id, "Updating team with the name of '{}'", name);
        let result = sqlx::query(
            r#"
            UPDATE teams SET name = ?1
            WHERE id = ?2
              AND NOT EXISTS (SELECT 1 FROM teams WHERE name = ?1 AND id != ?2)
            "#,
        )
        .bind(name)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            if self.name_taken_by_other(name, id).await? {
                tracing::warn!(team_id = id, "Attempting to rename team to the taken name '{}'", name);
                return Err(TeamDaoError::DuplicateName(name.to_string()));
            }
            tracing::warn!(team_id = id, "No team row matched the update");
        }

        Ok(Team::from_persistence(id, name.to_string()))
    }

    async fn name_taken_by_other(&self, name: &str, id: i64) -> TeamDaoResult<bool> {
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM teams WHERE name = ? AND id != ?)")
                .bind(name)
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(taken)
    }

    /// Returns the only row of `rows`, treating none or several as not found
    fn single(mut rows: Vec<TeamRow>) -> Option<Team> {
        if rows.len() == 1 {
            rows.pop().map(Team::from)
        } else {
            None
        }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn save(&self, team: &Team) -> TeamDaoResult<Team> {
        match team.id() {
            Some(id) => self.update_existing_team(id, team).await,
            None => self.create_new_team(team).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> TeamDaoResult<Option<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>("SELECT id, name FROM teams WHERE id = ?")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(Self::single(rows))
    }

    async fn find_by_name(&self, name: &str) -> TeamDaoResult<Option<Team>> {
        let name = name.trim();
        let rows = sqlx::query_as::<_, TeamRow>("SELECT id, name FROM teams WHERE name = ?")
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        let team = Self::single(rows);
        tracing::debug!(
            "{} found team with a name of '{}'",
            if team.is_some() { "Successfully" } else { "Unsuccessfully" },
            name
        );

        Ok(team)
    }

    async fn find_all_team_names(&self) -> TeamDaoResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Found {} teams", names.len());
        Ok(names)
    }

    async fn delete_all(&self) -> TeamDaoResult<()> {
        tracing::debug!("Deleting all teams");
        sqlx::query("DELETE FROM teams")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, team: &Team) -> TeamDaoResult<()> {
        tracing::debug!("Deleting team with the name of '{}'", team.name());
        if let Some(id) = team.id() {
            sqlx::query("DELETE FROM teams WHERE id = ?")
                .bind(id)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }
}
