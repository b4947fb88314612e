/// Team entity
///
/// A named group of people holding stand-up meetings together.
///
/// # Invariants
/// - Name is stored trimmed
/// - `id` is `None` until the team has been persisted
/// - Once persisted, the id never changes
///
/// # Example
/// ```
/// use standup_store::domain::team::Team;
///
/// let team = Team::new("  Platform  ");
///
/// assert_eq!(team.name(), "Platform");
/// assert!(team.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Option<i64>,
    name: String,
}

impl Team {
    /// Creates a new, not yet persisted team
    ///
    /// The name is trimmed but otherwise not validated here; blank and
    /// duplicate names are rejected by the repository when the team is saved.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            id: None,
            name: name.as_ref().trim().to_string(),
        }
    }

    /// Replaces the team's name, keeping its id
    pub fn rename(&mut self, name: impl AsRef<str>) {
        self.name = name.as_ref().trim().to_string();
    }

    /// Returns the team's ID, if it has been persisted
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: i64, name: String) -> Self {
        Self { id: Some(id), name }
    }
}
