// Team domain module
// Contains the team entity and the errors raised while persisting it

#![allow(clippy::module_inception)]

pub mod errors;
pub mod team;

// Re-export main types for convenience
pub use errors::{TeamDaoError, TeamDaoResult};
pub use team::Team;
