// Infrastructure layer module
// Contains the SQLite adapters behind the domain ports

pub mod database;
pub mod repositories;
