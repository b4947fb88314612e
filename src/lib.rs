//! Stand-up Timer Store
//!
//! Persistence for the teams of a stand-up meeting timer: the team entity,
//! its repository port, the SQLite adapter behind it, and a small HTTP API
//! exposing it to a client UI.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
