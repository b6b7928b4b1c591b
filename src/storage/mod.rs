//! Storage layer for rosters and saved rotation snapshots
//!
//! A thin abstraction over SQLite, organized into logical components:
//! - `models`: row types returned by listing queries
//! - `schema`: database connection and schema management
//! - `queries`: CRUD operations for players and rotation documents
//!
//! The analytics core never touches this layer; it is the real counterpart
//! of the backend the dashboard only simulated with timed promises.

pub mod models;
pub mod queries;
pub mod schema;


pub use models::RotationSummary;
pub use schema::RotationDatabase;

/// Env var that overrides the database path.
pub const DB_PATH_ENV_VAR: &str = "ROTATION_LAB_DB";
