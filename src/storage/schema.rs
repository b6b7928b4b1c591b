//! Database schema and connection management

use super::DB_PATH_ENV_VAR;
use crate::error::RotationError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::PathBuf;

/// Database connection manager for the roster and saved rotations
pub struct RotationDatabase {
    pub(crate) conn: Connection,
}

impl RotationDatabase {
    /// Open the default database (creating it and its tables if needed).
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an in-memory database, mainly for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Resolve the database file path: `ROTATION_LAB_DB` when set, otherwise
    /// the platform data directory.
    fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let data_dir = data_dir().ok_or_else(|| RotationError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("rotation-lab").join("rotations.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Roster: typed columns, list-valued fields as JSON text
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                number INTEGER NOT NULL,
                positions TEXT NOT NULL,
                skills TEXT NOT NULL,
                target_minutes INTEGER NOT NULL,
                max_minutes INTEGER NOT NULL,
                consecutive_minutes INTEGER NOT NULL
            )",
            [],
        )?;

        // Saved snapshots: the full rotation document as JSON plus the
        // metadata the listing query needs
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS rotations (
                rotation_id TEXT PRIMARY KEY,
                game_id TEXT NOT NULL,
                name TEXT NOT NULL,
                doc TEXT NOT NULL,
                player_count INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_rotations_game
             ON rotations(game_id)",
            [],
        )?;

        Ok(())
    }
}
