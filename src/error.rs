//! Error types for the rotation-lab CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RotationError>;

#[derive(Error, Debug)]
pub enum RotationError {
    #[error("invalid segment: {start_secs}s-{end_secs}s is empty or outside the game clock")]
    InvalidSegment { start_secs: u32, end_secs: u32 },

    #[error("segment {start_secs}s-{end_secs}s overlaps an existing segment for player {player_id}")]
    OverlapConflict {
        player_id: String,
        start_secs: u32,
        end_secs: u32,
    },

    #[error("player {id} is not on the roster")]
    UnknownPlayer { id: String },

    #[error("rotation not found: {id}")]
    RotationNotFound { id: String },

    #[error("player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("invalid position: {value}")]
    InvalidPosition { value: String },

    #[error("invalid skill: {value}")]
    InvalidSkill { value: String },

    #[error("invalid minutes policy: target {target} must be <= max {max} and consecutive {consecutive} > 0")]
    InvalidMinutesPolicy {
        target: u32,
        max: u32,
        consecutive: u32,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for RotationError {
    fn from(err: anyhow::Error) -> Self {
        RotationError::Storage {
            message: err.to_string(),
        }
    }
}
