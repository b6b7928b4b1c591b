//! Common utilities and helper functions shared across commands.

use crate::{
    cli::types::{GameId, PlayerId, RotationId},
    error::RotationError,
    model::{Player, Rotation},
    storage::RotationDatabase,
    Result,
};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;

/// Open the default database, mapping storage failures into the CLI error.
pub fn open_database() -> Result<RotationDatabase> {
    Ok(RotationDatabase::new()?)
}

/// Load a rotation snapshot or fail with `RotationNotFound`.
pub fn load_rotation(db: &RotationDatabase, id: &RotationId) -> Result<Rotation> {
    db.load_rotation(id)?
        .ok_or_else(|| RotationError::RotationNotFound { id: id.to_string() })
}

/// Fetch the roster snapshot the analytics take as input.
pub fn load_roster(db: &RotationDatabase) -> Result<Vec<Player>> {
    Ok(db.list_players()?)
}

/// Require that a player exists on the roster before a mutation references it.
pub fn require_player(db: &RotationDatabase, id: &PlayerId) -> Result<Player> {
    db.get_player(id)?
        .ok_or_else(|| RotationError::UnknownPlayer { id: id.to_string() })
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect()
}

/// Short random id for new snapshots, e.g. `rot-k3f8a2qj`.
pub fn generate_rotation_id() -> RotationId {
    RotationId::new(format!("rot-{}", random_suffix()))
}

/// Short random id for the game a new snapshot plans.
pub fn generate_game_id() -> GameId {
    GameId::new(format!("game-{}", random_suffix()))
}

/// Derive a roster id from a display name: `"John Smith"` -> `"john-smith"`.
pub fn slug_id(name: &str) -> PlayerId {
    let slug: String = name
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect();
    let collapsed = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    PlayerId::new(collapsed)
}

/// Game-clock seconds as `MM:SS` for table output.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Serialize a report as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_id() {
        assert_eq!(slug_id("John Smith").as_str(), "john-smith");
        assert_eq!(slug_id("  Dave   Williams ").as_str(), "dave-williams");
        assert_eq!(slug_id("O'Neal Jr.").as_str(), "oneal-jr");
        assert_eq!(slug_id("p1").as_str(), "p1");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(720), "12:00");
        assert_eq!(format_clock(2879), "47:59");
    }

    #[test]
    fn test_generate_rotation_id_shape() {
        let id = generate_rotation_id();
        assert!(id.as_str().starts_with("rot-"));
        assert_eq!(id.as_str().len(), 12);
        // ids are effectively unique across calls
        assert_ne!(id, generate_rotation_id());
    }
}
