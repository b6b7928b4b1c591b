//! CRUD operations for players and rotation documents

use super::{models::RotationSummary, schema::RotationDatabase};
use crate::cli::types::{GameId, PlayerId, Position, RotationId, Skill};
use crate::model::{MinutesPolicy, Player, Rotation};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};

fn row_to_player(row: &Row<'_>) -> rusqlite::Result<(String, String, u8, String, String, u32, u32, u32)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn decode_player(
    (id, name, number, positions, skills, target, max, consecutive): (
        String,
        String,
        u8,
        String,
        String,
        u32,
        u32,
        u32,
    ),
) -> Result<Player> {
    let positions: Vec<Position> = serde_json::from_str(&positions)?;
    let skills: Vec<Skill> = serde_json::from_str(&skills)?;
    Ok(Player {
        id: PlayerId::new(id),
        name,
        number,
        positions,
        skills,
        minutes: MinutesPolicy {
            target,
            max,
            consecutive,
        },
    })
}

impl RotationDatabase {
    /// Insert or update a rostered player
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players
             (player_id, name, number, positions, skills,
              target_minutes, max_minutes, consecutive_minutes)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                player.id.as_str(),
                player.name,
                player.number,
                serde_json::to_string(&player.positions)?,
                serde_json::to_string(&player.skills)?,
                player.minutes.target,
                player.minutes.max,
                player.minutes.consecutive,
            ],
        )?;
        Ok(())
    }

    /// Get one player by id
    pub fn get_player(&self, id: &PlayerId) -> Result<Option<Player>> {
        let row = self
            .conn
            .query_row(
                "SELECT player_id, name, number, positions, skills,
                        target_minutes, max_minutes, consecutive_minutes
                 FROM players WHERE player_id = ?",
                params![id.as_str()],
                row_to_player,
            )
            .optional()?;

        row.map(decode_player).transpose()
    }

    /// List the whole roster in jersey-number order
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, number, positions, skills,
                    target_minutes, max_minutes, consecutive_minutes
             FROM players ORDER BY number, player_id",
        )?;

        let rows = stmt.query_map([], row_to_player)?;
        let mut players = Vec::new();
        for row in rows {
            players.push(decode_player(row?)?);
        }
        Ok(players)
    }

    /// Delete a player; returns true when a row was removed
    pub fn delete_player(&mut self, id: &PlayerId) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM players WHERE player_id = ?", params![id.as_str()])?;
        Ok(rows > 0)
    }

    /// Save a rotation snapshot, overwriting any previous save with the same
    /// id. The stored document is an independent copy; later edits to the
    /// builder's rotation do not touch it unless re-saved.
    pub fn save_rotation(&mut self, rotation: &Rotation) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let doc = serde_json::to_string(rotation)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO rotations
             (rotation_id, game_id, name, doc, player_count, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?,
                     COALESCE((SELECT created_at FROM rotations WHERE rotation_id = ?), ?),
                     ?)",
            params![
                rotation.id.as_str(),
                rotation.game_id.as_str(),
                rotation.name,
                doc,
                rotation.player_assignments.len() as u32,
                rotation.id.as_str(),
                now,
                now
            ],
        )?;
        Ok(())
    }

    /// Load a rotation snapshot by id
    pub fn load_rotation(&self, id: &RotationId) -> Result<Option<Rotation>> {
        let doc: Option<String> = self
            .conn
            .query_row(
                "SELECT doc FROM rotations WHERE rotation_id = ?",
                params![id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        doc.map(|d| Ok(serde_json::from_str(&d)?)).transpose()
    }

    /// List saved rotation snapshots, most recently updated first
    pub fn list_rotations(&self) -> Result<Vec<RotationSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT rotation_id, game_id, name, player_count, updated_at
             FROM rotations ORDER BY updated_at DESC, rotation_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(RotationSummary {
                id: RotationId::new(row.get::<_, String>(0)?),
                game_id: GameId::new(row.get::<_, String>(1)?),
                name: row.get(2)?,
                player_count: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        Ok(summaries)
    }

    /// Delete a rotation snapshot; returns true when a row was removed
    pub fn delete_rotation(&mut self, id: &RotationId) -> Result<bool> {
        let rows = self.conn.execute(
            "DELETE FROM rotations WHERE rotation_id = ?",
            params![id.as_str()],
        )?;
        Ok(rows > 0)
    }
}
