//! Row types for storage listing queries

use crate::cli::types::{GameId, RotationId};
use serde::{Deserialize, Serialize};

/// Listing row for a saved rotation snapshot: metadata only, the document
/// itself is loaded on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationSummary {
    pub id: RotationId,
    pub game_id: GameId,
    pub name: String,
    pub player_count: u32,
    /// Unix seconds of the last save.
    pub updated_at: u64,
}
