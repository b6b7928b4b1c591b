//! Rotation aggregate: per-player segment assignments for one game.

use crate::cli::types::{GameId, PlayerId, RotationId};
use crate::error::{Result, RotationError};
use crate::model::timeline::{default_periods, Period, TimeSegment, STANDARD_GAME_SECS};
use serde::{Deserialize, Serialize};

/// An ordered sequence of time segments for one player.
///
/// Invariant: segments are sorted ascending by start time and pairwise
/// non-overlapping. Any time not covered by a segment is implicitly
/// off-court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAssignment {
    pub player_id: PlayerId,
    pub segments: Vec<TimeSegment>,
}

impl PlayerAssignment {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            segments: Vec::new(),
        }
    }

    /// Whether the player is on court at instant `t`.
    pub fn on_court_at(&self, t: u32) -> bool {
        self.segments.iter().any(|seg| seg.on_court && seg.contains(t))
    }

    /// Total on-court seconds across all segments.
    pub fn on_court_secs(&self) -> u32 {
        self.segments
            .iter()
            .filter(|seg| seg.on_court)
            .map(TimeSegment::duration_secs)
            .sum()
    }
}

/// Check a proposed segment against an assignment's invariants.
///
/// Rejects empty or out-of-bounds segments (`InvalidSegment`) and segments
/// that share any time with an existing segment for the same player
/// (`OverlapConflict`). The assignment is not modified.
pub fn validate_segment(
    assignment: &PlayerAssignment,
    segment: &TimeSegment,
    total_game_secs: u32,
) -> Result<()> {
    if segment.start_secs >= segment.end_secs || segment.end_secs > total_game_secs {
        return Err(RotationError::InvalidSegment {
            start_secs: segment.start_secs,
            end_secs: segment.end_secs,
        });
    }
    if assignment.segments.iter().any(|s| s.overlap(segment) > 0) {
        return Err(RotationError::OverlapConflict {
            player_id: assignment.player_id.to_string(),
            start_secs: segment.start_secs,
            end_secs: segment.end_secs,
        });
    }
    Ok(())
}

/// A full-game substitution plan: ordered periods plus one assignment per
/// player. A player without an assignment sits the entire game.
///
/// Snapshots are owned by the builder session until saved; a saved copy is
/// an independent document and later edits do not touch it unless re-saved
/// under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub id: RotationId,
    pub game_id: GameId,
    pub name: String,
    pub periods: Vec<Period>,
    pub player_assignments: Vec<PlayerAssignment>,
}

impl Rotation {
    /// Create an empty rotation with the standard four quarters.
    pub fn with_default_periods(
        id: impl Into<String>,
        game_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: RotationId::new(id),
            game_id: GameId::new(game_id),
            name: name.into(),
            periods: default_periods(),
            player_assignments: Vec::new(),
        }
    }

    /// Total game length in seconds, taken from the last period.
    pub fn total_game_secs(&self) -> u32 {
        self.periods
            .last()
            .map(|p| p.end_secs)
            .unwrap_or(STANDARD_GAME_SECS)
    }

    pub fn assignment(&self, player_id: &PlayerId) -> Option<&PlayerAssignment> {
        self.player_assignments
            .iter()
            .find(|pa| &pa.player_id == player_id)
    }

    fn assignment_mut(&mut self, player_id: &PlayerId) -> &mut PlayerAssignment {
        // Vec scan keeps assignment order stable for reports
        let idx = self
            .player_assignments
            .iter()
            .position(|pa| &pa.player_id == player_id);
        match idx {
            Some(i) => &mut self.player_assignments[i],
            None => {
                self.player_assignments
                    .push(PlayerAssignment::new(player_id.clone()));
                self.player_assignments.last_mut().unwrap()
            }
        }
    }

    /// Add a validated segment to a player's assignment, creating the
    /// assignment if the player has none yet. Segments stay sorted by start
    /// time; on rejection the rotation is unchanged.
    pub fn add_segment(&mut self, player_id: &PlayerId, segment: TimeSegment) -> Result<()> {
        let total = self.total_game_secs();
        if let Some(existing) = self.assignment(player_id) {
            validate_segment(existing, &segment, total)?;
        } else {
            validate_segment(&PlayerAssignment::new(player_id.clone()), &segment, total)?;
        }
        let assignment = self.assignment_mut(player_id);
        assignment.segments.push(segment);
        assignment.segments.sort_by_key(|s| s.start_secs);
        Ok(())
    }

    /// Replace the segment at `index`, re-validating against the remaining
    /// segments. The rotation is unchanged on rejection.
    pub fn update_segment(
        &mut self,
        player_id: &PlayerId,
        index: usize,
        segment: TimeSegment,
    ) -> Result<()> {
        let total = self.total_game_secs();
        let Some(existing) = self.assignment(player_id) else {
            return Err(RotationError::UnknownPlayer {
                id: player_id.to_string(),
            });
        };
        if index >= existing.segments.len() {
            return Err(RotationError::InvalidSegment {
                start_secs: segment.start_secs,
                end_secs: segment.end_secs,
            });
        }
        let mut remainder = existing.clone();
        remainder.segments.remove(index);
        validate_segment(&remainder, &segment, total)?;

        let assignment = self.assignment_mut(player_id);
        assignment.segments[index] = segment;
        assignment.segments.sort_by_key(|s| s.start_secs);
        Ok(())
    }

    /// Remove the segment at `index`; returns true when a segment was removed.
    pub fn remove_segment(&mut self, player_id: &PlayerId, index: usize) -> bool {
        if let Some(pa) = self
            .player_assignments
            .iter_mut()
            .find(|pa| &pa.player_id == player_id)
        {
            if index < pa.segments.len() {
                pa.segments.remove(index);
                return true;
            }
        }
        false
    }

    /// Drop a player's whole assignment; returns true when one existed.
    pub fn remove_assignment(&mut self, player_id: &PlayerId) -> bool {
        let before = self.player_assignments.len();
        self.player_assignments.retain(|pa| &pa.player_id != player_id);
        self.player_assignments.len() < before
    }

    /// Replace all assignments, e.g. with optimizer output.
    pub fn set_assignments(&mut self, assignments: Vec<PlayerAssignment>) {
        self.player_assignments = assignments;
    }
}
