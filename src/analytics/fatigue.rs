//! Fatigue simulation over a discretized game timeline.

use crate::cli::types::PlayerId;
use crate::model::{Player, PlayerAssignment, Rotation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Sampling interval for the fatigue curve.
pub const FATIGUE_STEP_SECS: u32 = 60;

/// Fatigue recovered per off-court step.
pub const RECOVERY_PER_STEP: f64 = 0.05;

/// Consecutive-minutes policy assumed for players missing from the roster.
pub const DEFAULT_CONSECUTIVE_MINS: u32 = 5;

/// Per-player fatigue curve: parallel timestamp/value arrays, one point per
/// sampling interval, values in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueModel {
    pub player_id: PlayerId,
    pub timestamps: Vec<u32>,
    pub fatigue_values: Vec<f64>,
}

/// Simulate fatigue for every player with an assignment.
///
/// Fatigue starts at 0 and is stepped once per [`FATIGUE_STEP_SECS`]: while
/// on court it accrues so that 100 is reached after `minutes.consecutive`
/// minutes of continuous play, off court it recovers at a fixed rate, and it
/// is clamped to `[0, 100]` after every step. Pure function of the rotation
/// and the players' consecutive-minutes policies; players are processed in
/// parallel with output order matching assignment order.
pub fn compute_fatigue(rotation: &Rotation, players: &[Player]) -> Vec<FatigueModel> {
    let total_secs = rotation.total_game_secs();
    rotation
        .player_assignments
        .par_iter()
        .map(|pa| {
            let consecutive_mins = players
                .iter()
                .find(|p| p.id == pa.player_id)
                .map(|p| p.minutes.consecutive)
                .unwrap_or(DEFAULT_CONSECUTIVE_MINS);
            simulate_player(pa, consecutive_mins, total_secs)
        })
        .collect()
}

fn simulate_player(
    assignment: &PlayerAssignment,
    consecutive_mins: u32,
    total_secs: u32,
) -> FatigueModel {
    let steps = (total_secs / FATIGUE_STEP_SECS) as usize;
    let mut timestamps = Vec::with_capacity(steps);
    let mut fatigue_values = Vec::with_capacity(steps);

    let accrual_per_step =
        100.0 / (consecutive_mins as f64 * 60.0) * FATIGUE_STEP_SECS as f64;

    let mut fatigue = 0.0_f64;
    let mut t = 0;
    while t < total_secs {
        let delta = if assignment.on_court_at(t) {
            accrual_per_step
        } else {
            -RECOVERY_PER_STEP
        };
        fatigue = (fatigue + delta).clamp(0.0, 100.0);

        timestamps.push(t);
        fatigue_values.push(fatigue);
        t += FATIGUE_STEP_SECS;
    }

    FatigueModel {
        player_id: assignment.player_id.clone(),
        timestamps,
        fatigue_values,
    }
}
