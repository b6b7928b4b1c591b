//! Minutes-played aggregation per player and per period.

use crate::cli::types::{PeriodId, PlayerId};
use crate::model::{PlayerAssignment, Rotation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Minutes report for one player: game total plus a per-period breakdown
/// keyed by every period id of the rotation (zeros included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutesDistribution {
    pub player_id: PlayerId,
    pub total_minutes: f64,
    pub minutes_by_period: BTreeMap<PeriodId, f64>,
}

/// Aggregate on-court minutes for every player with an assignment.
///
/// A segment spanning multiple periods contributes its overlap with each, so
/// the per-period values always sum to the total (the periods partition the
/// game exactly).
pub fn compute_minutes_distribution(rotation: &Rotation) -> Vec<MinutesDistribution> {
    rotation
        .player_assignments
        .par_iter()
        .map(|pa| distribute_player(pa, rotation))
        .collect()
}

fn distribute_player(assignment: &PlayerAssignment, rotation: &Rotation) -> MinutesDistribution {
    let mut minutes_by_period: BTreeMap<PeriodId, f64> = rotation
        .periods
        .iter()
        .map(|p| (p.id.clone(), 0.0))
        .collect();

    let mut total_minutes = 0.0;
    for segment in assignment.segments.iter().filter(|s| s.on_court) {
        total_minutes += segment.duration_secs() as f64 / 60.0;

        for period in &rotation.periods {
            let overlap = segment.overlap_range(period.start_secs, period.end_secs);
            if overlap > 0 {
                *minutes_by_period.get_mut(&period.id).unwrap() += overlap as f64 / 60.0;
            }
        }
    }

    MinutesDistribution {
        player_id: assignment.player_id.clone(),
        total_minutes,
        minutes_by_period,
    }
}
