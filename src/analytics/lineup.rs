//! Lineup evaluation: partition the game into maximal constant-lineup
//! intervals and score every valid five-player floor group.

use crate::cli::types::PlayerId;
use crate::model::{Player, Rotation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;


/// Slices shorter than this are ignored (sub-minute substitution slivers).
pub const MIN_SLICE_SECS: u32 = 60;

/// Effectiveness scores for one maximal interval with exactly five players
/// on court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupEffectiveness {
    pub players: Vec<PlayerId>,
    pub offensive_rating: f64,
    pub defensive_rating: f64,
    pub plus_minus: f64,
}

/// Source of base ratings for lineup scoring.
///
/// The synthetic random baseline stands in for real performance data; the
/// trait keeps the interval-partitioning logic untouched when a
/// statistics-backed source replaces it.
pub trait RatingSource {
    /// A bounded positive baseline, before the skill-variety modifier.
    fn base_rating(&mut self) -> f64;
}

/// Synthetic baseline in `[80, 100)`, the placeholder used until real
/// performance data is wired in.
pub struct SyntheticRating {
    rng: StdRng,
}

impl SyntheticRating {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible reports.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SyntheticRating {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingSource for SyntheticRating {
    fn base_rating(&mut self) -> f64 {
        80.0 + self.rng.gen::<f64>() * 20.0
    }
}

/// Constant baseline, mainly for tests and deterministic comparisons.
pub struct FixedRating(pub f64);

impl RatingSource for FixedRating {
    fn base_rating(&mut self) -> f64 {
        self.0
    }
}

/// Evaluate lineups with the default synthetic rating source.
pub fn evaluate_lineups(rotation: &Rotation, players: &[Player]) -> Vec<LineupEffectiveness> {
    evaluate_lineups_with(rotation, players, &mut SyntheticRating::new())
}

/// Evaluate lineups with an explicit rating source.
///
/// Breakpoints are the deduplicated starts and ends of every on-court
/// segment; between consecutive breakpoints the floor group cannot change.
/// Only slices of at least [`MIN_SLICE_SECS`] with exactly five players on
/// court produce an entry, in time order. Intervals with any other player
/// count are omitted, never an error.
pub fn evaluate_lineups_with(
    rotation: &Rotation,
    players: &[Player],
    ratings: &mut dyn RatingSource,
) -> Vec<LineupEffectiveness> {
    let mut breakpoints = BTreeSet::new();
    for pa in &rotation.player_assignments {
        for seg in pa.segments.iter().filter(|s| s.on_court) {
            breakpoints.insert(seg.start_secs);
            breakpoints.insert(seg.end_secs);
        }
    }
    let breakpoints: Vec<u32> = breakpoints.into_iter().collect();

    let mut lineups = Vec::new();
    for window in breakpoints.windows(2) {
        let (t0, t1) = (window[0], window[1]);
        if t1 - t0 < MIN_SLICE_SECS {
            continue;
        }

        let on_court: Vec<PlayerId> = rotation
            .player_assignments
            .iter()
            .filter(|pa| {
                pa.segments
                    .iter()
                    .any(|seg| seg.on_court && seg.spans(t0, t1))
            })
            .map(|pa| pa.player_id.clone())
            .collect();

        if on_court.len() != 5 {
            continue;
        }

        lineups.push(score_lineup(on_court, players, ratings));
    }

    lineups
}

fn score_lineup(
    on_court: Vec<PlayerId>,
    players: &[Player],
    ratings: &mut dyn RatingSource,
) -> LineupEffectiveness {
    let skills: Vec<_> = on_court
        .iter()
        .filter_map(|id| players.iter().find(|p| &p.id == id))
        .flat_map(|p| p.skills.iter().copied())
        .collect();

    // Unknown or skill-less players contribute no variety
    let skill_variety = if skills.is_empty() {
        0.0
    } else {
        let distinct: BTreeSet<_> = skills.iter().collect();
        distinct.len() as f64 / skills.len() as f64
    };

    let modifier = 0.8 + skill_variety * 0.4;
    let offensive_rating = ratings.base_rating() * modifier;
    let defensive_rating = ratings.base_rating() * modifier;
    let plus_minus = (offensive_rating - defensive_rating) / 10.0 - 5.0;

    LineupEffectiveness {
        players: on_court,
        offensive_rating,
        defensive_rating,
        plus_minus,
    }
}
