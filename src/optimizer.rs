//! Staggered-rotation generator.
//!
//! A constructive heuristic, not a solver: starters are anchored to the
//! opening and closing six minutes, and everyone cycles through the middle
//! two periods on 3-minute staggers so the bench never turns over all at
//! once. Minutes policies (`target`/`max`/`consecutive`) are deliberately
//! not enforced here; enforcing them would change the output shape and is
//! left for a future constraint pass.

use crate::cli::types::PlayerId;
use crate::model::{PlayerAssignment, TimeSegment, STANDARD_GAME_SECS, STANDARD_PERIOD_SECS};

/// Starters play the first six minutes of the game...
const OPENING_END_SECS: u32 = 6 * 60;
/// ...and the last six minutes before the buzzer.
const CLOSING_START_SECS: u32 = STANDARD_GAME_SECS - 6 * 60;
/// Middle-period stints last six minutes.
const STINT_SECS: u32 = 6 * 60;
/// Substitutions are offset by three minutes per roster slot.
const STAGGER_SECS: u32 = 3 * 60;

/// Number of leading ids treated as starters.
pub const STARTER_COUNT: usize = 5;

/// Generate a staggered substitution pattern for a standard 48-minute game.
///
/// The first [`STARTER_COUNT`] ids are the starters; with fewer ids the
/// generator still runs and simply anchors everyone it has. Every returned
/// assignment's segments are sorted and pairwise non-overlapping.
pub fn generate_staggered_rotation(player_ids: &[PlayerId]) -> Vec<PlayerAssignment> {
    player_ids
        .iter()
        .enumerate()
        .map(|(index, player_id)| {
            let mut segments = Vec::with_capacity(4);
            let starter = index < STARTER_COUNT;

            if starter {
                segments.push(TimeSegment::on_court(0, OPENING_END_SECS));
            }

            // Middle stints at the top of the 2nd and 3rd quarters
            let stagger = (index % STARTER_COUNT) as u32 * STAGGER_SECS;
            for period_index in [1, 2] {
                let start = period_index * STANDARD_PERIOD_SECS + stagger;
                segments.push(TimeSegment::on_court(start, start + STINT_SECS));
            }

            if starter {
                segments.push(TimeSegment::on_court(CLOSING_START_SECS, STANDARD_GAME_SECS));
            }

            PlayerAssignment {
                player_id: player_id.clone(),
                segments,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<PlayerId> {
        (1..=n).map(|i| PlayerId::new(format!("p{}", i))).collect()
    }

    #[test]
    fn test_segments_never_overlap_per_player() {
        let assignments = generate_staggered_rotation(&ids(8));

        for pa in &assignments {
            for (i, a) in pa.segments.iter().enumerate() {
                for b in pa.segments.iter().skip(i + 1) {
                    assert_eq!(
                        a.overlap(b),
                        0,
                        "player {} has overlapping segments {:?} and {:?}",
                        pa.player_id,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_starters_are_anchored() {
        let assignments = generate_staggered_rotation(&ids(8));

        for pa in assignments.iter().take(STARTER_COUNT) {
            assert_eq!(pa.segments.first().unwrap().start_secs, 0);
            assert_eq!(pa.segments.first().unwrap().end_secs, 360);
            assert_eq!(pa.segments.last().unwrap().start_secs, 2520);
            assert_eq!(pa.segments.last().unwrap().end_secs, 2880);
        }
        // Bench players get middle stints only
        for pa in assignments.iter().skip(STARTER_COUNT) {
            assert_eq!(pa.segments.len(), 2);
            assert!(pa.segments.iter().all(|s| s.start_secs >= 720));
        }
    }

    #[test]
    fn test_stagger_offsets() {
        let assignments = generate_staggered_rotation(&ids(7));

        // Index 0: stints at the top of Q2 and Q3
        assert_eq!(assignments[0].segments[1].start_secs, 720);
        assert_eq!(assignments[0].segments[2].start_secs, 1440);
        // Index 2: staggered by 2 * 180s
        assert_eq!(assignments[2].segments[1].start_secs, 720 + 360);
        // Index 5 wraps around to the same stagger as index 0
        assert_eq!(assignments[5].segments[0].start_secs, 720);
        assert_eq!(assignments[5].segments[1].start_secs, 1440);
    }

    #[test]
    fn test_segments_are_sorted_and_on_court() {
        for pa in generate_staggered_rotation(&ids(10)) {
            for pair in pa.segments.windows(2) {
                assert!(pair[0].start_secs < pair[1].start_secs);
            }
            assert!(pa.segments.iter().all(|s| s.on_court));
            assert!(pa
                .segments
                .iter()
                .all(|s| s.end_secs <= STANDARD_GAME_SECS));
        }
    }

    #[test]
    fn test_fewer_than_five_players_still_generates() {
        let assignments = generate_staggered_rotation(&ids(3));
        assert_eq!(assignments.len(), 3);
        // All three are starters: opening, two stints, closing
        for pa in &assignments {
            assert_eq!(pa.segments.len(), 4);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(generate_staggered_rotation(&[]).is_empty());
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let input = ids(6);
        let assignments = generate_staggered_rotation(&input);
        let out: Vec<_> = assignments.iter().map(|pa| pa.player_id.clone()).collect();
        assert_eq!(out, input);
    }
}
