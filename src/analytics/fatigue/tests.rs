//! Unit tests for the fatigue simulator

use super::*;
use crate::model::{sample_roster, TimeSegment, STANDARD_GAME_SECS};

fn rotation_with(player_id: &str, segments: &[TimeSegment]) -> Rotation {
    let mut rotation = Rotation::with_default_periods("r1", "g1", "Test");
    for seg in segments {
        rotation.add_segment(&PlayerId::new(player_id), *seg).unwrap();
    }
    rotation
}

#[test]
fn test_empty_rotation_yields_no_models() {
    let rotation = Rotation::with_default_periods("r1", "g1", "Test");
    let models = compute_fatigue(&rotation, &sample_roster());
    assert!(models.is_empty());
}

#[test]
fn test_samples_cover_the_whole_game() {
    let rotation = rotation_with("p1", &[TimeSegment::on_court(0, 720)]);
    let models = compute_fatigue(&rotation, &sample_roster());

    assert_eq!(models.len(), 1);
    let model = &models[0];
    let expected = (STANDARD_GAME_SECS / FATIGUE_STEP_SECS) as usize;
    assert_eq!(model.timestamps.len(), expected);
    assert_eq!(model.fatigue_values.len(), expected);
    assert_eq!(model.timestamps[0], 0);
    assert_eq!(
        *model.timestamps.last().unwrap(),
        STANDARD_GAME_SECS - FATIGUE_STEP_SECS
    );
}

#[test]
fn test_fatigue_stays_in_bounds() {
    // Full-game minutes for everyone on the sample roster
    let mut rotation = Rotation::with_default_periods("r1", "g1", "Test");
    for player in sample_roster() {
        rotation
            .add_segment(&player.id, TimeSegment::on_court(0, STANDARD_GAME_SECS))
            .unwrap();
    }

    for model in compute_fatigue(&rotation, &sample_roster()) {
        for &value in &model.fatigue_values {
            assert!((0.0..=100.0).contains(&value), "out of bounds: {}", value);
        }
    }
}

#[test]
fn test_monotonic_while_on_court() {
    let rotation = rotation_with("p1", &[TimeSegment::on_court(0, 720)]);
    let model = &compute_fatigue(&rotation, &sample_roster())[0];

    // Samples during the on-court stretch never decrease
    let on_court_samples: Vec<f64> = model
        .timestamps
        .iter()
        .zip(&model.fatigue_values)
        .filter(|(t, _)| **t < 720)
        .map(|(_, v)| *v)
        .collect();
    for pair in on_court_samples.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

#[test]
fn test_full_fatigue_within_consecutive_minutes() {
    // Worked example: p1 has consecutive=8, plays [0,720). Fatigue must hit
    // 100 at or before t=480s and decrease once the segment ends at 720s.
    let rotation = rotation_with("p1", &[TimeSegment::on_court(0, 720)]);
    let model = &compute_fatigue(&rotation, &sample_roster())[0];

    let at = |t: u32| {
        let idx = model.timestamps.iter().position(|&ts| ts == t).unwrap();
        model.fatigue_values[idx]
    };

    assert!((at(480) - 100.0).abs() < 1e-9);
    // Recovery kicks in after the sub at 720s
    assert!(at(780) < at(720));
    assert!(at(840) < at(780));
}

#[test]
fn test_unknown_player_uses_default_policy() {
    // "p9" is not on the roster: default consecutive of 5 minutes applies,
    // so 100 is reached by the 5th sample of continuous play.
    let rotation = rotation_with("p9", &[TimeSegment::on_court(0, 720)]);
    let model = &compute_fatigue(&rotation, &sample_roster())[0];

    let idx_300 = model.timestamps.iter().position(|&t| t == 300).unwrap();
    assert!((model.fatigue_values[idx_300] - 100.0).abs() < 1e-9);

    let step = 100.0 / (DEFAULT_CONSECUTIVE_MINS as f64 * 60.0) * FATIGUE_STEP_SECS as f64;
    assert!((model.fatigue_values[0] - step).abs() < 1e-9);
}

#[test]
fn test_bench_segments_do_not_accrue() {
    let rotation = rotation_with("p1", &[TimeSegment::bench(0, 720)]);
    let model = &compute_fatigue(&rotation, &sample_roster())[0];

    // Starting from zero with only recovery, fatigue stays clamped at 0
    assert!(model.fatigue_values.iter().all(|&v| v == 0.0));
}

#[test]
fn test_output_order_matches_assignment_order() {
    let mut rotation = Rotation::with_default_periods("r1", "g1", "Test");
    for id in ["p3", "p1", "p2"] {
        rotation
            .add_segment(&PlayerId::new(id), TimeSegment::on_court(0, 720))
            .unwrap();
    }

    let models = compute_fatigue(&rotation, &sample_roster());
    let ids: Vec<&str> = models.iter().map(|m| m.player_id.as_str()).collect();
    assert_eq!(ids, vec!["p3", "p1", "p2"]);
}

#[test]
fn test_determinism() {
    let rotation = rotation_with(
        "p1",
        &[
            TimeSegment::on_court(0, 720),
            TimeSegment::on_court(1440, 2160),
        ],
    );
    let roster = sample_roster();

    let first = compute_fatigue(&rotation, &roster);
    let second = compute_fatigue(&rotation, &roster);
    assert_eq!(first, second);
}
