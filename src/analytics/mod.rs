//! Analytics reports derived from a rotation snapshot.
//!
//! Each report is a pure function over an immutable `(Rotation, Player list)`
//! snapshot: no shared state, no mutation, deterministic given its inputs
//! (the lineup evaluator's synthetic baseline is the one seeded exception).

pub mod fatigue;
pub mod lineup;
pub mod minutes;

pub use fatigue::{compute_fatigue, FatigueModel};
pub use lineup::{
    evaluate_lineups, evaluate_lineups_with, FixedRating, LineupEffectiveness, RatingSource,
    SyntheticRating,
};
pub use minutes::{compute_minutes_distribution, MinutesDistribution};
