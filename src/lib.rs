//! Basketball Rotation Planning CLI Library
//!
//! A Rust library for building substitution rotations and running analytics
//! over them, providing fatigue curves, minutes distributions, lineup
//! effectiveness scores, and database storage.
//!
//! ## Features
//!
//! - **Rotation Building**: Assign validated, non-overlapping time segments
//!   to players over a standard four-quarter game clock
//! - **Fatigue Simulation**: Step-wise accumulation and recovery curves
//!   driven by each player's consecutive-minutes limit
//! - **Minutes Distribution**: Total and per-period minutes from interval
//!   overlap
//! - **Lineup Effectiveness**: Scores for every maximal five-player floor
//!   group, with a skill-variety modifier
//! - **Staggered Generation**: A constructive heuristic that anchors starters
//!   and staggers bench stints
//! - **Database Storage**: Local roster and rotation snapshots in SQLite
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rotation_lab::{
//!     analytics::compute_minutes_distribution,
//!     model::{Rotation, TimeSegment},
//!     PlayerId,
//! };
//!
//! # fn example() -> rotation_lab::Result<()> {
//! let mut rotation = Rotation::with_default_periods("r1", "g1", "Opening Night");
//! rotation.add_segment(&PlayerId::new("p1"), TimeSegment::on_court(0, 720))?;
//!
//! let minutes = compute_minutes_distribution(&rotation);
//! assert_eq!(minutes[0].total_minutes, 12.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at an alternate database file:
//! ```bash
//! export ROTATION_LAB_DB=/tmp/rotations.db
//! ```

pub mod analytics;
pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod storage;

// Re-export commonly used types
pub use analytics::{
    compute_fatigue, compute_minutes_distribution, evaluate_lineups, FatigueModel,
    LineupEffectiveness, MinutesDistribution,
};
pub use cli::types::{GameId, PeriodId, PlayerId, Position, RotationId, Skill};
pub use error::{Result, RotationError};
pub use model::{validate_segment, Player, PlayerAssignment, Rotation, TimeSegment};
pub use optimizer::generate_staggered_rotation;
pub use storage::DB_PATH_ENV_VAR;
