//! CLI-facing domain types: ids, positions, and skills.

pub mod ids;
pub mod position;
pub mod skill;

pub use ids::{GameId, PeriodId, PlayerId, RotationId};
pub use position::Position;
pub use skill::Skill;
