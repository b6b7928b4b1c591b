//! Rotation data model: timeline primitives, players, and the rotation
//! aggregate shared by every analytics component.

pub mod player;
pub mod rotation;
pub mod timeline;


pub use player::{sample_roster, MinutesPolicy, Player};
pub use rotation::{validate_segment, PlayerAssignment, Rotation};
pub use timeline::{
    default_periods, overlap_secs, Period, TimeSegment, STANDARD_GAME_SECS, STANDARD_PERIOD_SECS,
};
