//! Command handlers for CLI operations

pub mod analyze;
pub mod common;
pub mod generate;
pub mod roster;
pub mod rotation;

pub use analyze::{handle_fatigue, handle_lineups, handle_minutes};
pub use generate::handle_generate;
pub use roster::{
    handle_roster_add, handle_roster_list, handle_roster_remove, handle_roster_seed,
    RosterAddParams,
};
pub use rotation::{
    handle_rotation_assign, handle_rotation_clear, handle_rotation_list, handle_rotation_new,
    handle_rotation_show,
};
