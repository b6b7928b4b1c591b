//! Roster player model.

use crate::cli::types::{PlayerId, Position, Skill};
use crate::error::{Result, RotationError};
use serde::{Deserialize, Serialize};

/// Minutes policy for one player, all values in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinutesPolicy {
    /// Minutes the coach wants the player to log.
    pub target: u32,
    /// Hard ceiling for the game.
    pub max: u32,
    /// Longest continuous stretch before a rest; drives the fatigue model.
    pub consecutive: u32,
}

impl MinutesPolicy {
    pub fn new(target: u32, max: u32, consecutive: u32) -> Result<Self> {
        let policy = Self {
            target,
            max,
            consecutive,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target > self.max || self.consecutive == 0 {
            return Err(RotationError::InvalidMinutesPolicy {
                target: self.target,
                max: self.max,
                consecutive: self.consecutive,
            });
        }
        Ok(())
    }
}

/// A rostered player. Read-only to the analytics core; created and edited by
/// the roster commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Jersey number.
    pub number: u8,
    /// One or more positions the player can hold.
    #[serde(rename = "position")]
    pub positions: Vec<Position>,
    pub skills: Vec<Skill>,
    pub minutes: MinutesPolicy,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number: u8,
        positions: Vec<Position>,
        skills: Vec<Skill>,
        minutes: MinutesPolicy,
    ) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            number,
            positions,
            skills,
            minutes,
        }
    }
}

/// The five sample players shipped with the dashboard demo.
pub fn sample_roster() -> Vec<Player> {
    vec![
        Player::new(
            "p1",
            "John Smith",
            1,
            vec![Position::PointGuard],
            vec![Skill::Playmaker, Skill::Defender],
            MinutesPolicy {
                target: 30,
                max: 36,
                consecutive: 8,
            },
        ),
        Player::new(
            "p2",
            "Mike Johnson",
            2,
            vec![Position::ShootingGuard],
            vec![Skill::Shooter, Skill::Finisher],
            MinutesPolicy {
                target: 28,
                max: 32,
                consecutive: 7,
            },
        ),
        Player::new(
            "p3",
            "Dave Williams",
            3,
            vec![Position::SmallForward],
            vec![Skill::Versatile, Skill::Defender],
            MinutesPolicy {
                target: 24,
                max: 30,
                consecutive: 8,
            },
        ),
        Player::new(
            "p4",
            "James Brown",
            4,
            vec![Position::PowerForward],
            vec![Skill::Rebounder, Skill::Finisher],
            MinutesPolicy {
                target: 26,
                max: 32,
                consecutive: 7,
            },
        ),
        Player::new(
            "p5",
            "Robert Davis",
            5,
            vec![Position::Center],
            vec![Skill::Rebounder, Skill::Defender],
            MinutesPolicy {
                target: 24,
                max: 28,
                consecutive: 6,
            },
        ),
    ]
}
