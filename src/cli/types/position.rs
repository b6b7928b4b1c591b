//! Basketball position types and utilities.

use crate::error::RotationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basketball player positions.
///
/// A closed enum rather than a free-form string so that match coverage stays
/// exhaustive and an unexpected value fails at parse time, not mid-report.
/// Serialized with the full display names (`"Point Guard"`, ...) to stay
/// compatible with roster exports from the web dashboard.
///
/// # Examples
///
/// ```rust
/// use rotation_lab::Position;
///
/// let pg: Position = "PG".parse().unwrap();
/// assert_eq!(pg, Position::PointGuard);
/// assert_eq!(pg.to_string(), "Point Guard");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Point Guard")]
    PointGuard,
    #[serde(rename = "Shooting Guard")]
    ShootingGuard,
    #[serde(rename = "Small Forward")]
    SmallForward,
    #[serde(rename = "Power Forward")]
    PowerForward,
    #[serde(rename = "Center")]
    Center,
}

impl Position {
    /// All positions in conventional 1-through-5 order.
    pub fn all() -> [Position; 5] {
        [
            Position::PointGuard,
            Position::ShootingGuard,
            Position::SmallForward,
            Position::PowerForward,
            Position::Center,
        ]
    }

    /// Short label used in table output (PG, SG, SF, PF, C).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PointGuard => "Point Guard",
            Position::ShootingGuard => "Shooting Guard",
            Position::SmallForward => "Small Forward",
            Position::PowerForward => "Power Forward",
            Position::Center => "Center",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(' ', "").as_str() {
            "PG" | "POINTGUARD" => Ok(Position::PointGuard),
            "SG" | "SHOOTINGGUARD" => Ok(Position::ShootingGuard),
            "SF" | "SMALLFORWARD" => Ok(Position::SmallForward),
            "PF" | "POWERFORWARD" => Ok(Position::PowerForward),
            "C" | "CENTER" => Ok(Position::Center),
            _ => Err(RotationError::InvalidPosition {
                value: s.to_string(),
            }),
        }
    }
}
