//! Player skill tags used by the lineup evaluator.

use crate::error::RotationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Skill tags a player can carry.
///
/// The lineup evaluator rewards lineups whose five players cover many
/// distinct skills. Serialized with the dashboard's display strings, so
/// `Energy` round-trips as `"Energy Player"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Shooter")]
    Shooter,
    #[serde(rename = "Defender")]
    Defender,
    #[serde(rename = "Playmaker")]
    Playmaker,
    #[serde(rename = "Rebounder")]
    Rebounder,
    #[serde(rename = "Finisher")]
    Finisher,
    #[serde(rename = "Energy Player")]
    Energy,
    #[serde(rename = "Versatile")]
    Versatile,
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Skill::Shooter => "Shooter",
            Skill::Defender => "Defender",
            Skill::Playmaker => "Playmaker",
            Skill::Rebounder => "Rebounder",
            Skill::Finisher => "Finisher",
            Skill::Energy => "Energy Player",
            Skill::Versatile => "Versatile",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Skill {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(' ', "").as_str() {
            "SHOOTER" => Ok(Skill::Shooter),
            "DEFENDER" => Ok(Skill::Defender),
            "PLAYMAKER" => Ok(Skill::Playmaker),
            "REBOUNDER" => Ok(Skill::Rebounder),
            "FINISHER" => Ok(Skill::Finisher),
            "ENERGY" | "ENERGYPLAYER" => Ok(Skill::Energy),
            "VERSATILE" => Ok(Skill::Versatile),
            _ => Err(RotationError::InvalidSkill {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_parsing() {
        assert_eq!("Shooter".parse::<Skill>().unwrap(), Skill::Shooter);
        assert_eq!("defender".parse::<Skill>().unwrap(), Skill::Defender);
        assert_eq!("energy".parse::<Skill>().unwrap(), Skill::Energy);
        assert_eq!("Energy Player".parse::<Skill>().unwrap(), Skill::Energy);
        assert!("dunker".parse::<Skill>().is_err());
    }

    #[test]
    fn test_skill_serde_round_trip() {
        let json = serde_json::to_string(&Skill::Energy).unwrap();
        assert_eq!(json, "\"Energy Player\"");

        let parsed: Skill = serde_json::from_str("\"Playmaker\"").unwrap();
        assert_eq!(parsed, Skill::Playmaker);
    }
}
