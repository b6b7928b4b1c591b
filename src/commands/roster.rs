//! Roster command implementations

use super::common::{load_roster, open_database, print_json, slug_id};
use crate::{
    cli::types::{PlayerId, Position, Skill},
    error::RotationError,
    model::{sample_roster, MinutesPolicy, Player},
    Result,
};

/// Parameters for `roster add`
#[derive(Debug)]
pub struct RosterAddParams {
    pub id: Option<PlayerId>,
    pub name: String,
    pub number: u8,
    pub positions: Vec<Position>,
    pub skills: Vec<Skill>,
    pub target: u32,
    pub max: u32,
    pub consecutive: u32,
}

/// Handle the roster add command
pub async fn handle_roster_add(params: RosterAddParams) -> Result<()> {
    let minutes = MinutesPolicy::new(params.target, params.max, params.consecutive)?;
    let id = params.id.unwrap_or_else(|| slug_id(&params.name));

    let player = Player {
        id: id.clone(),
        name: params.name,
        number: params.number,
        positions: params.positions,
        skills: params.skills,
        minutes,
    };

    let mut db = open_database()?;
    db.upsert_player(&player)?;
    println!("✓ Added #{} {} ({})", player.number, player.name, id);
    Ok(())
}

/// Handle the roster list command
pub async fn handle_roster_list(as_json: bool) -> Result<()> {
    let db = open_database()?;
    let roster = load_roster(&db)?;

    if as_json {
        return print_json(&roster);
    }

    if roster.is_empty() {
        println!("Roster is empty. Try `rotation-lab roster seed`.");
        return Ok(());
    }

    println!(
        "{:<4} {:<20} {:<12} {:<28} {:>6} {:>4} {:>6}",
        "#", "Name", "Pos", "Skills", "Target", "Max", "Consec"
    );
    for player in &roster {
        let positions = player
            .positions
            .iter()
            .map(|p| p.abbreviation())
            .collect::<Vec<_>>()
            .join("/");
        let skills = player
            .skills
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<4} {:<20} {:<12} {:<28} {:>6} {:>4} {:>6}",
            player.number,
            player.name,
            positions,
            skills,
            player.minutes.target,
            player.minutes.max,
            player.minutes.consecutive,
        );
    }
    Ok(())
}

/// Handle the roster remove command
pub async fn handle_roster_remove(id: PlayerId) -> Result<()> {
    let mut db = open_database()?;
    if db.delete_player(&id)? {
        println!("✓ Removed {}", id);
        Ok(())
    } else {
        Err(RotationError::PlayerNotFound { id: id.to_string() })
    }
}

/// Handle the roster seed command: load the dashboard's five demo players.
pub async fn handle_roster_seed() -> Result<()> {
    let mut db = open_database()?;
    let roster = sample_roster();
    for player in &roster {
        db.upsert_player(player)?;
    }
    println!("✓ Seeded {} players", roster.len());
    Ok(())
}
