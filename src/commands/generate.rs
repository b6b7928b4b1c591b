//! Staggered-rotation generation command

use super::common::{format_clock, load_rotation, load_roster, open_database, print_json, require_player};
use crate::{
    cli::types::{PlayerId, RotationId},
    optimizer::generate_staggered_rotation,
    Result,
};

/// Handle the generate command: build a staggered pattern and store it on
/// the target rotation, replacing any existing assignments.
pub async fn handle_generate(
    rotation_id: RotationId,
    players: Option<Vec<PlayerId>>,
    as_json: bool,
) -> Result<()> {
    let mut db = open_database()?;
    let mut rotation = load_rotation(&db, &rotation_id)?;

    let player_ids = match players {
        Some(ids) => {
            for id in &ids {
                require_player(&db, id)?;
            }
            ids
        }
        None => load_roster(&db)?.into_iter().map(|p| p.id).collect(),
    };

    let assignments = generate_staggered_rotation(&player_ids);
    rotation.set_assignments(assignments);
    db.save_rotation(&rotation)?;

    if as_json {
        return print_json(&rotation.player_assignments);
    }

    println!(
        "✓ Generated {} assignments on {}",
        rotation.player_assignments.len(),
        rotation.id
    );
    for pa in &rotation.player_assignments {
        let stints = pa
            .segments
            .iter()
            .map(|seg| format!("{}-{}", format_clock(seg.start_secs), format_clock(seg.end_secs)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:<14} {}", pa.player_id, stints);
    }
    Ok(())
}
