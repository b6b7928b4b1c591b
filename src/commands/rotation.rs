//! Rotation snapshot command implementations

use super::common::{
    format_clock, generate_game_id, generate_rotation_id, load_rotation, open_database, print_json,
    require_player,
};
use crate::{
    cli::types::{PlayerId, RotationId},
    model::{Rotation, TimeSegment},
    Result,
};

/// Handle the rotation new command
pub async fn handle_rotation_new(id: Option<RotationId>, name: String) -> Result<()> {
    let id = id.unwrap_or_else(generate_rotation_id);
    let game_id = generate_game_id();

    let rotation = Rotation::with_default_periods(id.as_str(), game_id.as_str(), name);
    let mut db = open_database()?;
    db.save_rotation(&rotation)?;
    println!("✓ Created rotation {} ({})", rotation.id, rotation.name);
    Ok(())
}

/// Handle the rotation list command
pub async fn handle_rotation_list(as_json: bool) -> Result<()> {
    let db = open_database()?;
    let summaries = db.list_rotations()?;

    if as_json {
        return print_json(&summaries);
    }

    if summaries.is_empty() {
        println!("No saved rotations. Try `rotation-lab rotation new`.");
        return Ok(());
    }

    println!("{:<14} {:<22} {:<14} {:>8}", "Id", "Name", "Game", "Players");
    for summary in &summaries {
        println!(
            "{:<14} {:<22} {:<14} {:>8}",
            summary.id, summary.name, summary.game_id, summary.player_count
        );
    }
    Ok(())
}

/// Handle the rotation show command
pub async fn handle_rotation_show(id: RotationId, as_json: bool) -> Result<()> {
    let db = open_database()?;
    let rotation = load_rotation(&db, &id)?;

    if as_json {
        return print_json(&rotation);
    }

    println!("{} ({})", rotation.name, rotation.id);
    for period in &rotation.periods {
        println!(
            "  {}: {} - {}",
            period.name,
            format_clock(period.start_secs),
            format_clock(period.end_secs)
        );
    }

    if rotation.player_assignments.is_empty() {
        println!("No assignments yet.");
        return Ok(());
    }

    for pa in &rotation.player_assignments {
        let stints = pa
            .segments
            .iter()
            .map(|seg| {
                let marker = if seg.on_court { "" } else { " (bench)" };
                format!(
                    "{}-{}{}",
                    format_clock(seg.start_secs),
                    format_clock(seg.end_secs),
                    marker
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:<14} {}", pa.player_id, stints);
    }
    Ok(())
}

/// Handle the rotation assign command: add one validated segment.
pub async fn handle_rotation_assign(
    rotation_id: RotationId,
    player_id: PlayerId,
    start_secs: u32,
    end_secs: u32,
    bench: bool,
) -> Result<()> {
    let mut db = open_database()?;
    // Mutations reject ids that are not on the roster
    require_player(&db, &player_id)?;

    let mut rotation = load_rotation(&db, &rotation_id)?;
    let segment = TimeSegment::new(start_secs, end_secs, !bench);
    rotation.add_segment(&player_id, segment)?;
    db.save_rotation(&rotation)?;

    println!(
        "✓ {} {} {}-{}",
        player_id,
        if bench { "benched" } else { "on court" },
        format_clock(start_secs),
        format_clock(end_secs)
    );
    Ok(())
}

/// Handle the rotation clear command: drop a player's assignment.
pub async fn handle_rotation_clear(rotation_id: RotationId, player_id: PlayerId) -> Result<()> {
    let mut db = open_database()?;
    let mut rotation = load_rotation(&db, &rotation_id)?;

    if rotation.remove_assignment(&player_id) {
        db.save_rotation(&rotation)?;
        println!("✓ Cleared {} from {}", player_id, rotation_id);
    } else {
        println!("⚠ {} had no assignment in {}", player_id, rotation_id);
    }
    Ok(())
}
