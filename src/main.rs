//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use rotation_lab::{
    cli::{AnalyzeCmd, Commands, RosterCmd, RotationCmd, RotationLab},
    commands::{
        analyze::{handle_fatigue, handle_lineups, handle_minutes},
        generate::handle_generate,
        roster::{
            handle_roster_add, handle_roster_list, handle_roster_remove, handle_roster_seed,
            RosterAddParams,
        },
        rotation::{
            handle_rotation_assign, handle_rotation_clear, handle_rotation_list,
            handle_rotation_new, handle_rotation_show,
        },
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = RotationLab::parse();

    match app.command {
        Commands::Roster { cmd } => match cmd {
            RosterCmd::Add {
                id,
                name,
                number,
                positions,
                skills,
                target,
                max,
                consecutive,
            } => {
                handle_roster_add(RosterAddParams {
                    id,
                    name,
                    number,
                    positions,
                    skills,
                    target,
                    max,
                    consecutive,
                })
                .await?
            }
            RosterCmd::List { json } => handle_roster_list(json).await?,
            RosterCmd::Remove { id } => handle_roster_remove(id).await?,
            RosterCmd::Seed => handle_roster_seed().await?,
        },

        Commands::Rotation { cmd } => match cmd {
            RotationCmd::New { id, name } => handle_rotation_new(id, name).await?,
            RotationCmd::List { json } => handle_rotation_list(json).await?,
            RotationCmd::Show { id, json } => handle_rotation_show(id, json).await?,
            RotationCmd::Assign {
                rotation,
                player,
                start,
                end,
                bench,
            } => handle_rotation_assign(rotation, player, start, end, bench).await?,
            RotationCmd::Clear { rotation, player } => {
                handle_rotation_clear(rotation, player).await?
            }
        },

        Commands::Analyze { cmd } => match cmd {
            AnalyzeCmd::Fatigue { args } => handle_fatigue(args).await?,
            AnalyzeCmd::Minutes { args } => handle_minutes(args).await?,
            AnalyzeCmd::Lineups { args, seed } => handle_lineups(args, seed).await?,
        },

        Commands::Generate {
            rotation,
            players,
            json,
        } => handle_generate(rotation, players, json).await?,
    }

    Ok(())
}
