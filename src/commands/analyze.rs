//! Analytics report command implementations

use super::common::{format_clock, load_rotation, load_roster, open_database, print_json};
use crate::{
    analytics::{
        compute_fatigue, compute_minutes_distribution, evaluate_lineups_with, SyntheticRating,
    },
    cli::ReportArgs,
    Result,
};

/// Handle the analyze fatigue command
pub async fn handle_fatigue(args: ReportArgs) -> Result<()> {
    let db = open_database()?;
    let rotation = load_rotation(&db, &args.rotation)?;
    let roster = load_roster(&db)?;

    let models = compute_fatigue(&rotation, &roster);
    if args.json {
        return print_json(&models);
    }

    if models.is_empty() {
        println!("No assignments in {}.", rotation.id);
        return Ok(());
    }

    for model in &models {
        let peak = model
            .fatigue_values
            .iter()
            .cloned()
            .fold(0.0_f64, f64::max);
        let finish = model.fatigue_values.last().copied().unwrap_or(0.0);
        println!("{:<14} peak {:>5.1}  final {:>5.1}", model.player_id, peak, finish);

        // Quarter-boundary samples give a readable curve without the full trace
        let marks: Vec<String> = model
            .timestamps
            .iter()
            .zip(&model.fatigue_values)
            .filter(|(t, _)| *t % 720 == 0)
            .map(|(t, f)| format!("{}={:.0}", format_clock(*t), f))
            .collect();
        println!("    {}", marks.join("  "));
    }
    Ok(())
}

/// Handle the analyze minutes command
pub async fn handle_minutes(args: ReportArgs) -> Result<()> {
    let db = open_database()?;
    let rotation = load_rotation(&db, &args.rotation)?;

    let distributions = compute_minutes_distribution(&rotation);
    if args.json {
        return print_json(&distributions);
    }

    if distributions.is_empty() {
        println!("No assignments in {}.", rotation.id);
        return Ok(());
    }

    let period_names: Vec<&str> = rotation.periods.iter().map(|p| p.name.as_str()).collect();
    print!("{:<14} {:>7}", "Player", "Total");
    for name in &period_names {
        print!(" {:>11}", name);
    }
    println!();

    for dist in &distributions {
        print!("{:<14} {:>7.1}", dist.player_id, dist.total_minutes);
        for period in &rotation.periods {
            let mins = dist.minutes_by_period.get(&period.id).copied().unwrap_or(0.0);
            print!(" {:>11.1}", mins);
        }
        println!();
    }
    Ok(())
}

/// Handle the analyze lineups command
pub async fn handle_lineups(args: ReportArgs, seed: Option<u64>) -> Result<()> {
    let db = open_database()?;
    let rotation = load_rotation(&db, &args.rotation)?;
    let roster = load_roster(&db)?;

    let mut ratings = match seed {
        Some(seed) => SyntheticRating::with_seed(seed),
        None => SyntheticRating::new(),
    };
    let lineups = evaluate_lineups_with(&rotation, &roster, &mut ratings);

    if args.json {
        return print_json(&lineups);
    }

    if lineups.is_empty() {
        println!("No five-player intervals of a minute or more in {}.", rotation.id);
        return Ok(());
    }

    println!("{:<44} {:>8} {:>8} {:>7}", "Lineup", "Off", "Def", "+/-");
    for lineup in &lineups {
        let group = lineup
            .players
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:<44} {:>8.1} {:>8.1} {:>+7.2}",
            group, lineup.offensive_rating, lineup.defensive_rating, lineup.plus_minus
        );
    }
    Ok(())
}
