//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, Position, RotationId, Skill};

/// Top-level CLI for rotation planning and lineup analytics.
#[derive(Debug, Parser)]
#[clap(name = "rotation-lab", version, about = "Plan substitution rotations and analyze them")]
pub struct RotationLab {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the team roster.
    Roster {
        #[clap(subcommand)]
        cmd: RosterCmd,
    },

    /// Build and inspect saved rotation snapshots.
    Rotation {
        #[clap(subcommand)]
        cmd: RotationCmd,
    },

    /// Run analytics reports over a saved rotation.
    Analyze {
        #[clap(subcommand)]
        cmd: AnalyzeCmd,
    },

    /// Generate a staggered substitution pattern and store it on a rotation.
    ///
    /// The first five player ids are treated as starters and anchored to the
    /// opening and closing six minutes; everyone rotates through the middle
    /// periods on 3-minute staggers.
    Generate {
        /// Rotation snapshot to receive the generated assignments.
        #[clap(long, short)]
        rotation: RotationId,

        /// Ordered player ids (repeatable): `-p p1 -p p2`. Defaults to the
        /// full roster in jersey-number order.
        #[clap(long = "player", short = 'p')]
        players: Option<Vec<PlayerId>>,

        /// Output the generated assignments as JSON.
        #[clap(long)]
        json: bool,
    },
}

/// Common arguments shared by the analytics report commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Rotation snapshot id to analyze.
    #[clap(long, short)]
    pub rotation: RotationId,

    /// Output the report as JSON instead of text.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum RosterCmd {
    /// Add a player to the roster.
    Add {
        /// Player id; derived from the name when omitted.
        #[clap(long)]
        id: Option<PlayerId>,

        /// Display name.
        #[clap(long, short)]
        name: String,

        /// Jersey number.
        #[clap(long, short = 'j')]
        number: u8,

        /// Position (repeatable): `-p PG -p SG`.
        #[clap(long = "position", short = 'p', required = true)]
        positions: Vec<Position>,

        /// Skill tag (repeatable): `-s Shooter -s Defender`.
        #[clap(long = "skill", short = 's')]
        skills: Vec<Skill>,

        /// Target minutes for the game.
        #[clap(long, default_value_t = 24)]
        target: u32,

        /// Maximum minutes for the game.
        #[clap(long, default_value_t = 32)]
        max: u32,

        /// Maximum consecutive minutes before a rest.
        #[clap(long, default_value_t = 6)]
        consecutive: u32,
    },

    /// List all rostered players.
    List {
        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Remove a player from the roster.
    Remove {
        /// Player id to remove.
        id: PlayerId,
    },

    /// Load the five-player demo roster.
    Seed,
}

#[derive(Debug, Subcommand)]
pub enum RotationCmd {
    /// Create an empty rotation snapshot with the standard four quarters.
    New {
        /// Snapshot id; a short random id is generated when omitted.
        #[clap(long)]
        id: Option<RotationId>,

        /// Display name.
        #[clap(long, short, default_value = "New Rotation")]
        name: String,
    },

    /// List saved rotation snapshots.
    List {
        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Show one rotation's periods and assignments.
    Show {
        /// Rotation snapshot id.
        id: RotationId,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Assign a validated time segment to a player.
    Assign {
        /// Rotation snapshot id.
        #[clap(long, short)]
        rotation: RotationId,

        /// Rostered player id.
        #[clap(long, short)]
        player: PlayerId,

        /// Segment start, in game-clock seconds.
        #[clap(long)]
        start: u32,

        /// Segment end, in game-clock seconds (exclusive).
        #[clap(long)]
        end: u32,

        /// Mark the segment as a bench stretch instead of court time.
        #[clap(long)]
        bench: bool,
    },

    /// Remove a player's assignment from a rotation.
    Clear {
        /// Rotation snapshot id.
        #[clap(long, short)]
        rotation: RotationId,

        /// Player id whose assignment is removed.
        #[clap(long, short)]
        player: PlayerId,
    },
}

#[derive(Debug, Subcommand)]
pub enum AnalyzeCmd {
    /// Per-player fatigue curves over the whole game.
    Fatigue {
        #[clap(flatten)]
        args: ReportArgs,
    },

    /// Total and per-period minutes for each assigned player.
    Minutes {
        #[clap(flatten)]
        args: ReportArgs,
    },

    /// Effectiveness scores for every five-player floor lineup.
    Lineups {
        #[clap(flatten)]
        args: ReportArgs,

        /// Seed for the synthetic base ratings (reproducible output).
        #[clap(long)]
        seed: Option<u64>,
    },
}
