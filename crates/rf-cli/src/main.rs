//! CLI frontend for the reward formula engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rf",
    about = "Reward formulas: experience, honor, and conquest caps",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the difficulty color of an opponent
    Color {
        /// Character level
        level: u8,

        /// Opponent level
        mob_level: u8,
    },

    /// Compute base experience for a solo kill
    Base {
        /// Character level
        level: u8,

        /// Opponent level
        mob_level: u8,

        /// Content tier: bracket (71-80), name (northrend), or raw id
        #[arg(short, long, default_value = "1-60")]
        tier: String,
    },

    /// Compute final experience for a kill, including elite bonus and rates
    Gain {
        /// Character level
        level: u8,

        /// Opponent level
        mob_level: u8,

        /// Content tier: bracket (71-80), name (northrend), or raw id
        #[arg(short, long, default_value = "1-60")]
        tier: String,

        /// Opponent is elite
        #[arg(long)]
        elite: bool,

        /// Opponent is inside an instance
        #[arg(long)]
        instance: bool,

        /// Opponent kind: normal, totem, pet, critter
        #[arg(long, default_value = "normal")]
        kind: String,

        /// Opponent is flagged to give no experience
        #[arg(long)]
        no_xp: bool,

        /// Personal experience rate (0 = use the world rate)
        #[arg(long)]
        personal_rate: Option<f32>,

        /// Character has a premium account
        #[arg(long)]
        premium: bool,

        /// JSON file with rate multipliers
        #[arg(short, long)]
        rates: Option<PathBuf>,
    },

    /// Print experience for every relevant opponent level
    Table {
        /// Character level
        level: u8,

        /// Content tier: bracket (71-80), name (northrend), or raw id
        #[arg(short, long, default_value = "1-60")]
        tier: String,
    },

    /// Show the group experience multiplier
    Group {
        /// Number of group members
        count: u32,

        /// The group is a raid
        #[arg(long)]
        raid: bool,
    },

    /// Compute honor for an honorable kill
    Honor {
        /// Level of the defeated player
        level: u8,

        /// Honor multiplier
        #[arg(short, long, default_value = "1.0")]
        multiplier: f32,
    },

    /// Compute arena and battleground conquest caps for a rating
    Conquest {
        /// Personal rating
        rating: u32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Color { level, mob_level } => commands::color::run(level, mob_level),
        Commands::Base {
            level,
            mob_level,
            tier,
        } => commands::base::run(level, mob_level, &tier),
        Commands::Gain {
            level,
            mob_level,
            tier,
            elite,
            instance,
            kind,
            no_xp,
            personal_rate,
            premium,
            rates,
        } => commands::gain::run(&commands::gain::GainArgs {
            level,
            mob_level,
            tier,
            elite,
            instance,
            kind,
            no_xp,
            personal_rate,
            premium,
            rates,
        }),
        Commands::Table { level, tier } => commands::table::run(level, &tier),
        Commands::Group { count, raid } => commands::group::run(count, raid),
        Commands::Honor { level, multiplier } => commands::honor::run(level, multiplier),
        Commands::Conquest { rating } => commands::conquest::run(rating),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
