use clap::{Parser, Subcommand};

use fibro_balance_core::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "fibro-balance", version, about = "Fibro Balance symptom and energy tracker")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Keep everything in memory for this run; nothing is read or saved
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily health entries
    Entry {
        #[command(subcommand)]
        action: commands::entry::EntryAction,
    },
    /// Entries of the last days, oldest first
    Trend {
        /// Number of most recent entries to show
        #[arg(long)]
        days: Option<usize>,
    },
    /// Average pain, fatigue, sleep and stress
    Stats,
    /// Today's entry and remaining spoons
    Today,
    /// Daily energy budget
    Spoons {
        #[command(subcommand)]
        action: commands::spoons::SpoonsAction,
    },
    /// Guided relaxation exercises
    Exercise {
        #[command(subcommand)]
        action: commands::exercise::ExerciseAction,
    },
    /// Tip of the day
    Tip {
        /// Show a specific tip instead of today's
        #[arg(long)]
        index: Option<usize>,
    },
    /// Background reading on pain, sleep and pacing
    Learn,
    /// Export all entries as CSV
    Export {
        /// Output file (defaults to a dated file in the current directory)
        #[arg(long)]
        out: Option<std::path::PathBuf>,
        /// Write to stdout instead of a file
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },
    /// Delete all entries and reset the energy budget
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Keep running and roll the energy budget over at midnight
    Watch,
}

fn main() {
    let cli = Cli::parse();

    let (mut config, config_error) = if cli.ephemeral {
        (Config::default(), None)
    } else {
        match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    };
    config.normalize();
    logging::init(&config.logging.level);
    if let Some(e) = config_error {
        tracing::warn!("config unavailable, using defaults: {e}");
    }

    let ctx = commands::Context {
        config,
        json: cli.json,
        ephemeral: cli.ephemeral,
    };

    let result = match cli.command {
        Commands::Entry { action } => commands::entry::run(&ctx, action),
        Commands::Trend { days } => commands::stats::trend(&ctx, days),
        Commands::Stats => commands::stats::averages(&ctx),
        Commands::Today => commands::stats::today(&ctx),
        Commands::Spoons { action } => commands::spoons::run(&ctx, action),
        Commands::Exercise { action } => commands::exercise::run(&ctx, action),
        Commands::Tip { index } => commands::content::tip(&ctx, index),
        Commands::Learn => commands::content::learn(&ctx),
        Commands::Export { out, stdout } => commands::export::run(&ctx, out, stdout),
        Commands::Reset { yes } => commands::reset::run(&ctx, yes),
        Commands::Config { action } => commands::config::run(&ctx, action),
        Commands::Watch => commands::watch::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
