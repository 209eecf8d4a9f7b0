//! CLI frontend for the hitroll dice-pool engine.

mod commands;
mod config;
mod prompt;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hr",
    about = "hitroll: dice-pool tests for count-successes systems",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file with characters and recipes (default: ./hitroll.yml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a test for `character.recipe` (or a bare recipe with `default_char`)
    Roll {
        /// Target, e.g. `cha1.hack` or `cha1.strength`
        target: String,

        /// Dice pool modifier (may be negative)
        #[arg(default_value_t = 0, allow_negative_numbers = true)]
        mods: i32,

        /// Show attributes, modifiers, and every die
        #[arg(short, long)]
        verbose: bool,

        /// Use edge: add the edge rating and explode sixes
        #[arg(short, long)]
        edge: bool,

        /// Roll against an opposition pool of this many dice
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        opposed: i32,

        /// Run as an extended test, prompting between rounds
        #[arg(short = 'x', long)]
        extended: bool,
    },

    /// Parse and roll a raw notation string such as `7d6!>=5`
    Notation {
        /// Roll notation
        spec: String,

        /// Show every die
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut rng = commands::make_rng(cli.seed);

    let result = match cli.command {
        Commands::Roll {
            target,
            mods,
            verbose,
            edge,
            opposed,
            extended,
        } => commands::roll::run(
            cli.config.as_deref(),
            &target,
            commands::roll::RollOptions {
                mods,
                verbose,
                edge,
                opposed,
                extended,
            },
            &mut rng,
        ),
        Commands::Notation { spec, verbose } => commands::notation::run(&spec, verbose, &mut rng),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
