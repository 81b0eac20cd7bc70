//! CLI frontend for the GURPS character generator.

mod commands;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "gurps",
    about = "Random GURPS character generator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice expression such as 3d6 or 2d6-1
    Roll {
        /// Dice expression in NdS[+M|-M] form
        expression: String,

        /// Number of times to roll
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// RNG seed for repeatable rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate random characters
    Generate(GenerateArgs),

    /// List or print characters from a saved session file
    Show {
        /// Session file to read
        file: PathBuf,

        /// Print the character at this position (1-based)
        #[arg(short, long)]
        index: Option<usize>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of characters to generate
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// RNG seed for repeatable generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cap on appearance notes
    #[arg(long)]
    max_appearance: Option<usize>,

    /// Cap on item notes
    #[arg(long)]
    max_items: Option<usize>,

    /// Cap on behavior notes
    #[arg(long)]
    max_behaviors: Option<usize>,

    /// Cap on advantages and disadvantages
    #[arg(long)]
    max_features: Option<usize>,

    /// Cap on skills
    #[arg(long)]
    max_skills: Option<usize>,

    /// Apply item and behavior caps to their own lists
    #[arg(long)]
    fix_notes_caps: bool,

    /// Print characters as JSON
    #[arg(long)]
    json: bool,

    /// Save the characters to a session file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Roll {
            expression,
            times,
            seed,
        } => commands::roll::run(&expression, times, seed),
        Commands::Generate(args) => commands::generate::run(&commands::generate::Options {
            count: args.count,
            seed: args.seed,
            config: args.config,
            caps: commands::generate::Caps {
                appearance: args.max_appearance,
                items: args.max_items,
                behaviors: args.max_behaviors,
                features: args.max_features,
                skills: args.max_skills,
            },
            fix_notes_caps: args.fix_notes_caps,
            json: args.json,
            output: args.output,
        }),
        Commands::Show { file, index } => commands::show::run(&file, index),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
