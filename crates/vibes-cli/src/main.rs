//! VIBES CLI - Swipe sessions in the terminal
//!
//! Drives an in-memory `AppStore`: swipe the deck, chat with matches,
//! and fill in the likes bingo. Nothing is kept between runs.

mod config;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;
use vibes::{
    AppStore, JsonProfileSource, ProfileSource, RandomSource, SeededRandom, SwipeDecision,
    SwipeKind, ThreadRandom,
};

/// Store with the random source picked at runtime
pub type CliStore = AppStore<Box<dyn RandomSource>>;

#[derive(Parser)]
#[command(name = "vibes")]
#[command(about = "VIBES - The trash pop fantasy dating prototype", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/vibes/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive swipe session
    Session {
        /// Seed for reproducible matches
        #[arg(long)]
        seed: Option<u64>,
        /// JSON deck file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Swipe through the deck without prompts
    Simulate {
        /// Number of swipes
        #[arg(short = 'n', long, default_value = "10")]
        swipes: usize,
        /// What to do on every card
        #[arg(short, long, value_enum, default_value = "mixed")]
        kind: KindArg,
        /// Seed for reproducible matches
        #[arg(long)]
        seed: Option<u64>,
        /// JSON deck file
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Print the final store snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the profiles in the deck
    Deck {
        /// JSON deck file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Show current configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Like,
    Pass,
    Boots,
    Wig,
    /// Cycle through likes, passes and superlikes
    Mixed,
}

const MIXED_CYCLE: [SwipeKind; 6] = [
    SwipeKind::Like,
    SwipeKind::Pass,
    SwipeKind::Boots,
    SwipeKind::Like,
    SwipeKind::Wig,
    SwipeKind::Pass,
];

impl KindArg {
    fn kind_for(&self, step: usize) -> SwipeKind {
        match self {
            KindArg::Like => SwipeKind::Like,
            KindArg::Pass => SwipeKind::Pass,
            KindArg::Boots => SwipeKind::Boots,
            KindArg::Wig => SwipeKind::Wig,
            KindArg::Mixed => MIXED_CYCLE[step % MIXED_CYCLE.len()],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Session { seed, data } => {
            let mut store = build_store(&config.with_overrides(seed, data))?;
            session::run(&mut store)
        }
        Commands::Simulate { swipes, kind, seed, data, json } => {
            cmd_simulate(config.with_overrides(seed, data), swipes, kind, json)
        }
        Commands::Deck { data } => cmd_deck(config.with_overrides(None, data)),
        Commands::Config { init } => cmd_config(config, &config_path, init),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_source(config: &Config) -> Result<JsonProfileSource> {
    match &config.data_file {
        Some(path) => JsonProfileSource::from_path(path)
            .with_context(|| format!("Failed to load deck from {:?}", path)),
        None => JsonProfileSource::bundled().context("Bundled deck is invalid"),
    }
}

fn build_store(config: &Config) -> Result<CliStore> {
    let source = load_source(config)?;
    let random: Box<dyn RandomSource> = match config.seed {
        Some(seed) => {
            tracing::debug!("Using seeded random source ({})", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom::new()),
    };

    AppStore::from_source(&source, config.store, random).context("Failed to build store")
}

// ============================================
// Command Implementations
// ============================================

fn cmd_simulate(config: Config, swipes: usize, kind: KindArg, json: bool) -> Result<()> {
    let mut store = build_store(&config)?;
    let seeded = store.matches().len();

    if store.profiles().is_empty() {
        println!("No profiles available");
        return Ok(());
    }

    for step in 0..swipes {
        let Some(profile) = store.current_profile() else {
            break;
        };
        let decision = SwipeDecision::new(kind.kind_for(step), profile.id.clone());
        let outcome = store.record_swipe(&decision)?;

        if !json {
            let name = outcome
                .profile_id
                .as_deref()
                .and_then(|id| store.profiles().iter().find(|p| p.id == id))
                .map(|p| p.name.as_str())
                .unwrap_or("-");
            let result = if outcome.is_match() {
                "match!".green().to_string()
            } else {
                String::new()
            };
            println!("{:>3}. {:<6} {} {}", step + 1, outcome.kind.to_string(), name, result);
        }

        if store.unlock_bingo_badge() && !json {
            println!("{}", "🏆 Bingo! Badge unlocked".green().bold());
        }
    }

    if json {
        let snapshot = store.snapshot();
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?
        );
        return Ok(());
    }

    println!();
    println!(
        "{} swipes, {} new matches ({} total)",
        swipes,
        store.matches().len() - seeded,
        store.matches().len()
    );
    render::print_bingo_board(&store.bingo_progress());

    Ok(())
}

fn cmd_deck(config: Config) -> Result<()> {
    let source = load_source(&config)?;
    let profiles = source.load_profiles()?;

    if profiles.is_empty() {
        println!("No profiles available");
        return Ok(());
    }

    println!("{}", "Deck:".bold());
    for profile in &profiles {
        println!(
            "  {:<10} {:<20} {:>3}  {}",
            profile.id.dimmed(),
            profile.name.cyan(),
            profile.age,
            render::vibe_label(profile.vibe)
        );
    }

    Ok(())
}

fn cmd_config(config: Config, path: &std::path::Path, init: bool) -> Result<()> {
    if init {
        if path.exists() {
            println!("{} Config already exists at {:?}", "!".yellow(), path);
        } else {
            config.save_to(path)?;
            println!("{} Default config written to {:?}", "✓".green(), path);
        }
    }

    println!("{}", "Configuration:".bold());
    println!("  Config file: {:?}", path);
    println!(
        "  Seed: {}",
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(random)".dimmed().to_string())
    );
    println!(
        "  Deck: {}",
        config
            .data_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(bundled)".dimmed().to_string())
    );
    println!("  Match policy: {:?}", config.store.match_policy);
    println!("  Bingo rule: {}", config.store.bingo_rule);
    println!("  Reset clears badge: {}", config.store.reset_clears_badge);

    Ok(())
}
