//! lvlgen: generate a room-template level and print it
//!
//! Prints the 32x32 tile grid as ASCII, or the whole generation result as
//! JSON with `--json`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Env;

use lg_core::level::WalkPolicy;
use lg_core::{GeneratorConfig, LevelGenerator, LevelRng};

mod render;

use render::{AsciiRenderer, route_to_string};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Left, right and down equally likely
    Uniform,
    /// Favour moving right, then down
    Skewed,
}

impl From<Policy> for WalkPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Uniform => WalkPolicy::Uniform,
            Policy::Skewed => WalkPolicy::Skewed,
        }
    }
}

/// Generate a level from room templates
#[derive(Parser, Debug)]
#[command(name = "lvlgen")]
#[command(author, version, about = "Generate a 4x4-room tile level", long_about = None)]
struct Args {
    /// Seed for the level (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Walk weighting for the solution path
    #[arg(short = 'p', long = "policy", value_enum)]
    policy: Option<Policy>,

    /// JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Walk steps allowed per attempt
    #[arg(long = "max-steps")]
    max_steps: Option<u32>,

    /// Generation attempts before giving up
    #[arg(long = "attempts")]
    attempts: Option<u32>,

    /// Print the level, route and seed as JSON
    #[arg(long = "json")]
    json: bool,

    /// Also print the room classification grid
    #[arg(short = 'r', long = "route")]
    route: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = build_config(&args)?;
    let generator = LevelGenerator::new(config)?;

    let mut rng = LevelRng::from_optional_seed(args.seed);
    let seed = rng.seed();
    let level = generator
        .generate_with_retries(&mut rng)
        .with_context(|| format!("could not generate a level from seed {seed}"))?;
    log::info!("generated level from seed {}", level.seed);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &level).context("writing JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    if args.route {
        write!(out, "{}", route_to_string(&level.route))?;
        writeln!(out)?;
    }
    let mut renderer = AsciiRenderer::default();
    level.grid.render(&mut renderer);
    write!(out, "{}", renderer.into_string())?;
    writeln!(out, "seed: {}", level.seed)?;

    Ok(())
}

/// Config file first, then command-line overrides
fn build_config(args: &Args) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(policy) = args.policy {
        config.walk = WalkPolicy::from(policy).weights();
    }
    if let Some(steps) = args.max_steps {
        config.max_walk_steps = steps;
    }
    if let Some(attempts) = args.attempts {
        config.max_attempts = attempts;
    }
    config.validate()?;

    log::debug!("config: {:?}", config);
    Ok(config)
}
