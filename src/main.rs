//! Pursuit Wheel entry point
//!
//! Parses the roster, builds the game and runs the command loop on stdin.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pursuit_wheel::game::GameState;
use pursuit_wheel::{Settings, driver};

#[derive(Parser, Debug)]
#[command(
    name = "pursuit-wheel",
    version,
    about = "Play a circular trivia board from the terminal"
)]
struct Cli {
    /// Players as name_color pairs, e.g. alice_red bob_blue
    #[arg(required = true, num_args = 1..)]
    players_colors: Vec<String>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Die seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Category scheme: standard or alternate
    #[arg(long)]
    scheme: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(cli.config.as_deref())
        .context("Failed to load settings")?;
    if let Some(scheme) = &cli.scheme {
        settings.set_scheme(scheme)?;
    }
    if cli.seed.is_some() {
        settings.die_seed = cli.seed;
    }

    let mut state = GameState::from_tokens(&cli.players_colors, &settings)?;

    log::info!("Pursuit Wheel starting...");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    driver::run(&mut state, stdin.lock(), &mut stdout)?;
    Ok(())
}
