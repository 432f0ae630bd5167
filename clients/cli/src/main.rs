use blackjack::{MemoryHistory, SessionStore, StoreConfig, Table};
use clap::Parser;
use std::io;

mod driver;
mod render;

use driver::Output;

/// Engine `info!` lines would interleave with the game text on the terminal.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "blackjack", about = "Play single-deck blackjack against the dealer")]
struct Cli {
    /// Player name the session and tally are kept under
    #[arg(long, env = "BLACKJACK_PLAYER", default_value = "player")]
    player: String,

    /// Seed for reproducible shuffles
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Print each table state as a JSON line instead of text
    #[arg(long, env = "BLACKJACK_JSON", default_value_t = false, action = clap::ArgAction::Set)]
    json: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();
    if let Some(seed) = cli.seed {
        log::info!("Using shuffle seed {seed}");
    }

    let store = SessionStore::new(StoreConfig {
        seed: cli.seed,
        ..StoreConfig::default()
    });
    let table = Table::new(store, MemoryHistory::new());
    let output = if cli.json { Output::Json } else { Output::Text };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = driver::play(&table, &cli.player, output, stdin.lock(), &mut stdout.lock()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
