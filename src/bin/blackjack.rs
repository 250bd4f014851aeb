use blackjack_rs::agents::StrategyAgent;
use blackjack_rs::config::{TableConfig, DEFAULT_DECKS, DEFAULT_STATS_FILE};
use blackjack_rs::engine::play_round;
use blackjack_rs::game::Game;
use blackjack_rs::stats::{JsonFileStore, MemoryStore, Scoreboard, StatsStore};
use blackjack_rs::tui::logger::TuiLogger;
use blackjack_rs::tui::{app::AppState, controller};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "blackjack-rs", version, about = "Single-player blackjack table")]
struct Cli {
    /// Decks in the starting shoe
    #[arg(long, env = "BLACKJACK_DECKS", default_value_t = DEFAULT_DECKS)]
    decks: usize,

    /// Fixed shuffle seed, for reproducible shoes
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Where the win/loss record is kept
    #[arg(long, env = "BLACKJACK_STATS", default_value = DEFAULT_STATS_FILE)]
    stats: PathBuf,

    /// Keep the record in memory only
    #[arg(long)]
    no_stats: bool,

    /// Play strategy rounds without the terminal UI
    #[arg(long)]
    headless: bool,

    /// Rounds to play in headless mode
    #[arg(long, default_value_t = 100)]
    rounds: u32,

    /// Start the TUI with the strategy agent playing
    #[arg(long)]
    autoplay: bool,
}

impl Cli {
    fn table_config(&self) -> TableConfig {
        let mut config =
            TableConfig::default().with_decks(self.decks).with_autoplay(self.autoplay);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if !self.no_stats {
            config = config.with_stats_path(self.stats.clone());
        }
        config.validated()
    }
}

fn scoreboard(config: &TableConfig) -> Scoreboard {
    let store: Box<dyn StatsStore> = match &config.stats_path {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    Scoreboard::open(store)
}

fn run_headless(config: &TableConfig, rounds: u32) {
    let mut game = Game::from_config(config);
    let mut agent = StrategyAgent::new();
    let mut board = scoreboard(config);
    let mut played = 0;
    for _ in 0..rounds {
        match play_round(&mut game, &mut agent) {
            Ok(Some(outcome)) => {
                log::debug!("round {}: {outcome:?}", played + 1);
                board.push(outcome);
                played += 1;
            }
            Ok(None) => {
                log::warn!("agent passed; stopping");
                break;
            }
            Err(err) => {
                log::error!("stopping after {played} rounds: {err}");
                break;
            }
        }
    }
    let record = board.record();
    println!(
        "played {played} rounds: {} wins, {} losses, {} pushes (all time: {} rounds)",
        record.wins,
        record.losses,
        record.pushes,
        record.rounds()
    );
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.table_config();

    if cli.headless || !io::stdout().is_terminal() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
        log::info!("blackjack-rs {} headless, {} decks", blackjack_rs::VERSION, config.num_decks);
        run_headless(&config, cli.rounds);
        return Ok(());
    }

    let log_buffer = TuiLogger::install(LevelFilter::Info)?;
    let board = scoreboard(&config);
    let mut app = AppState::new(config, board).with_log(log_buffer);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}
