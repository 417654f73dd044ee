//! Tic-tac-toe desktop GUI
//!
//! A configurable N×N tic-tac-toe game with a K-in-a-row win condition.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::ui::{GameConfig, GameState, TicTacToeApp};

/// Command-line options seeding the first game. Both parameters stay
/// adjustable from the in-app resize dialog.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "N×N tic-tac-toe with a configurable win length")]
struct Args {
    /// Grid size N (the board is N×N)
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// Marks in a row needed to win (defaults to the grid size)
    #[arg(short, long)]
    win_length: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = GameConfig {
        size: args.size,
        win_length: args.win_length.unwrap_or(args.size),
    };

    // Reject bad parameters before any window opens
    let state = GameState::new(config)?;
    info!(size = config.size, win_length = config.win_length, "launching");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 380.0])
            .with_title(format!("{0}x{0} Tic Tac Toe", config.size)),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, state)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
