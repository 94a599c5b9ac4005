mod config;
mod controller;
mod pacing;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeGame;
use common::{log, logger};
use eframe::egui;

use config::{Config, get_config_manager};
use controller::GameController;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_desktop", about = "Play tic-tac-toe against the computer")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer's corner choices; overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default config file and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.clone());

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written");
        return Ok(());
    }

    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let game = TicTacToeGame::new(rng);
    log!(
        "Starting game with seed {}, pacing {}ms/{}ms",
        game.seed(),
        config.pacing.result_check_delay_ms,
        config.pacing.computer_move_delay_ms
    );

    let controller = GameController::new(game, &config.pacing);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(controller)))),
    )?;

    log!("Window closed");
    Ok(())
}
