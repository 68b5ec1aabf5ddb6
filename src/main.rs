use anyhow::Result;
use log::info;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_engine::{config::AppConfig, GameEngine, GameState, MoveError};

mod display;

const DEFAULT_CONFIG_PATH: &str = "connect4.toml";

fn main() -> Result<()> {
    // keep the log quiet by default so it doesn't tear up the board
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load_or_default(&config_path)?;
    let names = &config.players;

    let mut game = GameEngine::with_size(config.board.width, config.board.height)?;
    let width = game.board().width();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display::draw(&game)?;

        match game.state() {
            GameState::InProgress => {
                print!("{} move input > ", names.name(game.active_player()));
                stdout().flush()?;
                let mut input_str = String::new();
                // end of input
                if stdin.read_line(&mut input_str)? == 0 {
                    return Ok(());
                }

                let column = match input_str.trim().parse::<usize>() {
                    Err(_) => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                    Ok(column) => column,
                };
                if column < 1 || column > width {
                    println!(
                        "Invalid move, column {} out of range. Columns must be between 1 and {}",
                        column, width
                    );
                    continue;
                }

                match game.drop_piece(column - 1) {
                    Ok(_) => {}
                    Err(MoveError::ColumnFull { .. }) => {
                        println!("Invalid move, column {} full", column);
                    }
                    Err(err) => println!("Invalid move, {}", err),
                }
            }

            // end states
            GameState::Won(player) => {
                println!("{} wins!", names.name(player));
                info!("game record: {}", game.move_string());
                if !ask_yes_no("Play again?")? {
                    break;
                }
                game.reset();
            }
            GameState::Tied => {
                println!("Draw!");
                info!("game record: {}", game.move_string());
                if !ask_yes_no("Play again?")? {
                    break;
                }
                game.reset();
            }
        }
    }
    Ok(())
}

fn ask_yes_no(question: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
