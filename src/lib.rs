//! A game engine for the board game 'Connect 4'
//!
//! Two players take turns dropping pieces into the columns of a grid. A piece
//! falls to the lowest empty cell of its column, and the first player to line
//! up four pieces horizontally, vertically or diagonally wins. A full board
//! with no alignment is a tie.
//!
//! The engine owns all game state and knows nothing about presentation: a
//! front end calls [`GameEngine::drop_piece`] on input and redraws from the
//! returned [`Outcome`] and the board queries.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{GameEngine, Outcome, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = GameEngine::new();
//! for &column in &[0, 1, 0, 1, 0, 1] {
//!     assert_eq!(game.drop_piece(column)?, Outcome::Continue);
//! }
//! assert_eq!(game.drop_piece(0)?, Outcome::Won(Player::One));
//! assert!(game.is_terminal());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod engine;

pub mod error;

pub mod config;


pub use board::{Board, Cell, Player};
pub use engine::{GameEngine, GameState, Outcome};
pub use error::{BoardError, ConfigError, MoveError};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WIN_LENGTH: usize = 4;

const_assert!(WIDTH > 0 && HEIGHT > 0);
// a run must fit along at least one axis or the game can only end in a tie
const_assert!(WIDTH >= WIN_LENGTH || HEIGHT >= WIN_LENGTH);

// games can be handed to another thread or copied for analysis
assert_impl_all!(GameEngine: Send, Clone);
