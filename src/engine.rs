//! The turn controller for a single game

use anyhow::{anyhow, Result};
use log::{debug, info, trace};

use crate::board::{Board, Player};
use crate::error::{BoardError, MoveError};
use crate::win::{self, Run};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    InProgress,
    Won(Player),
    Tied,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        match self {
            GameState::InProgress => false,
            _ => true,
        }
    }
}

/// The result of an accepted move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// The game goes on with the other player to move
    Continue,
    /// The player who just moved aligned four tiles
    Won(Player),
    /// The move filled the board without a winner
    Tied,
}

/// Owns the board, the active player and the game state of one game
///
/// Every instance is independent, there is no shared state between games.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    active_player: Player,
    state: GameState,
    moves: Vec<usize>,
}

impl GameEngine {
    /// Creates a game on an empty `WIDTH` x `HEIGHT` board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a game on an empty board of the given dimensions
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::empty(width, height)?))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            active_player: Player::One,
            state: GameState::InProgress,
            moves: Vec::new(),
        }
    }

    /// Replays a sequence of 1-indexed column digits, e.g. "4453"
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut game = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=9) => {
                    game.drop_piece(column - 1)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(game)
    }

    /// Drops a tile of the active player into `column`
    ///
    /// A rejected move leaves the game untouched. The active player only
    /// changes when the game continues.
    pub fn drop_piece(&mut self, column: usize) -> Result<Outcome, MoveError> {
        if self.state.is_terminal() {
            trace!("rejected move in column {}: game is over", column);
            return Err(MoveError::GameOver);
        }

        let row = match self.board.first_empty_row(column) {
            Ok(Some(row)) => row,
            Ok(None) => {
                trace!("rejected move in column {}: column full", column);
                return Err(MoveError::ColumnFull { column });
            }
            Err(err) => {
                trace!("rejected move in column {}: {}", column, err);
                return Err(err);
            }
        };

        let player = self.active_player;
        self.board.occupy(row, column, player)?;
        self.moves.push(column);
        debug!(
            "player {} dropped a tile at ({}, {})",
            player.number(),
            row,
            column
        );

        // the win check is against the player who just moved, before switching
        if win::has_won(&self.board, player) {
            self.state = GameState::Won(player);
            info!(
                "player {} won after {} moves",
                player.number(),
                self.moves.len()
            );
            Ok(Outcome::Won(player))
        } else if self.board.is_full() {
            self.state = GameState::Tied;
            info!("game tied after {} moves", self.moves.len());
            Ok(Outcome::Tied)
        } else {
            self.active_player = player.other();
            Ok(Outcome::Continue)
        }
    }

    /// Starts a new game on an empty board of the same dimensions
    pub fn reset(&mut self) {
        self.board.clear();
        self.active_player = Player::One;
        self.state = GameState::InProgress;
        self.moves.clear();
        info!(
            "new game on a {}x{} board",
            self.board.width(),
            self.board.height()
        );
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player occupying (row, column), `None` if the cell is empty
    pub fn cell_owner(&self, row: usize, column: usize) -> Result<Option<Player>, MoveError> {
        self.board
            .get(row, column)
            .map(|cell| cell.owner())
            .ok_or(MoveError::CellOutOfRange { row, column })
    }

    /// Columns that accept a tile, none once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&column| self.board.is_column_full(column) == Ok(false))
            .collect()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The columns played so far, 0-indexed
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// The moves played so far as 1-indexed column digits
    pub fn move_string(&self) -> String {
        self.moves
            .iter()
            .map(|column| (column + 1).to_string())
            .collect()
    }

    /// The aligned tiles of the winner, if the game has been won
    pub fn winning_run(&self) -> Option<Run> {
        match self.state {
            GameState::Won(player) => win::winning_run(&self.board, player),
            _ => None,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
