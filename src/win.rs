//! Detection of `WIN_LENGTH` aligned tiles
//!
//! [`has_won`] is an exhaustive scan: every cell is tried as the start of a
//! run in each of the four directions. [`wins_through`] only looks at runs
//! passing through one cell, which is enough to tell whether the last move
//! won as long as the board had no winner before it.

use crate::board::{Board, Player};
use crate::WIN_LENGTH;

/// `WIN_LENGTH` (row, column) coordinates, in order from the anchor cell
pub type Run = [(usize, usize); WIN_LENGTH];

// (row step, column step): horizontal, vertical, diagonal /, diagonal \
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The run starting at `anchor` in `direction`, if it fits on the board
fn run_from(board: &Board, anchor: (usize, usize), direction: (isize, isize)) -> Option<Run> {
    let mut run = [(0, 0); WIN_LENGTH];
    for (step, cell) in run.iter_mut().enumerate() {
        let row = anchor.0 as isize + direction.0 * step as isize;
        let column = anchor.1 as isize + direction.1 * step as isize;
        if row < 0
            || column < 0
            || row as usize >= board.height()
            || column as usize >= board.width()
        {
            return None;
        }
        *cell = (row as usize, column as usize);
    }
    Some(run)
}

/// Scans the whole board for a run owned entirely by `player`
///
/// Returns the first run found, anchors are visited bottom-to-top and
/// left-to-right.
pub fn winning_run(board: &Board, player: Player) -> Option<Run> {
    for row in 0..board.height() {
        for column in 0..board.width() {
            for &direction in DIRECTIONS.iter() {
                if let Some(run) = run_from(board, (row, column), direction) {
                    if run
                        .iter()
                        .all(|&(r, c)| board.owner(r, c) == Some(player))
                    {
                        return Some(run);
                    }
                }
            }
        }
    }
    None
}

/// Whether `player` has `WIN_LENGTH` aligned tiles anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_run(board, player).is_some()
}

/// Whether a run of `player` passes through (row, column)
pub fn wins_through(board: &Board, row: usize, column: usize, player: Player) -> bool {
    if board.owner(row, column) != Some(player) {
        return false;
    }

    // count the tiles of `player` walking away from (row, column)
    let count = |dy: isize, dx: isize| {
        let mut tiles = 0usize;
        let mut r = row as isize + dy;
        let mut c = column as isize + dx;
        while r >= 0
            && c >= 0
            && board.owner(r as usize, c as usize) == Some(player)
        {
            tiles += 1;
            r += dy;
            c += dx;
        }
        tiles
    };

    DIRECTIONS
        .iter()
        .any(|&(dy, dx)| 1 + count(dy, dx) + count(-dy, -dx) >= WIN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HEIGHT, WIDTH};

    fn board_with(cells: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, column, player) in cells {
            board.occupy(row, column, player).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[
            (0, 2, Player::Two),
            (0, 3, Player::Two),
            (0, 4, Player::Two),
            (0, 5, Player::Two),
        ]);
        assert!(has_won(&board, Player::Two));
        assert!(!has_won(&board, Player::One));
        assert_eq!(
            winning_run(&board, Player::Two),
            Some([(0, 2), (0, 3), (0, 4), (0, 5)])
        );
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[
            (2, 6, Player::One),
            (3, 6, Player::One),
            (4, 6, Player::One),
            (5, 6, Player::One),
        ]);
        assert!(has_won(&board, Player::One));
        assert_eq!(
            winning_run(&board, Player::One),
            Some([(2, 6), (3, 6), (4, 6), (5, 6)])
        );
    }

    #[test]
    fn test_diagonal_ascending_win() {
        let board = board_with(&[
            (1, 1, Player::One),
            (2, 2, Player::One),
            (3, 3, Player::One),
            (4, 4, Player::One),
        ]);
        assert!(has_won(&board, Player::One));
    }

    #[test]
    fn test_diagonal_descending_win() {
        // top-left to bottom-right
        let board = board_with(&[
            (5, 0, Player::Two),
            (4, 1, Player::Two),
            (3, 2, Player::Two),
            (2, 3, Player::Two),
        ]);
        assert!(has_won(&board, Player::Two));
        assert_eq!(
            winning_run(&board, Player::Two),
            Some([(2, 3), (3, 2), (4, 1), (5, 0)])
        );
    }

    #[test]
    fn test_no_win_with_three_and_gap() {
        let board = board_with(&[
            (0, 0, Player::One),
            (0, 1, Player::One),
            (0, 2, Player::One),
            (0, 4, Player::One),
        ]);
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_no_win_with_mixed_players() {
        let board = board_with(&[
            (0, 0, Player::One),
            (0, 1, Player::One),
            (0, 2, Player::Two),
            (0, 3, Player::One),
        ]);
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
    }

    #[test]
    fn test_run_must_fit_on_board() {
        // three on the right edge cannot wrap into the next row
        let board = board_with(&[
            (0, WIDTH - 3, Player::One),
            (0, WIDTH - 2, Player::One),
            (0, WIDTH - 1, Player::One),
            (1, 0, Player::One),
        ]);
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_wins_through() {
        let board = board_with(&[
            (0, 1, Player::One),
            (0, 2, Player::One),
            (0, 3, Player::One),
            (0, 4, Player::One),
            (1, 2, Player::Two),
        ]);
        for column in 1..=4 {
            assert!(wins_through(&board, 0, column, Player::One));
        }
        assert!(!wins_through(&board, 0, 0, Player::One));
        assert!(!wins_through(&board, 1, 2, Player::Two));
        assert!(!wins_through(&board, 1, 2, Player::One));
    }

    #[test]
    fn test_wins_through_diagonals() {
        let board = board_with(&[
            (0, 3, Player::Two),
            (1, 2, Player::Two),
            (2, 1, Player::Two),
            (3, 0, Player::Two),
        ]);
        assert!(wins_through(&board, 1, 2, Player::Two));

        let board = board_with(&[
            (2, 3, Player::One),
            (3, 4, Player::One),
            (4, 5, Player::One),
            (5, 6, Player::One),
        ]);
        assert!(wins_through(&board, HEIGHT - 1, WIDTH - 1, Player::One));
    }
}
