use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{GameEngine, Player};

/// Draws the board below the cursor, highlighting the winning run if any
pub fn draw(game: &GameEngine) -> Result<()> {
    let board = game.board();
    let (width, height) = (board.width(), board.height());
    let winning_run = game.winning_run();
    let mut stdout = stdout();

    let cols: String = (1..=width).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..height {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..height {
        for column in 0..width {
            let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);
            let background = match winning_run {
                Some(run) if run.contains(&(row, column)) => Color::DarkGreen,
                _ => Color::DarkBlue,
            };

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(background)
                        .with(match game.cell_owner(row, column)? {
                            Some(Player::One) => Color::Red,
                            Some(Player::Two) => Color::Yellow,
                            None => background,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + width as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
