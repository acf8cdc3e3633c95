//! Interactive game loop.

use crate::input::parse_command;
use crate::render::render;
use anyhow::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use uplift_four::{Color, Game, Outcome};

/// Whitespace-separated tokens from line-oriented input.
///
/// Lines are decoded lossily so stray bytes become a token the parser
/// rejects instead of ending the game.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = Vec::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}

fn prompt(player: Color) -> &'static str {
    match player {
        Color::Black => "BLACK:",
        Color::White => "WHITE:",
    }
}

fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::BlackWin => "BLACK WINS!",
        Outcome::WhiteWin => "WHITE WINS!",
        Outcome::Draw => "DRAW!",
        Outcome::InProgress => "GAME ABANDONED",
    }
}

/// Plays until the game ends or input runs out, returning the last outcome.
///
/// Rejected tokens and moves are reported on `out` and the same player is
/// prompted again.
#[instrument(skip_all)]
pub fn run_game<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> Result<Outcome> {
    let mut tokens = Tokens::new(input);
    let mut outcome = game.outcome();

    while !outcome.is_finished() {
        write!(out, "{}{}", render(game.board()), prompt(game.player()))?;
        out.flush()?;

        let Some(token) = tokens.next_token()? else {
            info!("Input closed before the game finished");
            writeln!(out)?;
            break;
        };

        match parse_command(&token) {
            Ok(command) => {
                debug!(%command, "Applying command");
                if let Err(err) = game.apply(command) {
                    writeln!(out, "{}", err.kind())?;
                }
            }
            Err(err) => writeln!(out, "{}", err)?,
        }

        outcome = game.outcome();
        writeln!(out)?;
    }

    write!(out, "{}", render(game.board()))?;
    writeln!(out, "{}", verdict(outcome))?;
    info!(%outcome, "Game over");
    Ok(outcome)
}
