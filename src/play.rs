// This file is part of the starfish library.
// Copyright (C) 2026 The starfish developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! A line based loop for playing both sides on one board.
//!
//! Before each prompt the board is printed. A line starting with a legal
//! move in coordinate notation plays it, anything else is ignored without
//! output.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::{board::Board, m::Move, uci::UciMove};

/// An interactive game on a single board.
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
}

impl Session {
    pub fn new(board: Board) -> Session {
        Session { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// The prompt for the side to move, e.g. `white >>> `.
    pub fn prompt(&self) -> String {
        format!("{} >>> ", self.board.turn())
    }

    /// Plays the move given by the first four characters of `line`, if it is
    /// legal. Returns the move played.
    pub fn handle_line(&mut self, line: &str) -> Option<Move> {
        let Some(head) = line.as_bytes().get(..4) else {
            debug!("ignoring short input {line:?}");
            return None;
        };

        let uci = match UciMove::from_ascii(head) {
            Ok(uci) => uci,
            Err(err) => {
                debug!("ignoring {line:?}: {err}");
                return None;
            }
        };

        match uci.to_move(&mut self.board) {
            Ok(m) => {
                self.board.make_move(m);
                Some(m)
            }
            Err(err) => {
                debug!("ignoring {uci}: {err}");
                None
            }
        }
    }

    /// Runs the loop until `input` is exhausted.
    ///
    /// # Errors
    ///
    /// Errors if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{}", self.board)?;
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }
            writeln!(output)?;

            self.handle_line(&line);
        }
    }
}
