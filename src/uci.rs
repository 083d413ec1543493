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

//! Parse and write moves in coordinate notation, as used by the Universal
//! Chess Interface.
//!
//! # Examples
//!
//! Parsing and converting to a legal move in the context of a board:
//!
//! ```
//! use starfish::{uci::UciMove, Board, Color, Role};
//!
//! let uci: UciMove = "g1f3".parse()?;
//!
//! let mut board = Board::new();
//! let m = uci.to_move(&mut board)?;
//! board.make_move(m);
//!
//! assert_eq!(board.piece_at("f3".parse()?), Some(Role::Knight.of(Color::White)));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{
    board::Board,
    legal::filter_legal,
    m::{Move, MoveList},
    movegen::piece_moves,
    square::Square,
};

/// Error when parsing an invalid UCI move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseUciError;

impl fmt::Display for ParseUciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid uci")
    }
}

impl Error for ParseUciError {}

/// Error when a move is not legal on the given board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IllegalMove;

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal move")
    }
}

impl Error for IllegalMove {}

/// A move given by its origin and target square, like `e2e4`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
}

impl UciMove {
    /// Parses exactly four bytes of coordinate notation.
    ///
    /// # Errors
    ///
    /// Errors with [`ParseUciError`] if the input is not two square names.
    pub fn from_ascii(uci: &[u8]) -> Result<UciMove, ParseUciError> {
        if uci.len() != 4 {
            return Err(ParseUciError);
        }

        match (Square::from_ascii(&uci[0..2]), Square::from_ascii(&uci[2..4])) {
            (Ok(from), Ok(to)) => Ok(UciMove { from, to }),
            _ => Err(ParseUciError),
        }
    }

    /// Tries to convert the `UciMove` to a legal [`Move`] for the side to
    /// move.
    ///
    /// The board is probed by playing candidates and taking them back, so it
    /// is borrowed mutably but left unchanged.
    ///
    /// # Errors
    ///
    /// Errors with [`IllegalMove`] if no legal move of the side to move goes
    /// from `from` to `to`.
    pub fn to_move(&self, board: &mut Board) -> Result<Move, IllegalMove> {
        if board.occupant_at(self.from).color() != Some(board.turn()) {
            return Err(IllegalMove);
        }

        // a single piece never fills a list
        let mut moves = MoveList::new();
        piece_moves(board, self.from, &mut moves).map_err(|_| IllegalMove)?;
        moves.retain(|m| m.to == self.to);

        filter_legal(board, moves)
            .first()
            .copied()
            .ok_or(IllegalMove)
    }
}

impl FromStr for UciMove {
    type Err = ParseUciError;

    fn from_str(uci: &str) -> Result<UciMove, ParseUciError> {
        UciMove::from_ascii(uci.as_bytes())
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl From<Move> for UciMove {
    fn from(m: Move) -> UciMove {
        UciMove {
            from: m.from,
            to: m.to,
        }
    }
}
