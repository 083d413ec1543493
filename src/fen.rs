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

//! Parse and write the piece placement field of Forsyth-Edwards-Notation.
//!
//! Only the first field is read. Side to move, castling rights, en passant
//! square and clocks are ignored, and a loaded board always has White to
//! move.
//!
//! # Examples
//!
//! ```
//! use starfish::{fen::Fen, Color, Role, Square};
//!
//! let fen: Fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1".parse()?;
//! let board = fen.into_board()?;
//!
//! assert_eq!(board.piece_at("e4".parse()?), Some(Role::Pawn.of(Color::White)));
//! assert_eq!(board.turn(), Color::White);
//! assert_eq!(board.board_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{
    board::{Board, SetupError},
    square::Square,
    types::{Occupant, Piece},
};

/// The standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Errors that can occur when parsing a FEN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseFenError {
    /// The placement field is empty.
    Empty,
    /// A byte that is neither a piece letter, a digit from 1 to 8, nor `/`.
    InvalidChar { ch: char, index: usize },
    /// A rank describes more than 8 files.
    RankOverflow { rank: u8 },
    /// A rank describes fewer than 8 files.
    RankUnderflow { rank: u8 },
    /// The placement does not have exactly 8 ranks.
    WrongRankCount { ranks: usize },
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseFenError::Empty => f.write_str("invalid fen: empty board"),
            ParseFenError::InvalidChar { ch, index } => {
                write!(f, "invalid fen: unexpected {ch:?} at index {index}")
            }
            ParseFenError::RankOverflow { rank } => {
                write!(f, "invalid fen: rank {rank} has more than 8 files")
            }
            ParseFenError::RankUnderflow { rank } => {
                write!(f, "invalid fen: rank {rank} has fewer than 8 files")
            }
            ParseFenError::WrongRankCount { ranks } => {
                write!(f, "invalid fen: expected 8 ranks, got {ranks}")
            }
        }
    }
}

impl Error for ParseFenError {}

/// A parsed piece placement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fen {
    occupants: [Occupant; 64],
}

impl Fen {
    /// Parses the placement field of a FEN. Anything after the first space is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Errors with [`ParseFenError`] if the placement is malformed.
    /// Unknown characters are rejected, not skipped.
    pub fn from_ascii(fen: &[u8]) -> Result<Fen, ParseFenError> {
        let placement = fen.split(|&ch| ch == b' ').next().unwrap_or_default();
        if placement.is_empty() {
            return Err(ParseFenError::Empty);
        }

        let ranks = placement.split(|&ch| ch == b'/').count();
        if ranks != 8 {
            return Err(ParseFenError::WrongRankCount { ranks });
        }

        let mut occupants = [Occupant::Empty; 64];
        let mut index = 0;

        for (row, rank) in placement.split(|&ch| ch == b'/').enumerate() {
            let rank_number = 8 - row as u8;
            let mut file = 0;

            for &ch in rank {
                match ch {
                    b'1'..=b'8' => file += usize::from(ch - b'0'),
                    _ => {
                        let piece = Piece::from_char(char::from(ch)).ok_or(
                            ParseFenError::InvalidChar {
                                ch: char::from(ch),
                                index,
                            },
                        )?;
                        if file < 8 {
                            occupants[row * 8 + file] = piece.into();
                        }
                        file += 1;
                    }
                }

                if file > 8 {
                    return Err(ParseFenError::RankOverflow { rank: rank_number });
                }
                index += 1;
            }

            if file < 8 {
                return Err(ParseFenError::RankUnderflow { rank: rank_number });
            }
            index += 1; // separator
        }

        Ok(Fen { occupants })
    }

    /// Gets the occupant of a square.
    pub fn occupant_at(&self, sq: Square) -> Occupant {
        self.occupants[sq.index()]
    }

    /// Turns the placement into a [`Board`] with White to move.
    ///
    /// # Errors
    ///
    /// Errors with [`SetupError`] unless each side has exactly one king.
    pub fn into_board(self) -> Result<Board, SetupError> {
        Board::from_occupants(self.occupants)
    }
}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Fen, ParseFenError> {
        Fen::from_ascii(s.as_bytes())
    }
}

impl From<&Board> for Fen {
    fn from(board: &Board) -> Fen {
        Fen {
            occupants: board.cells().map(|cell| cell.occupant),
        }
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.occupants.chunks(8).enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }

            let mut empty = 0;
            for occupant in rank {
                match occupant {
                    Occupant::Empty => empty += 1,
                    Occupant::Piece(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.char())?;
                    }
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Writes the piece placement, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn board_fen(&self) -> String {
        Fen::from(self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Role, SetupErrorKinds};

    #[test]
    fn test_starting_fen() {
        let board = STARTING_FEN
            .parse::<Fen>()
            .expect("valid fen")
            .into_board()
            .expect("valid setup");
        assert_eq!(board, Board::new());
        assert_eq!(
            board.board_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_placement_only() {
        let fen: Fen = "8/8/8/8/8/8/8/K6k".parse().expect("valid fen");
        assert_eq!(
            fen.occupant_at("a1".parse().expect("square")),
            Occupant::from(Color::White.king())
        );
        assert_eq!(
            fen.occupant_at("h1".parse().expect("square")),
            Occupant::from(Color::Black.king())
        );
    }

    #[test]
    fn test_metadata_is_ignored() {
        let board = "4k3/8/8/8/8/8/4q3/4K3 b - - 12 40"
            .parse::<Fen>()
            .expect("valid fen")
            .into_board()
            .expect("valid setup");
        assert_eq!(board.turn(), Color::White);
        assert_eq!(
            board.piece_at("e2".parse().expect("square")),
            Some(Role::Queen.of(Color::Black))
        );
    }

    #[test]
    fn test_write_roundtrip() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1",
        ] {
            let parsed: Fen = fen.parse().expect("valid fen");
            assert_eq!(parsed.to_string(), fen);
        }
    }

    #[test]
    fn test_malformed() {
        assert_eq!("".parse::<Fen>(), Err(ParseFenError::Empty));
        assert_eq!(" w - -".parse::<Fen>(), Err(ParseFenError::Empty));
        assert_eq!(
            "8/8/8/8/8/8/8".parse::<Fen>(),
            Err(ParseFenError::WrongRankCount { ranks: 7 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8/8".parse::<Fen>(),
            Err(ParseFenError::WrongRankCount { ranks: 9 })
        );
        assert_eq!(
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Fen>(),
            Err(ParseFenError::InvalidChar { ch: 'x', index: 13 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/09".parse::<Fen>(),
            Err(ParseFenError::InvalidChar { ch: '0', index: 14 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/K7k".parse::<Fen>(),
            Err(ParseFenError::RankOverflow { rank: 1 })
        );
        assert_eq!(
            "8/7/8/8/8/8/8/8".parse::<Fen>(),
            Err(ParseFenError::RankUnderflow { rank: 7 })
        );
    }

    #[test]
    fn test_setup_error() {
        let err = "8/8/8/8/8/8/8/K7"
            .parse::<Fen>()
            .expect("valid fen")
            .into_board()
            .expect_err("black king missing");
        assert_eq!(err.kinds(), SetupErrorKinds::MISSING_KING);
    }
}
