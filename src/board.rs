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

//! Board state and the make/unmake protocol.

use std::{array, error::Error, fmt, fmt::Write as _};

use bitflags::bitflags;

use crate::{
    color::{ByColor, Color},
    m::Move,
    role::Role,
    square::Square,
    types::{Cell, Occupant, Piece},
};

bitflags! {
    /// Reasons for a [`SetupError`].
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct SetupErrorKinds: u32 {
        /// A side has no king.
        const MISSING_KING = 1 << 0;
        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 1;
    }
}

/// Error when a placement cannot be turned into a [`Board`].
///
/// The board caches the square of each king, so every side needs exactly
/// one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetupError {
    kinds: SetupErrorKinds,
}

impl SetupError {
    /// Returns the reasons for this error.
    pub fn kinds(&self) -> SetupErrorKinds {
        self.kinds
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reasons = Vec::new();
        if self.kinds.contains(SetupErrorKinds::MISSING_KING) {
            reasons.push("missing king");
        }
        if self.kinds.contains(SetupErrorKinds::TOO_MANY_KINGS) {
            reasons.push("too many kings");
        }
        write!(f, "illegal setup: {}", reasons.join(", "))
    }
}

impl Error for SetupError {}

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Piece placement, side to move and the location of both kings.
///
/// A board is created once and then mutated in place with
/// [`make_move()`](Board::make_move) and [`unmake_move()`](Board::unmake_move).
/// Every `make_move()` must be undone by an `unmake_move()` of the same move
/// before the caller that made it looks at the board again.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; 64],
    turn: Color,
    kings: ByColor<Square>,
}

impl Board {
    /// The standard starting position, White to move.
    pub fn new() -> Board {
        let mut cells = empty_cells();
        for (file, role) in BACKRANK.into_iter().enumerate() {
            cells[file].occupant = role.of(Color::Black).into();
            cells[8 + file].occupant = Role::Pawn.of(Color::Black).into();
            cells[48 + file].occupant = Role::Pawn.of(Color::White).into();
            cells[56 + file].occupant = role.of(Color::White).into();
        }

        Board {
            cells,
            turn: Color::White,
            kings: ByColor {
                white: Square::new(60),
                black: Square::new(4),
            },
        }
    }

    /// Builds a board from the occupant of each square, White to move.
    ///
    /// # Errors
    ///
    /// Errors if a side does not have exactly one king.
    pub fn from_occupants(occupants: [Occupant; 64]) -> Result<Board, SetupError> {
        let mut cells = empty_cells();
        let mut kings = ByColor::<Option<Square>>::default();
        let mut kinds = SetupErrorKinds::empty();

        for (cell, occupant) in cells.iter_mut().zip(occupants) {
            cell.occupant = occupant;
            if let Occupant::Piece(Piece {
                color,
                role: Role::King,
            }) = occupant
            {
                if kings.get_mut(color).replace(cell.square).is_some() {
                    kinds |= SetupErrorKinds::TOO_MANY_KINGS;
                }
            }
        }

        match kings {
            ByColor {
                white: Some(white),
                black: Some(black),
            } if kinds.is_empty() => Ok(Board {
                cells,
                turn: Color::White,
                kings: ByColor { white, black },
            }),
            _ => {
                if Color::ALL.into_iter().any(|color| kings.get(color).is_none()) {
                    kinds |= SetupErrorKinds::MISSING_KING;
                }
                Err(SetupError { kinds })
            }
        }
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Occupant {
        self.cells[sq.index()].occupant
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.occupant_at(sq).piece()
    }

    /// Square of the king of the given color.
    #[inline]
    pub fn king_of(&self, color: Color) -> Square {
        *self.kings.get(color)
    }

    /// All 64 cells in square order.
    #[inline]
    pub fn cells(&self) -> &[Cell; 64] {
        &self.cells
    }

    /// Pieces of one color, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().filter_map(move |cell| match cell.occupant {
            Occupant::Piece(piece) if piece.color == color => Some((cell.square, piece)),
            _ => None,
        })
    }

    /// Plays a move without any validation.
    ///
    /// The piece on `m.from` replaces whatever stands on `m.to`, the king
    /// cache follows a moving king and the turn passes to the other side.
    pub fn make_move(&mut self, m: Move) {
        let mover = self.cells[m.from.index()].occupant;
        debug_assert_eq!(
            mover.color(),
            Some(self.turn),
            "{m} does not move a piece of the side to move"
        );

        self.cells[m.from.index()] = Cell::empty(m.from);
        self.cells[m.to.index()] = Cell {
            square: m.to,
            occupant: mover,
        };

        if let Occupant::Piece(Piece {
            color,
            role: Role::King,
        }) = mover
        {
            *self.kings.get_mut(color) = m.to;
        }

        self.turn = !self.turn;
    }

    /// Takes back a move previously played with
    /// [`make_move()`](Board::make_move).
    ///
    /// Given the same `Move` value, the board is restored field for field.
    pub fn unmake_move(&mut self, m: Move) {
        let mover = self.cells[m.to.index()].occupant;

        self.cells[m.from.index()] = Cell {
            square: m.from,
            occupant: mover,
        };
        self.cells[m.to.index()] = Cell {
            square: m.to,
            occupant: m.capture,
        };

        if let Occupant::Piece(Piece {
            color,
            role: Role::King,
        }) = mover
        {
            *self.kings.get_mut(color) = m.from;
        }

        self.turn = !self.turn;
    }
}

fn empty_cells() -> [Cell; 64] {
    array::from_fn(|index| Cell::empty(Square::new(index as u32)))
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Renders the board as seen from White, three characters per square, with
/// rank numbers on the right and file letters underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(8) {
            for cell in row {
                f.write_char(' ')?;
                f.write_char(cell.occupant.char())?;
                f.write_char(' ')?;
            }
            writeln!(f, "{} ", row[0].square.rank())?;
        }
        f.write_str(" a  b  c  d  e  f  g  h\n")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("board_fen", &self.board_fen())
            .field("turn", &self.turn)
            .field("kings", &self.kings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::Fen;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    fn board(fen: &str) -> Board {
        fen.parse::<Fen>()
            .expect("valid fen")
            .into_board()
            .expect("valid setup")
    }

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.piece_at(sq("a2")), Some(Role::Pawn.of(Color::White)));
        assert_eq!(board.piece_at(sq("b1")), Some(Role::Knight.of(Color::White)));
        assert_eq!(board.piece_at(sq("d8")), Some(Role::Queen.of(Color::Black)));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.king_of(Color::White), sq("e1"));
        assert_eq!(board.king_of(Color::Black), sq("e8"));
        assert_eq!(board.turn(), Color::White);
    }

    #[test]
    fn test_cells_know_their_square() {
        let board = Board::new();
        for (index, cell) in board.cells().iter().enumerate() {
            assert_eq!(cell.square.index(), index);
        }
    }

    #[test]
    fn test_pieces() {
        let board = Board::new();
        assert_eq!(board.pieces(Color::White).count(), 16);
        let (first, piece) = board.pieces(Color::Black).next().expect("black piece");
        assert_eq!(first, sq("a8"));
        assert_eq!(piece, Role::Rook.of(Color::Black));
    }

    #[test]
    fn test_make_unmake_capture() {
        let mut board = board("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let before = board.clone();

        let m = Move::new(sq("e4"), sq("d5"), board.occupant_at(sq("d5")), true);
        board.make_move(m);
        assert_eq!(board.piece_at(sq("d5")), Some(Role::Pawn.of(Color::White)));
        assert_eq!(board.occupant_at(sq("e4")), Occupant::Empty);
        assert_eq!(board.cell(sq("d5")).square, sq("d5"));
        assert_eq!(board.turn(), Color::Black);

        board.unmake_move(m);
        assert_eq!(board, before);
    }

    #[test]
    fn test_king_cache_follows_king() {
        let mut board = Board::new();
        let push = Move::new(sq("e2"), sq("e4"), Occupant::Empty, false);
        let reply = Move::new(sq("e7"), sq("e5"), Occupant::Empty, false);
        let king = Move::new(sq("e1"), sq("e2"), Occupant::Empty, true);

        board.make_move(push);
        board.make_move(reply);
        board.make_move(king);
        assert_eq!(board.king_of(Color::White), sq("e2"));
        assert_eq!(board.king_of(Color::Black), sq("e8"));

        board.unmake_move(king);
        board.unmake_move(reply);
        board.unmake_move(push);
        assert_eq!(board.king_of(Color::White), sq("e1"));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_from_occupants() {
        let mut occupants = [Occupant::Empty; 64];
        assert_eq!(
            Board::from_occupants(occupants).map_err(|err| err.kinds()),
            Err(SetupErrorKinds::MISSING_KING)
        );

        occupants[4] = Color::Black.king().into();
        occupants[60] = Color::White.king().into();
        let board = Board::from_occupants(occupants).expect("valid setup");
        assert_eq!(board.king_of(Color::Black), sq("e8"));

        occupants[0] = Color::Black.king().into();
        let err = Board::from_occupants(occupants).expect_err("two black kings");
        assert_eq!(err.kinds(), SetupErrorKinds::TOO_MANY_KINGS);

        occupants[60] = Occupant::Empty;
        let err = Board::from_occupants(occupants).expect_err("no white king");
        assert_eq!(
            err.kinds(),
            SetupErrorKinds::TOO_MANY_KINGS | SetupErrorKinds::MISSING_KING
        );
        assert_eq!(err.to_string(), "illegal setup: missing king, too many kings");
    }

    #[test]
    fn test_display() {
        let expected = concat!(
            " r  n  b  q  k  b  n  r 8 \n",
            " p  p  p  p  p  p  p  p 7 \n",
            " -  -  -  -  -  -  -  - 6 \n",
            " -  -  -  -  -  -  -  - 5 \n",
            " -  -  -  -  -  -  -  - 4 \n",
            " -  -  -  -  -  -  -  - 3 \n",
            " P  P  P  P  P  P  P  P 2 \n",
            " R  N  B  Q  K  B  N  R 1 \n",
            " a  b  c  d  e  f  g  h\n",
        );
        assert_eq!(Board::new().to_string(), expected);
    }
}
