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

use std::fmt;

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Gets the FEN letter of the piece: uppercase for White, lowercase for
    /// Black.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.role)
    }
}

/// The content of a square. Every square holds exactly one value, `Empty`
/// included.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Piece),
}

impl Occupant {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(piece) => Some(piece.color),
        }
    }

    #[inline]
    pub const fn role(self) -> Option<Role> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(piece) => Some(piece.role),
        }
    }

    /// Display symbol: the piece letter, or `-` for an empty square.
    pub const fn char(self) -> char {
        match self {
            Occupant::Empty => '-',
            Occupant::Piece(piece) => piece.char(),
        }
    }
}

impl From<Piece> for Occupant {
    #[inline]
    fn from(piece: Piece) -> Occupant {
        Occupant::Piece(piece)
    }
}

/// One of the 64 board slots. A cell remembers its own square.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Cell {
    pub square: Square,
    pub occupant: Occupant,
}

impl Cell {
    #[inline]
    pub const fn empty(square: Square) -> Cell {
        Cell {
            square,
            occupant: Occupant::Empty,
        }
    }
}
