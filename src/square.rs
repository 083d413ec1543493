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

use std::{error::Error, fmt, str::FromStr};

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

/// A square index in `0..64`.
///
/// Squares are numbered row by row starting at the top left corner as seen
/// from White: `a8` is 0, `h8` is 7, `a1` is 56 and `h1` is 63. Row 0 is
/// therefore rank 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets the square with the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in `0..64`.
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < 64, "square index out of range");
        Square(index as u8)
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Gets the square at the given file (0 is the a-file) and row (0 is
    /// rank 8), or `None` if it is off the board.
    #[inline]
    pub const fn from_coords(file: i8, row: i8) -> Option<Square> {
        if 0 <= file && file < 8 && 0 <= row && row < 8 {
            Some(Square((row * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Parses a square name such as `e4`.
    ///
    /// # Errors
    ///
    /// Errors with [`ParseSquareError`] if the input is not exactly a file
    /// letter followed by a rank digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use starfish::Square;
    ///
    /// let sq = Square::from_ascii(b"e2")?;
    /// assert_eq!(sq.index(), 52);
    /// # Ok::<_, starfish::ParseSquareError>(())
    /// ```
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square((b'8' - rank) * 8 + (file - b'a')))
            }
            _ => Err(ParseSquareError),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File from 0 (a-file) to 7 (h-file).
    #[inline]
    pub const fn file(self) -> i8 {
        (self.0 & 7) as i8
    }

    /// Row from 0 (rank 8) to 7 (rank 1).
    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 >> 3) as i8
    }

    /// The conventional rank number, from 1 to 8.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - (self.0 >> 3)
    }

    /// Moves by `dx` files and `dy` rows, or returns `None` if that leaves
    /// the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        Square::from_coords(self.file() + dx, self.row() + dy)
    }

    pub fn file_char(self) -> char {
        char::from(b'a' + self.0 % 8)
    }

    pub fn rank_char(self) -> char {
        char::from(b'0' + self.rank())
    }

    /// All 64 squares in index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string().to_uppercase())
    }
}
