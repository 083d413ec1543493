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

use std::{error::Error, fmt};

use arrayvec::ArrayVec;

use crate::{square::Square, types::Occupant};

/// Information about a move.
///
/// A move remembers what stood on the target square before it was played,
/// so that [`Board::unmake_move()`](crate::Board::unmake_move) can restore
/// it.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using the coordinate notation
/// of the interactive prompt, e.g. `e2e4`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Occupant of `to` before the move.
    pub capture: Occupant,
    /// Whether the move may land on an enemy piece. False only for pawn
    /// pushes.
    pub can_capture: bool,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, capture: Occupant, can_capture: bool) -> Move {
        Move {
            from,
            to,
            capture,
            can_capture,
        }
    }

    /// Checks if the move takes a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        !self.capture.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Upper bound on the number of moves one side can have.
pub const MAX_MOVES: usize = 256;

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is large enough for any position reachable from the
/// starting position. Hand-made positions with many more pieces can exceed
/// it, in which case generation fails with [`CapacityExceeded`].
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Error when a [`MoveList`] has no room for another move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapacityExceeded;

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move list capacity of {MAX_MOVES} exceeded")
    }
}

impl Error for CapacityExceeded {}

impl<T> From<arrayvec::CapacityError<T>> for CapacityExceeded {
    fn from(_: arrayvec::CapacityError<T>) -> CapacityExceeded {
        CapacityExceeded
    }
}
