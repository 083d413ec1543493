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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use starfish::{perft, Board};
//!
//! let mut board = Board::new();
//! assert_eq!(perft(&mut board, 1)?, 20);
//! assert_eq!(perft(&mut board, 2)?, 400);
//! assert_eq!(perft(&mut board, 3)?, 8902);
//! # Ok::<_, starfish::CapacityExceeded>(())
//! ```

use log::debug;

use crate::{
    board::Board,
    legal::legal_moves,
    m::{CapacityExceeded, Move},
};

/// Counts legal move paths of a given length.
///
/// Paths ending in mate or stalemate before `depth` are not counted. The
/// board is played forward and back in place and is unchanged when this
/// returns, also on error.
///
/// # Errors
///
/// Errors with [`CapacityExceeded`] if some position along the way has
/// more pseudo-legal moves than fit into a
/// [`MoveList`](crate::MoveList).
pub fn perft(board: &mut Board, depth: u32) -> Result<u64, CapacityExceeded> {
    if depth < 1 {
        Ok(1)
    } else {
        let moves = legal_moves(board)?;

        if depth == 1 {
            Ok(moves.len() as u64)
        } else {
            let mut nodes = 0;
            for m in moves {
                board.make_move(m);
                let child = perft(board, depth - 1);
                board.unmake_move(m);
                nodes += child?;
            }
            Ok(nodes)
        }
    }
}

/// Like [`perft()`], but returns the count below each legal root move, in
/// generation order. Each entry is also logged at debug level.
///
/// # Errors
///
/// Errors with [`CapacityExceeded`] like [`perft()`].
pub fn divide(board: &mut Board, depth: u32) -> Result<Vec<(Move, u64)>, CapacityExceeded> {
    if depth < 1 {
        return Ok(Vec::new());
    }

    let moves = legal_moves(board)?;
    let mut entries = Vec::with_capacity(moves.len());
    for m in moves {
        board.make_move(m);
        let child = perft(board, depth - 1);
        board.unmake_move(m);
        let nodes = child?;
        debug!("{m}: {nodes}");
        entries.push((m, nodes));
    }
    Ok(entries)
}
