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

//! Pseudo-legal move generation and check detection.
//!
//! Generated moves obey how each piece moves, but may leave the mover's own
//! king attacked. Use [`legal_moves()`](crate::legal_moves) to filter those.

use crate::{
    board::Board,
    color::Color,
    m::{CapacityExceeded, Move, MoveList},
    role::Role,
    square::Square,
    types::Piece,
};

/// Whether a ray may be followed beyond the square just tried.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Ray {
    Continue,
    Stop,
}

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
];
const KNIGHT: [(i8, i8); 8] = [
    (1, -2),
    (-1, -2),
    (1, 2),
    (-1, 2),
    (2, -1),
    (-2, -1),
    (2, 1),
    (-2, 1),
];

const FULL_RAY: u8 = 8;
const SINGLE_STEP: u8 = 2;

/// Offers the move `from`-`to` to `emit` unless the target holds a friendly
/// piece, or an enemy piece while `can_capture` is false.
fn push_candidate<E, F>(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    can_capture: bool,
    emit: &mut F,
) -> Result<Ray, E>
where
    F: FnMut(Move) -> Result<(), E>,
{
    let capture = board.occupant_at(to);
    match capture.color() {
        None => {
            emit(Move::new(from, to, capture, can_capture))?;
            Ok(Ray::Continue)
        }
        Some(other) if other == color => Ok(Ray::Stop),
        Some(_) if can_capture => {
            emit(Move::new(from, to, capture, can_capture))?;
            Ok(Ray::Stop)
        }
        Some(_) => Ok(Ray::Stop),
    }
}

/// Walks each direction for at most `distance - 1` squares.
fn slide<E, F>(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    distance: u8,
    emit: &mut F,
) -> Result<(), E>
where
    F: FnMut(Move) -> Result<(), E>,
{
    for &(dx, dy) in directions {
        let mut sq = from;
        for _ in 1..distance {
            let Some(to) = sq.offset(dx, dy) else {
                break;
            };
            if push_candidate(board, color, from, to, true, emit)? == Ray::Stop {
                break;
            }
            sq = to;
        }
    }
    Ok(())
}

fn pawn<E, F>(board: &Board, color: Color, from: Square, emit: &mut F) -> Result<(), E>
where
    F: FnMut(Move) -> Result<(), E>,
{
    let dy = color.forward();
    let Some(ahead) = from.offset(0, dy) else {
        return Ok(()); // last rank
    };

    push_candidate(board, color, from, ahead, false, emit)?;

    for dx in [1, -1] {
        if let Some(to) = from.offset(dx, dy) {
            if !board.occupant_at(to).is_empty() {
                push_candidate(board, color, from, to, true, emit)?;
            }
        }
    }

    if from.row() == color.pawn_row() && board.occupant_at(ahead).is_empty() {
        if let Some(to) = from.offset(0, 2 * dy) {
            push_candidate(board, color, from, to, false, emit)?;
        }
    }

    Ok(())
}

/// Generates the moves of the piece on `from`, if any, in a fixed order.
fn generate<E, F>(board: &Board, from: Square, emit: &mut F) -> Result<(), E>
where
    F: FnMut(Move) -> Result<(), E>,
{
    let Some(Piece { color, role }) = board.piece_at(from) else {
        return Ok(());
    };

    match role {
        Role::Pawn => pawn(board, color, from, emit),
        Role::Knight => {
            for (dx, dy) in KNIGHT {
                if let Some(to) = from.offset(dx, dy) {
                    push_candidate(board, color, from, to, true, emit)?;
                }
            }
            Ok(())
        }
        Role::Bishop => slide(board, color, from, &DIAGONAL, FULL_RAY, emit),
        Role::Rook => slide(board, color, from, &ORTHOGONAL, FULL_RAY, emit),
        Role::Queen => slide(board, color, from, &ALL_DIRECTIONS, FULL_RAY, emit),
        Role::King => slide(board, color, from, &ALL_DIRECTIONS, SINGLE_STEP, emit),
    }
}

/// Appends the pseudo-legal moves of the piece on `from` to `moves`.
/// Appends nothing if the square is empty.
///
/// # Errors
///
/// Errors with [`CapacityExceeded`] if `moves` runs full. Moves appended
/// before that point stay in the list.
pub fn piece_moves(
    board: &Board,
    from: Square,
    moves: &mut MoveList,
) -> Result<(), CapacityExceeded> {
    generate(board, from, &mut |m| moves.try_push(m).map_err(CapacityExceeded::from))
}

/// Appends the pseudo-legal moves of every piece of the side to move, in
/// ascending square order.
///
/// # Examples
///
/// ```
/// use starfish::{movegen::pseudo_legal_moves, Board, MoveList};
///
/// let mut moves = MoveList::new();
/// pseudo_legal_moves(&Board::new(), &mut moves)?;
/// assert_eq!(moves.len(), 20);
/// # Ok::<_, starfish::CapacityExceeded>(())
/// ```
///
/// # Errors
///
/// Errors with [`CapacityExceeded`] if `moves` runs full.
pub fn pseudo_legal_moves(board: &Board, moves: &mut MoveList) -> Result<(), CapacityExceeded> {
    let turn = board.turn();
    for from in Square::all() {
        if board.occupant_at(from).color() == Some(turn) {
            piece_moves(board, from, moves)?;
        }
    }
    Ok(())
}

struct KingAttacked;

/// Tests if the king of `color` is attacked by any enemy piece.
///
/// Stops at the first enemy move that lands on the king.
pub fn in_check(board: &Board, color: Color) -> bool {
    let king = board.king_of(color);
    board.pieces(!color).any(|(from, _)| {
        generate(board, from, &mut |m: Move| {
            if m.to == king {
                Err(KingAttacked)
            } else {
                Ok(())
            }
        })
        .is_err()
    })
}
