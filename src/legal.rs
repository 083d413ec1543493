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

use crate::{
    board::Board,
    m::{CapacityExceeded, MoveList},
    movegen::{in_check, pseudo_legal_moves},
};

/// Keeps only the moves that do not leave the mover's king attacked.
///
/// Each candidate is played, tested and taken back, so the board is
/// unchanged when this returns. The order of `moves` is preserved.
pub fn filter_legal(board: &mut Board, mut moves: MoveList) -> MoveList {
    let mover = board.turn();
    moves.retain(|m| {
        board.make_move(*m);
        let legal = !in_check(board, mover);
        board.unmake_move(*m);
        legal
    });
    moves
}

/// Generates all legal moves for the side to move.
///
/// # Examples
///
/// ```
/// use starfish::{legal_moves, Board};
///
/// let mut board = Board::new();
/// let moves = legal_moves(&mut board)?;
/// assert_eq!(moves.len(), 20);
/// # Ok::<_, starfish::CapacityExceeded>(())
/// ```
///
/// # Errors
///
/// Errors with [`CapacityExceeded`] if the side to move has more
/// pseudo-legal moves than a [`MoveList`] can hold.
pub fn legal_moves(board: &mut Board) -> Result<MoveList, CapacityExceeded> {
    let mut moves = MoveList::new();
    pseudo_legal_moves(board, &mut moves)?;
    Ok(filter_legal(board, moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, fen::Fen, square::Square};

    fn board(fen: &str) -> Board {
        fen.parse::<Fen>()
            .expect("valid fen")
            .into_board()
            .expect("valid setup")
    }

    fn uci(moves: &MoveList) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_pinned_piece() {
        let mut board = board("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1");
        let moves = legal_moves(&mut board).expect("room for moves");
        assert!(moves.iter().all(|m| m.from != "e2".parse::<Square>().expect("square")));
        assert_eq!(uci(&moves), ["e1d1", "e1f1", "e1d2", "e1f2"]);
    }

    #[test]
    fn test_king_avoids_attacked_squares() {
        let mut board = board("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
        assert_eq!(uci(&legal_moves(&mut board).expect("room for moves")), ["e1d1", "e1f1"]);
    }

    #[test]
    fn test_evasion_by_capture() {
        let mut board = board("4k3/8/8/8/8/8/4q3/4K3 w - - 0 1");
        assert_eq!(uci(&legal_moves(&mut board).expect("room for moves")), ["e1e2"]);
    }

    #[test]
    fn test_order_preserved_and_board_restored() {
        let mut board = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1");
        let before = board.clone();

        let mut pseudo = MoveList::new();
        pseudo_legal_moves(&board, &mut pseudo).expect("room for moves");
        let legal = filter_legal(&mut board, pseudo.clone());
        assert_eq!(board, before);

        let mut rest = pseudo.iter();
        for m in &legal {
            assert!(rest.any(|p| p == m), "{m} out of order");
        }
        for m in &legal {
            board.make_move(*m);
            assert!(!in_check(&board, Color::White));
            board.unmake_move(*m);
        }
    }

    #[test]
    fn test_black_to_move() {
        let mut board = Board::new();
        let mut moves = legal_moves(&mut board).expect("room for moves");
        let e4 = moves.remove(1 + 2 * 4);
        assert_eq!(e4.to_string(), "e2e4");
        board.make_move(e4);
        assert_eq!(legal_moves(&mut board).expect("room for moves").len(), 20);
        board.unmake_move(e4);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut board = board("QQQQQQQk/Q6Q/Q6Q/Q6Q/Q6Q/Q1Q4Q/Q2QQ2Q/KQ3QQQ w - - 0 1");
        assert_eq!(legal_moves(&mut board), Err(CapacityExceeded));
    }
}
