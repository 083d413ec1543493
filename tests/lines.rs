use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, StringWithSeparator};
use starfish::{in_check, legal_moves, uci::UciMove, Board, Color, Move, Role};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, UciMove>")]
    uci: Vec<UciMove>,
    board_fen: String,
    legal: usize,
}

fn assert_kings_cached(board: &Board) {
    for color in Color::ALL {
        let king = board.king_of(color);
        assert_eq!(board.piece_at(king), Some(color.king()));
        assert_eq!(
            board
                .pieces(color)
                .filter(|&(_, piece)| piece.role == Role::King)
                .count(),
            1
        );
    }
}

#[test]
fn test_lines() {
    let mut reader = csv::Reader::from_path("tests/lines.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let mut board = Board::new();
        let mut played: Vec<Move> = Vec::new();

        for uci in record.uci {
            let m = uci.to_move(&mut board).expect("legal uci");

            let before = board.clone();
            board.make_move(m);
            assert!(!in_check(&board, !board.turn()), "line {}: {}", i + 1, m);
            assert_kings_cached(&board);
            board.unmake_move(m);
            assert_eq!(board, before, "line {}: {}", i + 1, m);

            board.make_move(m);
            played.push(m);
        }

        assert_eq!(board.board_fen(), record.board_fen, "line {}", i + 1);
        assert_eq!(
            legal_moves(&mut board).expect("room for moves").len(),
            record.legal,
            "line {}",
            i + 1
        );

        for m in played.into_iter().rev() {
            board.unmake_move(m);
            assert_kings_cached(&board);
        }
        assert_eq!(board, Board::new(), "line {}", i + 1);
    }
}
