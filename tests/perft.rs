use std::{
    fs::File,
    io::{prelude::*, BufReader},
};

use starfish::{fen::Fen, perft, Board};

fn test_perft_file(path: &str, node_limit: u64) {
    let file = File::open(path).expect("failed to open test suite");
    let reader = BufReader::new(file);

    let mut board = Board::new();

    for line in reader.lines().map(|l| l.unwrap()) {
        println!("{}", line);

        let trimmed = line.trim();
        let mut slices = trimmed.splitn(2, ' ');

        match slices.next() {
            Some("epd") => {
                board = slices
                    .next()
                    .expect("missing epd")
                    .parse::<Fen>()
                    .expect("invalid fen")
                    .into_board()
                    .expect("illegal fen");
            }
            Some("perft") => {
                let mut params = slices.next().expect("missing perft params").splitn(2, ' ');

                let depth = params
                    .next()
                    .expect("missing perft depth")
                    .parse()
                    .expect("depth not an integer");

                let nodes = params
                    .next()
                    .expect("missing perft nodes")
                    .parse()
                    .expect("nodes not an integer");

                if nodes <= node_limit {
                    let before = board.clone();
                    assert_eq!(perft(&mut board, depth), Ok(nodes));
                    assert_eq!(board, before);
                }
            }
            _ => {}
        }
    }
}

#[test]
fn test_base() {
    test_perft_file("tests/base.perft", 200_000);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_base_deep() {
    test_perft_file("tests/base.perft", 5_000_000);
}
