use env_logger::Env;
use starfish::{perft, Board};

const DEPTH: u32 = 5;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    println!("Welcome to Starfish!");

    let mut board = Board::new();
    let nodes = perft(&mut board, DEPTH)?;
    println!("perft({DEPTH}) = {nodes}");

    Ok(())
}
