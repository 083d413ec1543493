use std::io;

use env_logger::Env;
use starfish::{play::Session, Board};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut session = Session::new(Board::new());
    session.run(io::stdin().lock(), io::stdout().lock())?;

    log::info!("end of input after {} to move", session.board().turn());
    Ok(())
}
