//! A small chess move generator on a 64 square mailbox board, with legal
//! move filtering and perft.
//!
//! The rules are the base rules of chess: castling, en passant and
//! promotion are not generated.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use starfish::{legal_moves, Board};
//!
//! let mut board = Board::new();
//! let legals = legal_moves(&mut board)?;
//! assert_eq!(legals.len(), 20);
//! # Ok::<_, starfish::CapacityExceeded>(())
//! ```
//!
//! Play and take back moves:
//!
//! ```
//! use starfish::{uci::UciMove, Board, Color};
//!
//! let mut board = Board::new();
//!
//! // 1. e4
//! let m = "e2e4".parse::<UciMove>()?.to_move(&mut board)?;
//! board.make_move(m);
//! assert_eq!(board.turn(), Color::Black);
//!
//! board.unmake_move(m);
//! assert_eq!(board, Board::new());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Count move paths:
//!
//! ```
//! use starfish::{fen::Fen, perft};
//!
//! let mut board = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"
//!     .parse::<Fen>()?
//!     .into_board()?;
//! assert_eq!(perft(&mut board, 2)?, 191);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Also supports [FEN](fen) placement and [UCI](uci) move notation, and an
//! interactive [loop](play) for playing both sides.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. Nothing is
//! printed unless the application installs a logger.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod color;
mod legal;
mod m;
mod perft;
mod role;
mod square;
mod types;

pub mod board;
pub mod fen;
pub mod movegen;
pub mod play;
pub mod uci;

pub use board::{Board, SetupError, SetupErrorKinds};
pub use color::{ByColor, Color};
pub use fen::{Fen, ParseFenError};
pub use legal::{filter_legal, legal_moves};
pub use m::{CapacityExceeded, Move, MoveList, MAX_MOVES};
pub use movegen::{in_check, piece_moves, pseudo_legal_moves};
pub use perft::{divide, perft};
pub use role::Role;
pub use square::{ParseSquareError, Square};
pub use types::{Cell, Occupant, Piece};
pub use uci::{IllegalMove, ParseUciError, UciMove};
