pub mod board;
pub mod game;
pub mod hex;
pub mod piece;

pub use board::Tile;
pub use game::{CompletionState, Game};
pub use hex::{Direction, Hex};
pub use piece::{Color, Kind, Reserve};
