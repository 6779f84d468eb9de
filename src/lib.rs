pub mod error;
pub mod hive;

#[allow(unused)]
pub mod prelude
{
    pub use log;

    pub use crate::error::{Error, Result};
    pub use crate::hive::hex;
    pub use crate::hive::{CompletionState, Color, Game, Hex, Kind, Reserve, Tile};
}
