use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A piece resting on the board.
///
/// Two tiles may share a position iff at least one of them is a beetle or a
/// stacked mosquito; their `stack_height` values at that position then form a
/// contiguous range starting at 0.
pub struct Tile
{
    pub position: Hex,
    pub color: Color,
    pub kind: Kind,
    pub stack_height: u8,
}

impl Tile
{
    pub fn new(position: Hex, color: Color, kind: Kind, stack_height: u8) -> Tile
    {
        Tile {
            position,
            color,
            kind,
            stack_height,
        }
    }
}
