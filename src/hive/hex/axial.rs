use std::ops::Add;

use super::Direction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A position on the unbounded hexagonal grid, in axial coordinates.
///
/// The implicit cube coordinate is `s = -q - r`; nothing in the engine needs it directly.
pub struct Hex
{
    pub q: i32,
    pub r: i32,
}

impl Hex
{
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Hex
    {
        Hex { q, r }
    }
}

impl std::fmt::Display for Hex
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl From<(i32, i32)> for Hex
{
    fn from(value: (i32, i32)) -> Self
    {
        Hex::new(value.0, value.1)
    }
}

impl Add<Direction> for Hex
{
    type Output = Hex;

    fn add(self, rhs: Direction) -> Self::Output
    {
        let (dq, dr) = rhs.delta();
        Hex::new(self.q + dq, self.r + dr)
    }
}

impl Add<&Direction> for Hex
{
    type Output = Hex;

    fn add(self, rhs: &Direction) -> Self::Output
    {
        self + *rhs
    }
}
