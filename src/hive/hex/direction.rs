#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// One of the six unit directions on a hexagonal grid.
///
/// The cyclic order here (North, NorthEast, SouthEast, South, SouthWest, NorthWest)
/// is load-bearing: sliding, the ladybug, and the mosquito all rely on "the two
/// neighbouring directions" meaning index ± 1 mod 6.
pub enum Direction
{
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Direction
{
    /// The six directions in their fixed cyclic order.
    pub const fn all() -> [Direction; 6]
    {
        [
            Self::North,
            Self::NorthEast,
            Self::SouthEast,
            Self::South,
            Self::SouthWest,
            Self::NorthWest,
        ]
    }

    /// The `(dq, dr)` delta for this direction.
    pub const fn delta(&self) -> (i32, i32)
    {
        match self
        {
            | Self::North => (0, -1),
            | Self::NorthEast => (1, -1),
            | Self::SouthEast => (1, 0),
            | Self::South => (0, 1),
            | Self::SouthWest => (-1, 1),
            | Self::NorthWest => (-1, 0),
        }
    }

    /// The index of this direction within [`Direction::all`], used by the
    /// bitfield-based sliding algorithm.
    pub const fn index(&self) -> usize
    {
        match self
        {
            | Self::North => 0,
            | Self::NorthEast => 1,
            | Self::SouthEast => 2,
            | Self::South => 3,
            | Self::SouthWest => 4,
            | Self::NorthWest => 5,
        }
    }
}
