#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The seven piece types recognised by this engine, including the Ladybug and
/// Mosquito expansion pieces.
pub enum Kind
{
    Queen = 0,
    Ant = 1,
    Grasshopper = 2,
    Spider = 3,
    Beetle = 4,
    Ladybug = 5,
    Mosquito = 6,
}

impl Kind
{
    /// All seven kinds, in a fixed order matching [`Kind::index`].
    pub const fn all() -> [Kind; 7]
    {
        [
            Self::Queen,
            Self::Ant,
            Self::Grasshopper,
            Self::Spider,
            Self::Beetle,
            Self::Ladybug,
            Self::Mosquito,
        ]
    }

    /// The starting reserve count for this kind, per player.
    pub const fn initial_count(&self) -> u8
    {
        match self
        {
            | Self::Queen => 1,
            | Self::Ant => 3,
            | Self::Grasshopper => 3,
            | Self::Spider => 2,
            | Self::Beetle => 2,
            | Self::Ladybug => 1,
            | Self::Mosquito => 1,
        }
    }

    /// A stable array index for this kind, used by [`crate::hive::piece::Reserve`].
    pub const fn index(&self) -> usize
    {
        *self as usize
    }
}

impl std::fmt::Display for Kind
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Queen => "queen-bee",
            | Self::Ant => "soldier-ant",
            | Self::Grasshopper => "grasshopper",
            | Self::Spider => "spider",
            | Self::Beetle => "beetle",
            | Self::Ladybug => "ladybug",
            | Self::Mosquito => "mosquito",
        };
        write!(f, "{name}")
    }
}
