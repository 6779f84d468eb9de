#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The two sides in a game of Hive. Black always moves first.
pub enum Color
{
    Black,
    White,
}

impl Color
{
    /// The other colour.
    pub const fn flip(&self) -> Color
    {
        match self
        {
            | Self::Black => Self::White,
            | Self::White => Self::Black,
        }
    }
}

impl std::fmt::Display for Color
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Black => "Black",
            | Self::White => "White",
        };
        write!(f, "{name}")
    }
}
