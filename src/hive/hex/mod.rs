mod axial;
mod direction;

pub use axial::Hex;
pub use direction::Direction;

/// Returns the six neighbours of `h`, in the fixed cyclic order of [`Direction::all`].
pub fn neighbours(h: Hex) -> [Hex; 6]
{
    Direction::all().map(|d| h + d)
}

/// True iff `a` and `b` are one unit-direction step apart.
pub fn adjacent(a: Hex, b: Hex) -> bool
{
    Direction::all().iter().any(|d| a + *d == b)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn neighbours_are_six_distinct_hexes()
    {
        let ns = neighbours(Hex::ORIGIN);
        let mut seen = std::collections::HashSet::new();
        for n in ns
        {
            assert!(seen.insert(n));
            assert!(adjacent(Hex::ORIGIN, n));
        }
    }
}
