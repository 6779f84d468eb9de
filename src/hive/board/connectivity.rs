use std::collections::HashSet;

use crate::prelude::*;

use super::ground_hexes;

/// Whether removing the ground-level tile at `p` would disconnect the hive.
///
/// A piece whose removal would split the hive into two or more pieces may not
/// move (the one-hive rule). Implemented as two bounded BFS passes rather than
/// a linear-time articulation-point algorithm: the board holds at most 26
/// tiles, so the quadratic cost is immaterial.
pub(crate) fn is_bridge(tiles: &[Tile], p: Hex) -> bool
{
    let positions = ground_hexes(tiles);

    let neighbours: Vec<Hex> = hex::neighbours(p).into_iter().filter(|n| positions.contains(n)).collect();

    if neighbours.len() <= 1
    {
        return false;
    }

    let reach = |start: Hex| -> HashSet<Hex> {
        let mut seen = HashSet::new();
        let mut queue = vec![start];
        while let Some(h) = queue.pop()
        {
            if h == p || !seen.insert(h)
            {
                continue;
            }
            for n in hex::neighbours(h)
            {
                if positions.contains(&n) && !seen.contains(&n)
                {
                    queue.push(n);
                }
            }
        }
        seen
    };

    let first_pool = reach(neighbours[0]);

    neighbours[1..].iter().any(|&n| !first_pool.contains(&n))
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn t(q: i32, r: i32, kind: Kind) -> Tile
    {
        Tile::new(Hex::new(q, r), Color::Black, kind, 0)
    }

    #[test]
    fn leaf_tile_is_never_a_bridge()
    {
        let tiles = vec![t(0, 0, Kind::Queen), t(1, 0, Kind::Ant)];
        assert!(!is_bridge(&tiles, Hex::new(1, 0)));
    }

    #[test]
    fn middle_of_a_three_chain_is_a_bridge()
    {
        // Three tiles in a straight chain: the middle one connects the other two.
        let tiles = vec![
            t(0, 0, Kind::Queen),
            t(1, 0, Kind::Ant),
            t(2, 0, Kind::Ant),
        ];
        assert!(is_bridge(&tiles, Hex::new(1, 0)));
        assert!(!is_bridge(&tiles, Hex::new(0, 0)));
        assert!(!is_bridge(&tiles, Hex::new(2, 0)));
    }

    #[test]
    fn a_ring_has_no_bridges()
    {
        let center = Hex::new(0, 0);
        let mut tiles = vec![];
        for n in hex::neighbours(center)
        {
            tiles.push(Tile::new(n, Color::Black, Kind::Ant, 0));
        }
        for tile in &tiles
        {
            assert!(!is_bridge(&tiles, tile.position));
        }
    }
}
