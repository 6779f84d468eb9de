mod connectivity;
mod movement;
mod sliding;
mod tile;

pub use tile::Tile;

pub(crate) use connectivity::is_bridge;
pub use movement::legal_destinations;
pub(crate) use sliding::slide_once;

use std::collections::HashSet;

use crate::prelude::*;

/// The tile at `p` with the greatest `stack_height`, if any tile occupies `p`.
pub fn top_of_stack(tiles: &[Tile], p: Hex) -> Option<&Tile>
{
    tiles.iter().filter(|t| t.position == p).max_by_key(|t| t.stack_height)
}

/// Whether any tile (at any stack height) occupies `p`.
pub fn occupied(tiles: &[Tile], p: Hex) -> bool
{
    tiles.iter().any(|t| t.position == p)
}

/// The top-of-stack tiles at the (up to six) neighbours of `p` that are occupied.
pub fn neighbours_top(tiles: &[Tile], p: Hex) -> Vec<Tile>
{
    hex::neighbours(p).into_iter().filter_map(|n| top_of_stack(tiles, n).copied()).collect()
}

/// The set of ground-level hexes (i.e. ignoring stacking) that are occupied.
pub fn ground_hexes(tiles: &[Tile]) -> HashSet<Hex>
{
    tiles.iter().map(|t| t.position).collect()
}

/// Whether the hive (ignoring stacking) forms a single connected component.
///
/// Trivially true for zero or one tiles; used as a post-move invariant check,
/// not on the hot path (every legal move already preserves connectivity by
/// construction via [`is_bridge`]).
pub fn is_connected(tiles: &[Tile]) -> bool
{
    let positions = ground_hexes(tiles);
    let Some(&start) = positions.iter().next()
    else
    {
        return true;
    };

    let mut seen = HashSet::new();
    let mut stack = vec![start];
    while let Some(h) = stack.pop()
    {
        if !seen.insert(h)
        {
            continue;
        }
        for n in hex::neighbours(h)
        {
            if positions.contains(&n) && !seen.contains(&n)
            {
                stack.push(n);
            }
        }
    }

    seen.len() == positions.len()
}
