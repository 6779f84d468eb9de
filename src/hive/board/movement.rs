use std::collections::{HashSet, VecDeque};

use crate::prelude::*;

use super::{neighbours_top, occupied, slide_once, top_of_stack, Tile};

/// The legal destination hexes for `tile`, lifted from its current position.
///
/// `tile` is excluded from its own result in every case. This does not check
/// whether the move is otherwise legal (colour to move, one-hive, queen
/// placed) — callers apply those checks before consulting this function.
pub fn legal_destinations(tiles: &[Tile], tile: &Tile) -> HashSet<Hex>
{
    if tile.stack_height > 0
    {
        // Any piece riding on top of a stack moves like a beetle, mosquitos included.
        return beetle(tiles, tile.position);
    }

    match tile.kind
    {
        | Kind::Queen => slide_once(tiles, tile.position).into_iter().collect(),
        | Kind::Ant => ant(tiles, tile.position),
        | Kind::Grasshopper => grasshopper(tiles, tile.position).into_iter().collect(),
        | Kind::Spider => spider(tiles, tile.position),
        | Kind::Beetle => beetle(tiles, tile.position),
        | Kind::Ladybug => ladybug(tiles, tile.position),
        | Kind::Mosquito => mosquito(tiles, tile.position),
    }
}

/// Transitive closure of [`slide_once`]: every hex the soldier ant can reach
/// by repeated sliding, excluding its own starting hex.
fn ant(tiles: &[Tile], from: Hex) -> HashSet<Hex>
{
    let mut reached = HashSet::new();
    let mut queue = vec![from];

    while let Some(next) = queue.pop()
    {
        if reached.contains(&next)
        {
            continue;
        }
        if next != from
        {
            reached.insert(next);
        }
        for step in slide_once(tiles, next)
        {
            if step != from && !reached.contains(&step)
            {
                queue.push(step);
            }
        }
    }

    reached
}

/// For each of the six directions, jump over any run of occupied cells to the
/// first empty cell beyond it. A direction with no occupied neighbour yields
/// no move (the grasshopper cannot step onto an adjacent empty cell).
fn grasshopper(tiles: &[Tile], from: Hex) -> Vec<Hex>
{
    let mut destinations = Vec::new();

    for direction in hex::Direction::all()
    {
        let mut cursor = from + direction;
        let mut jumped = false;
        while occupied(tiles, cursor)
        {
            cursor = cursor + direction;
            jumped = true;
        }
        if jumped
        {
            destinations.push(cursor);
        }
    }

    destinations
}

/// BFS over [`slide_once`] with a single global seen set, collecting every
/// hex reached at exactly depth 3.
///
/// A hex is marked seen the first time it is dequeued, at whatever depth that
/// happens to be, and is never reconsidered afterwards — even if a later,
/// longer path would also reach it. This matters: a hex one slide away and a
/// hex three slides away can coincide with a hex reachable by both a 1-step
/// and an independent 3-step path, and only the first arrival counts.
fn spider(tiles: &[Tile], from: Hex) -> HashSet<Hex>
{
    let mut destinations = HashSet::new();
    let mut seen: Vec<Hex> = Vec::new();
    let mut queue: VecDeque<(Hex, u8)> = VecDeque::from([(from, 0)]);

    while let Some((next, depth)) = queue.pop_front()
    {
        if depth >= 4
        {
            break;
        }
        if seen.contains(&next)
        {
            continue;
        }

        if depth == 3
        {
            destinations.insert(next);
        }

        for step in slide_once(tiles, next)
        {
            queue.push_back((step, depth + 1));
        }

        seen.push(next);
    }

    destinations
}

/// The union of a ground-level slide and the occupied neighbouring hexes (the
/// beetle climbing onto a stack).
fn beetle(tiles: &[Tile], from: Hex) -> HashSet<Hex>
{
    let mut destinations: HashSet<Hex> = slide_once(tiles, from).into_iter().collect();
    for neighbour in hex::neighbours(from)
    {
        if occupied(tiles, neighbour)
        {
            destinations.insert(neighbour);
        }
    }
    destinations
}

/// Exactly three steps: two across the top of the hive, excluding the
/// ladybug's own origin at every level, followed by one step down onto an
/// empty hex.
fn ladybug(tiles: &[Tile], from: Hex) -> HashSet<Hex>
{
    let mut destinations = HashSet::new();
    ladybug_walk(tiles, from, from, 1, &mut destinations);
    destinations
}

fn ladybug_walk(tiles: &[Tile], origin: Hex, current: Hex, depth: u8, destinations: &mut HashSet<Hex>)
{
    if depth < 3
    {
        for neighbour in neighbours_top(tiles, current)
        {
            if neighbour.position == origin
            {
                continue;
            }
            ladybug_walk(tiles, origin, neighbour.position, depth + 1, destinations);
        }
    }
    else
    {
        for neighbour in hex::neighbours(current)
        {
            if !occupied(tiles, neighbour)
            {
                destinations.insert(neighbour);
            }
        }
    }
}

/// On the ground, the union of the movement sets of every piece kind
/// currently top-of-stack on a neighbouring hex (excluding the mosquito
/// itself — a mosquito surrounded only by other mosquitos has no moves).
fn mosquito(tiles: &[Tile], from: Hex) -> HashSet<Hex>
{
    let mut kinds = HashSet::new();
    for neighbour in neighbours_top(tiles, from)
    {
        if neighbour.kind != Kind::Mosquito
        {
            kinds.insert(neighbour.kind);
        }
    }

    let mut destinations = HashSet::new();
    for kind in kinds
    {
        let set = match kind
        {
            | Kind::Queen => slide_once(tiles, from).into_iter().collect(),
            | Kind::Ant => ant(tiles, from),
            | Kind::Grasshopper => grasshopper(tiles, from).into_iter().collect(),
            | Kind::Spider => spider(tiles, from),
            | Kind::Beetle => beetle(tiles, from),
            | Kind::Ladybug => ladybug(tiles, from),
            | Kind::Mosquito => unreachable!("mosquito kinds are filtered out above"),
        };
        destinations.extend(set);
    }

    destinations
}
