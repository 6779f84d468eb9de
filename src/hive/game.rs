use std::collections::HashSet;

use crate::error::Kind as RejectKind;
use crate::prelude::*;

use super::{board, hex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The outcome of a game, as reported by [`Game::completion_state`].
pub enum CompletionState
{
    Incomplete,
    BlackWon,
    WhiteWon,
    Draw,
}

impl std::fmt::Display for CompletionState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Incomplete => "Incomplete",
            | Self::BlackWon => "BlackWon",
            | Self::WhiteWon => "WhiteWon",
            | Self::Draw => "Draw",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Debug, PartialEq)]
/// The full state of a game of Hive. Plain, `Clone`-able data: a caller that
/// wants undo/redo or snapshotting simply clones the value and holds onto it.
pub struct Game
{
    move_number: u32,
    color_to_move: Color,
    white_reserve: Reserve,
    black_reserve: Reserve,
    tiles: Vec<Tile>,

    /// Set when both sides were found to have no legal action in succession.
    /// The rules as given only specify a single mandatory pass; a second
    /// consecutive one is treated as a stalemate draw (see DESIGN.md).
    stalemated: bool,
}

impl Game
{
    /// A fresh game: move 1, Black to move, full reserves, empty board.
    pub fn init() -> Game
    {
        log::info!("starting a new game");
        Game {
            move_number: 1,
            color_to_move: Color::Black,
            white_reserve: Reserve::default(),
            black_reserve: Reserve::default(),
            tiles: Vec::new(),
            stalemated: false,
        }
    }

    /// The move number; increments after White plays.
    pub fn move_number(&self) -> u32
    {
        self.move_number
    }

    /// The colour whose turn it is to act.
    pub fn color_to_move(&self) -> Color
    {
        self.color_to_move
    }

    /// The tiles currently on the board, in insertion order.
    pub fn tiles(&self) -> &[Tile]
    {
        &self.tiles
    }

    /// The unplaced-piece counts remaining for `color`.
    pub fn reserve(&self, color: Color) -> &Reserve
    {
        match color
        {
            | Color::Black => &self.black_reserve,
            | Color::White => &self.white_reserve,
        }
    }

    /// Attempts to place a reserve piece of `kind` at `(q, r)` for the side to
    /// move. Returns `true` and applies the placement on success; returns
    /// `false` and leaves the state untouched on any rule violation.
    pub fn place(&mut self, q: i32, r: i32, kind: Kind) -> bool
    {
        match self.try_place(Hex::new(q, r), kind)
        {
            | Ok(()) => true,
            | Err(err) =>
            {
                log::debug!("rejected: {err}");
                false
            }
        }
    }

    fn try_place(&mut self, pos: Hex, kind: Kind) -> Result<()>
    {
        let color = self.color_to_move;

        if !self.reserve(color).has(kind)
        {
            return Err(Error::new(RejectKind::ReserveEmpty, format!("{color} has no {kind} left in reserve")));
        }

        if self.tiles.is_empty() && self.reserve(color).is_full()
        {
            self.apply_place(pos, color, kind);
            return Ok(());
        }

        if self.tiles.len() == 1 && self.move_number == 1
        {
            let only = self.tiles[0];
            if pos == only.position || board::occupied(&self.tiles, pos)
            {
                return Err(Error::new(RejectKind::TargetOccupied, format!("{pos} overlaps the opening tile")));
            }
            if !hex::adjacent(pos, only.position)
            {
                return Err(Error::new(RejectKind::NotAdjacentToSoleTile, format!("{pos} does not touch the opening tile")));
            }
            self.apply_place(pos, color, kind);
            return Ok(());
        }

        if !self.queen_placed(color) && self.move_number == 4 && kind != Kind::Queen
        {
            return Err(Error::new(
                RejectKind::MustPlaceQueenByMoveFour,
                format!("{color} must place the queen-bee on move 4"),
            ));
        }

        if board::occupied(&self.tiles, pos)
        {
            return Err(Error::new(RejectKind::TargetOccupied, format!("{pos} is already occupied")));
        }

        let neighbours = board::neighbours_top(&self.tiles, pos);
        let has_friend = neighbours.iter().any(|t| t.color == color);
        let has_enemy = neighbours.iter().any(|t| t.color != color);

        if !has_friend
        {
            return Err(Error::new(RejectKind::NoFriendlyNeighbour, format!("{pos} has no friendly neighbour")));
        }
        if has_enemy
        {
            return Err(Error::new(RejectKind::HasEnemyNeighbour, format!("{pos} touches an enemy tile")));
        }

        self.apply_place(pos, color, kind);
        Ok(())
    }

    /// Attempts to relocate the on-board tile at `from` to `to` for the side
    /// to move. Returns `true` and applies the movement on success; returns
    /// `false` and leaves the state untouched on any rule violation.
    pub fn move_piece(&mut self, from: Hex, to: Hex) -> bool
    {
        match self.try_move(from, to)
        {
            | Ok(()) => true,
            | Err(err) =>
            {
                log::debug!("rejected: {err}");
                false
            }
        }
    }

    fn try_move(&mut self, from: Hex, to: Hex) -> Result<()>
    {
        let color = self.color_to_move;

        let Some(tile) = board::top_of_stack(&self.tiles, from).copied()
        else
        {
            return Err(Error::new(RejectKind::NothingToMove, format!("no tile at {from}")));
        };

        if tile.color != color
        {
            return Err(Error::new(RejectKind::WrongColorToMove, format!("{from} belongs to {}", tile.color)));
        }

        if !self.queen_placed(color)
        {
            return Err(Error::new(
                RejectKind::QueenNotPlaced,
                format!("{color}'s queen-bee is not yet on the board"),
            ));
        }

        if board::is_bridge(&self.tiles, from)
        {
            return Err(Error::new(RejectKind::OneHivePrinciple, format!("{from} is a bridge")));
        }

        let destinations = board::legal_destinations(&self.tiles, &tile);
        if !destinations.contains(&to)
        {
            return Err(Error::new(
                RejectKind::NotALegalDestination,
                format!("{to} is not reachable by this {}", tile.kind),
            ));
        }

        let new_height = self
            .tiles
            .iter()
            .filter(|t| t.position == to)
            .map(|t| t.stack_height)
            .max()
            .map_or(0, |h| h + 1);

        let idx = self.tiles.iter().position(|t| *t == tile).expect("tile vanished mid-move");
        self.tiles[idx].position = to;
        self.tiles[idx].stack_height = new_height;

        log::debug!("{color} moved {} from {from} to {to}", tile.kind);
        self.advance_turn();
        Ok(())
    }

    /// Every hex where the side to move may legally place *some* piece.
    pub fn legal_placements(&self) -> HashSet<Hex>
    {
        self.legal_placement_hexes(self.color_to_move)
    }

    /// The destinations reachable by the on-board tile at `at`, for the side
    /// to move. Empty if `at` is unoccupied, belongs to the other side, the
    /// mover's queen is unplaced, or the tile is pinned by the one-hive rule.
    pub fn legal_movements(&self, at: Hex) -> HashSet<Hex>
    {
        let Some(tile) = board::top_of_stack(&self.tiles, at).copied()
        else
        {
            return HashSet::new();
        };

        if tile.color != self.color_to_move || !self.queen_placed(tile.color) || board::is_bridge(&self.tiles, at)
        {
            return HashSet::new();
        }

        board::legal_destinations(&self.tiles, &tile)
    }

    /// Whether the game is incomplete, drawn, or won by either side.
    pub fn completion_state(&self) -> CompletionState
    {
        if self.stalemated
        {
            return CompletionState::Draw;
        }

        let black_surrounded = self.queen_surrounded(Color::Black);
        let white_surrounded = self.queen_surrounded(Color::White);

        match (black_surrounded, white_surrounded)
        {
            | (true, true) => CompletionState::Draw,
            | (true, false) => CompletionState::WhiteWon,
            | (false, true) => CompletionState::BlackWon,
            | (false, false) => CompletionState::Incomplete,
        }
    }

    fn apply_place(&mut self, pos: Hex, color: Color, kind: Kind)
    {
        self.tiles.push(Tile::new(pos, color, kind, 0));
        self.reserve_mut(color).take(kind);
        log::debug!("{color} placed {kind} at {pos}");
        self.advance_turn();
    }

    fn reserve_mut(&mut self, color: Color) -> &mut Reserve
    {
        match color
        {
            | Color::Black => &mut self.black_reserve,
            | Color::White => &mut self.white_reserve,
        }
    }

    fn queen_placed(&self, color: Color) -> bool
    {
        self.tiles.iter().any(|t| t.color == color && t.kind == Kind::Queen)
    }

    fn queen_surrounded(&self, color: Color) -> bool
    {
        self.tiles
            .iter()
            .filter(|t| t.color == color && t.kind == Kind::Queen)
            .any(|t| hex::neighbours(t.position).iter().all(|n| board::occupied(&self.tiles, *n)))
    }

    /// The hexes where `color` may legally place some piece, independent of
    /// which piece kinds remain in reserve.
    fn legal_placement_hexes(&self, color: Color) -> HashSet<Hex>
    {
        if self.tiles.is_empty()
        {
            return HashSet::from([Hex::ORIGIN]);
        }

        if self.tiles.len() == 1 && self.move_number == 1
        {
            return hex::neighbours(self.tiles[0].position).into_iter().collect();
        }

        let mut result = HashSet::new();
        let own_positions: HashSet<Hex> = self.tiles.iter().filter(|t| t.color == color).map(|t| t.position).collect();

        for &p in &own_positions
        {
            let Some(top) = board::top_of_stack(&self.tiles, p)
            else
            {
                continue;
            };
            if top.position != p || top.color != color
            {
                continue;
            }

            for neighbour in hex::neighbours(p)
            {
                if board::occupied(&self.tiles, neighbour)
                {
                    continue;
                }

                let touches_enemy = hex::neighbours(neighbour)
                    .iter()
                    .filter_map(|n| board::top_of_stack(&self.tiles, *n))
                    .any(|t| t.color != color);

                if !touches_enemy
                {
                    result.insert(neighbour);
                }
            }
        }

        result
    }

    /// Whether `color` has at least one legal placement available, taking its
    /// remaining reserve (and the move-4 queen restriction) into account.
    fn has_legal_placement(&self, color: Color) -> bool
    {
        if self.legal_placement_hexes(color).is_empty()
        {
            return false;
        }

        let reserve = self.reserve(color);
        if !self.queen_placed(color) && self.move_number == 4
        {
            reserve.has(Kind::Queen)
        }
        else
        {
            Kind::all().iter().any(|k| reserve.has(*k))
        }
    }

    /// Whether `color` has at least one on-board tile with a legal move.
    fn has_legal_movement(&self, color: Color) -> bool
    {
        if !self.queen_placed(color)
        {
            return false;
        }

        self.tiles
            .iter()
            .filter(|t| t.color == color)
            .filter(|t| board::top_of_stack(&self.tiles, t.position) == Some(*t))
            .any(|t| !board::is_bridge(&self.tiles, t.position) && !board::legal_destinations(&self.tiles, t).is_empty())
    }

    /// Applies the post-move turn flip, then skips a side with no legal
    /// action at all. If the re-activated side also has no legal action (a
    /// case the rules as given leave unspecified) the game is marked as a
    /// stalemate draw rather than looping forever.
    fn advance_turn(&mut self)
    {
        self.flip_to_move();

        if self.has_legal_movement(self.color_to_move) || self.has_legal_placement(self.color_to_move)
        {
            return;
        }

        log::info!("{} has no legal action; turn is skipped", self.color_to_move);
        self.flip_to_move();

        if !self.has_legal_movement(self.color_to_move) && !self.has_legal_placement(self.color_to_move)
        {
            log::info!("neither side can act; declaring a stalemate draw");
            self.stalemated = true;
        }
    }

    fn flip_to_move(&mut self)
    {
        if self.color_to_move == Color::White
        {
            self.move_number += 1;
        }
        self.color_to_move = self.color_to_move.flip();
    }
}
