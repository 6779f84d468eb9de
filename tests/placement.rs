mod common;

use std::collections::HashSet;

use hive_core::prelude::*;

use common::setup::setup;

#[test]
fn first_black_placement_is_unconditional_and_at_the_origin()
{
    setup();
    let game = Game::init();
    assert_eq!(game.legal_placements(), HashSet::from([Hex::ORIGIN]));
}

#[test]
fn first_white_placement_is_any_neighbour_of_black_sole_tile()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(2, -3, Kind::Queen));

    let expected: HashSet<Hex> = hex::neighbours(Hex::new(2, -3)).into_iter().collect();
    assert_eq!(game.legal_placements(), expected);
}

#[test]
fn first_white_placement_cannot_overlap_or_sit_on_the_black_tile()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen));

    assert!(!game.place(0, 0, Kind::Ant));
    assert!(!game.place(5, 5, Kind::Ant));
}

#[test]
fn general_placement_requires_a_friendly_neighbour_and_rejects_an_enemy_one()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen)); // Black
    assert!(game.place(1, 0, Kind::Queen)); // White, adjacent to Black

    // Black's next placement must touch a Black tile; (1,0)'s other neighbours all touch White.
    assert!(!game.place(2, 0, Kind::Ant));

    // A hex only reachable via Black's own queen is fine.
    assert!(game.place(0, -1, Kind::Ant));
}

#[test]
fn placement_is_rejected_when_the_reserve_is_empty()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen)); // Black's only queen is spent.
    assert!(game.place(1, 0, Kind::Queen)); // White's only queen is spent.

    assert!(!game.place(0, -1, Kind::Queen));
    assert_eq!(game.reserve(Color::Black).count(Kind::Queen), 0);
}

#[test]
fn rejected_placement_leaves_the_state_unchanged()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen));

    let before = game.clone();
    assert!(!game.place(0, 0, Kind::Ant));
    assert_eq!(game, before);
}

#[test]
fn reserve_and_onboard_counts_stay_conserved()
{
    setup();
    let mut game = Game::init();
    for (q, r) in [(0, 0), (-1, 0), (1, 0), (-2, 0)]
    {
        assert!(game.place(q, r, Kind::Grasshopper));
    }

    for color in [Color::Black, Color::White]
    {
        for kind in Kind::all()
        {
            let onboard = game.tiles().iter().filter(|t| t.color == color && t.kind == kind).count() as u8;
            assert_eq!(game.reserve(color).count(kind) + onboard, kind.initial_count());
        }
    }
}

#[test]
fn init_is_deterministic()
{
    assert_eq!(Game::init(), Game::init());
}
