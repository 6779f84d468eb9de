mod common;

use hive_core::prelude::*;

use common::setup::setup;

#[test]
fn legal_movements_is_empty_for_an_unoccupied_hex()
{
    setup();
    let game = Game::init();
    assert!(game.legal_movements(Hex::new(3, 3)).is_empty());
}

#[test]
fn legal_movements_is_empty_for_the_opponents_tile()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen)); // Black
    assert!(game.place(1, 0, Kind::Queen)); // White

    // Black is to move; Black may not query a movement set as if White's tile could act.
    assert!(game.legal_movements(Hex::new(1, 0)).is_empty());
}

#[test]
fn movement_is_rejected_until_the_movers_queen_is_placed()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Ant)); // Black, queen not yet placed
    assert!(game.place(1, 0, Kind::Queen)); // White

    assert!(!game.move_piece(Hex::new(0, 0), Hex::new(-1, 0)));
}

#[test]
fn querying_a_stacked_hex_reflects_the_top_piece_not_the_one_it_covers()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen)); // Black
    assert!(game.place(1, 0, Kind::Queen)); // White
    assert!(game.place(0, -1, Kind::Beetle)); // Black

    assert!(game.move_piece(Hex::new(1, 0), Hex::new(1, -1))); // White queen steps aside
    assert!(game.move_piece(Hex::new(0, -1), Hex::new(0, 0))); // Black beetle buries its own queen

    // It is now White's turn; the beetle sits on top at (0, 0) but belongs to Black.
    assert_eq!(game.color_to_move(), Color::White);
    assert!(game.legal_movements(Hex::new(0, 0)).is_empty());
}

#[test]
fn beetle_climbing_onto_a_neighbour_forms_a_two_high_stack()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen)); // Black
    assert!(game.place(1, 0, Kind::Queen)); // White
    assert!(game.place(0, -1, Kind::Beetle)); // Black

    assert!(game.move_piece(Hex::new(1, 0), Hex::new(1, -1))); // White queen steps aside, opens a gap
    assert!(game.move_piece(Hex::new(0, -1), Hex::new(0, 0))); // Black beetle climbs its own queen

    let stack: Vec<u8> = game.tiles().iter().filter(|t| t.position == Hex::new(0, 0)).map(|t| t.stack_height).collect();
    assert_eq!(stack.len(), 2);
    assert!(stack.contains(&0));
    assert!(stack.contains(&1));
}

#[test]
fn snapshot_and_restore_reproduces_every_observable()
{
    setup();
    let mut game = Game::init();
    assert!(game.place(0, 0, Kind::Queen));
    assert!(game.place(1, 0, Kind::Queen));
    assert!(game.place(0, -1, Kind::Ant));

    let snapshot = game.clone();
    assert!(game.place(2, -1, Kind::Ant));

    assert_ne!(game.completion_state(), CompletionState::Draw); // sanity: still a live comparison
    assert_ne!(snapshot.legal_placements(), game.legal_placements());

    let restored = snapshot.clone();
    assert_eq!(restored.completion_state(), snapshot.completion_state());
    assert_eq!(restored.legal_placements(), snapshot.legal_placements());
    for tile in snapshot.tiles()
    {
        assert_eq!(restored.legal_movements(tile.position), snapshot.legal_movements(tile.position));
    }
}
