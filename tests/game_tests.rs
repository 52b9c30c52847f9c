//! End-to-end game tests against an in-memory grid

use crossterm::event::{KeyCode, KeyEvent};

use tui_dodge::core::{Game, GameConfig, MoveOutcome, Obstacle};
use tui_dodge::input::handle_key_event;
use tui_dodge::term::GlyphGrid;
use tui_dodge::types::{Bounds, Position, OBSTACLE_GLYPH, PLAYER_GLYPH};

fn key(c: char) -> Option<tui_dodge::types::PlayerAction> {
    handle_key_event(KeyEvent::from(KeyCode::Char(c)))
}

#[test]
fn test_setup_draws_board() {
    let config = GameConfig {
        seed: Some(77),
        ..GameConfig::default()
    };
    let bounds = Bounds::new(60, 20);
    let mut game = Game::new(&config, bounds);
    let mut grid = GlyphGrid::for_bounds(bounds);

    game.setup(&mut grid).unwrap();

    assert_eq!(grid.get(0, 0), Some(PLAYER_GLYPH));
    // Obstacles may share a cell, so at most one glyph per obstacle.
    let drawn = grid.count(OBSTACLE_GLYPH);
    assert!(drawn >= 1 && drawn <= game.obstacles().len());
    for o in game.obstacles() {
        assert_eq!(grid.get(o.x(), o.y()), Some(OBSTACLE_GLYPH));
    }
}

#[test]
fn test_keys_move_and_redraw_player() {
    let bounds = Bounds::new(30, 15);
    let mut game = Game::from_parts(vec![Obstacle::at(20, 10)], 2, 3, bounds);
    let mut grid = GlyphGrid::for_bounds(bounds);
    game.setup(&mut grid).unwrap();

    for c in ['d', 'd', 's'] {
        let outcome = game.handle(key(c), &mut grid).unwrap();
        assert_eq!(outcome, Some(MoveOutcome::Moved));
    }

    assert_eq!(game.player().position(), Position::new(6, 3));
    assert_eq!(grid.find(PLAYER_GLYPH), Some(Position::new(6, 3)));
    assert_eq!(grid.count(PLAYER_GLYPH), 1);
    // The old cell is blanked across the glyph's full display width.
    assert_eq!(grid.get(0, 0), Some("  "));
    assert_eq!(grid.get(3, 0), Some("  "));
}

#[test]
fn test_unknown_key_is_a_no_op() {
    let bounds = Bounds::new(30, 15);
    let mut game = Game::from_parts(Vec::new(), 2, 3, bounds);
    let mut grid = GlyphGrid::for_bounds(bounds);
    game.setup(&mut grid).unwrap();
    let writes = grid.writes();

    for c in ['q', 'x', ' ', '1'] {
        assert_eq!(game.handle(key(c), &mut grid).unwrap(), None);
    }
    assert_eq!(game.handle(handle_key_event(KeyEvent::from(KeyCode::Up)), &mut grid).unwrap(), None);

    assert_eq!(grid.writes(), writes);
    assert_eq!(game.player().position(), Position::ORIGIN);
}

#[test]
fn test_blocked_move_keeps_glyph_in_place() {
    let bounds = Bounds::new(30, 15);
    let mut game = Game::from_parts(vec![Obstacle::new(4, 0, "#")], 2, 3, bounds);
    let mut grid = GlyphGrid::for_bounds(bounds);
    game.setup(&mut grid).unwrap();

    let outcome = game.handle(key('d'), &mut grid).unwrap();

    assert_eq!(outcome, Some(MoveOutcome::Blocked));
    assert_eq!(grid.get(0, 0), Some(PLAYER_GLYPH));
    assert_eq!(grid.get(4, 0), Some("#"));
}

#[test]
fn test_left_and_up_at_origin_are_rejected() {
    let bounds = Bounds::new(10, 10);
    let mut game = Game::from_parts(Vec::new(), 2, 3, bounds);
    let mut grid = GlyphGrid::for_bounds(bounds);

    assert_eq!(game.handle(key('a'), &mut grid).unwrap(), Some(MoveOutcome::OutOfBounds));
    assert_eq!(game.handle(key('w'), &mut grid).unwrap(), Some(MoveOutcome::OutOfBounds));
    assert_eq!(game.player().position(), Position::ORIGIN);
}

#[test]
fn test_same_seed_same_board() {
    let config = GameConfig {
        seed: Some(4242),
        ..GameConfig::default()
    };
    let a = Game::new(&config, Bounds::new(80, 24));
    let b = Game::new(&config, Bounds::new(80, 24));
    assert_eq!(a.obstacles(), b.obstacles());
}
