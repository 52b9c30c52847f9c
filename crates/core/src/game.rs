//! Game: the obstacle field, the shared detector and the player.
//!
//! This is the headless body of the game loop. The binary feeds it one
//! key at a time; tests feed it actions and an in-memory canvas.

use std::io;
use std::rc::Rc;

use crate::canvas::Canvas;
use crate::collision::CollisionDetector;
use crate::config::GameConfig;
use crate::obstacle::{Obstacle, ObstacleGenerator};
use crate::player::{MoveOutcome, Player};
use crate::rng::clock_seed;
use crate::types::{Bounds, PlayerAction, Position};

/// Re-roll attempts for an obstacle that covers the spawn cell.
const SPAWN_REROLL_LIMIT: u32 = 64;

#[derive(Debug)]
pub struct Game {
    collision: Rc<CollisionDetector>,
    player: Player,
    seed: Option<u32>,
}

impl Game {
    /// Scatter obstacles over `bounds` and spawn the player at the origin.
    ///
    /// Obstacles whose zone would cover the spawn cell are re-rolled so the
    /// player never starts inside a zone; one that keeps landing there
    /// (only possible on tiny grids) is dropped.
    pub fn new(config: &GameConfig, bounds: Bounds) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut generator = ObstacleGenerator::new(bounds, seed);
        let spawn_check = CollisionDetector::new(Vec::new()).with_sensitivity(config.sensitivity);
        let spawn = Position::ORIGIN;

        let obstacles = generator
            .generate(config.obstacle_count)
            .into_iter()
            .filter_map(|mut obstacle| {
                let mut attempts = 0;
                while spawn_check.covers(&obstacle, spawn.x, spawn.y) {
                    if attempts == SPAWN_REROLL_LIMIT {
                        return None;
                    }
                    obstacle = generator.generate_one();
                    attempts += 1;
                }
                Some(obstacle)
            })
            .collect();

        let mut game = Self::from_parts(obstacles, config.sensitivity, config.speed, bounds);
        game.seed = Some(seed);
        game.player.set_glyph(config.player_glyph.clone());
        game
    }

    /// Build a game around a known obstacle set.
    pub fn from_parts(obstacles: Vec<Obstacle>, sensitivity: i32, speed: i32, bounds: Bounds) -> Self {
        let mut detector = CollisionDetector::new(obstacles);
        detector.set_sensitivity(sensitivity);
        let collision = Rc::new(detector);

        let mut player = Player::new(Rc::clone(&collision), bounds);
        player.set_speed(speed);

        Self {
            collision,
            player,
            seed: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.collision.obstacles()
    }

    pub fn collision(&self) -> &CollisionDetector {
        &self.collision
    }

    /// Seed the obstacle layout was generated from; `None` for a board
    /// built with [`Game::from_parts`].
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Draw the obstacles and the player for the first time.
    pub fn setup<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> io::Result<()> {
        ObstacleGenerator::place(canvas, self.collision.obstacles())?;
        self.player.refresh_position(canvas)?;
        self.player.display(canvas)
    }

    /// Apply one key's worth of input.
    ///
    /// `None` (an unmapped key) changes nothing and draws nothing. A mapped
    /// action always redraws the player, even when the move was rejected.
    pub fn handle<C: Canvas + ?Sized>(
        &mut self,
        action: Option<PlayerAction>,
        canvas: &mut C,
    ) -> io::Result<Option<MoveOutcome>> {
        let Some(action) = action else {
            return Ok(None);
        };

        let outcome = self.player.apply(action);
        self.player.refresh_position(canvas)?;
        self.player.display(canvas)?;
        Ok(Some(outcome))
    }
}
