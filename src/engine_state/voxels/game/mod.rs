//! # Game Module
//!
//! The simulation that drives the fall, lock and clear cycle.
//!
//! ## Piece Lifecycle
//!
//! `Spawned -> Falling -> Locked`. A piece becomes active when it is taken from
//! the queue, falls one layer per [`Game::tick`], and locks exactly once when a
//! one-layer drop would collide. Locking bakes its cells into the grid; the piece is
//! then handed back to the caller and never referenced again.
//!
//! ## Collision Policy
//!
//! [`Game::would_collide`] is the single collision predicate. Translation is
//! checked first and rejected on conflict. Rotation is applied, clamped into the
//! grid, and rolled back if it still overlaps the stack.

use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

use cgmath::Vector3;
use log::{debug, info, warn};

use crate::engine_state::voxels::{
    cell::{Cell, Vector3D},
    grid::VoxelGrid,
    piece::{factory::PieceFactory, template::PieceCatalog, Piece},
};
use crate::error::{Error, Result};

pub mod command;
pub mod scoring;

use command::Command;
use scoring::ScoreState;

fn no_offset() -> Vector3D {
    Vector3::new(0, 0, 0)
}

fn down() -> Vector3D {
    Vector3::new(0, -1, 0)
}

/// Where the game is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Built but not started.
    Ready,
    Playing,
    Paused,
    /// The stack overflowed the grid or a new piece could not spawn.
    Over,
}

/// What happened during one [`Game::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The active piece locked and a new one took its place.
    pub locked: bool,
    /// Layers removed this tick.
    pub cleared: u32,
    /// Points awarded this tick.
    pub awarded: u64,
    /// Some locked cells fell outside the grid and were dropped.
    pub overflowed: bool,
}

/// Owns the grid, the active piece, the queue and the score.
#[derive(Debug)]
pub struct Game {
    grid: VoxelGrid,
    active: Piece,
    queue: VecDeque<Piece>,
    factory: PieceFactory,
    score: ScoreState,
    status: GameStatus,
}

impl Game {
    /// Builds a game with an empty grid.
    ///
    /// # Arguments
    /// * `size` - Grid width, height and depth
    /// * `spawn_location` - Where each new piece's pivot appears
    /// * `queue_length` - Number of upcoming pieces kept ready (at least 1)
    /// * `catalog` - Shapes to sample from
    /// * `rng` - Random source for piece selection
    pub fn new(
        size: Vector3D,
        spawn_location: Vector3D,
        queue_length: usize,
        catalog: Arc<PieceCatalog>,
        rng: fastrand::Rng,
    ) -> Result<Self> {
        if queue_length == 0 {
            return Err(Error::InvalidQueueLength);
        }

        let grid = VoxelGrid::new(size)?;
        let mut factory = PieceFactory::new(catalog, rng, spawn_location);
        let active = factory.next_piece();
        let queue = (0..queue_length).map(|_| factory.next_piece()).collect();

        Ok(Game {
            grid,
            active,
            queue,
            factory,
            score: ScoreState::default(),
            status: GameStatus::Ready,
        })
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    pub fn active_piece(&self) -> &Piece {
        &self.active
    }

    /// Replaces the active piece, returning the previous one.
    pub fn set_active_piece(&mut self, piece: Piece) -> Piece {
        mem::replace(&mut self.active, piece)
    }

    /// Upcoming pieces, next first.
    pub fn queue(&self) -> impl Iterator<Item = &Piece> {
        self.queue.iter()
    }

    pub fn score(&self) -> u64 {
        self.score.score()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    pub fn line_num(&self) -> u32 {
        self.score.line_num()
    }

    pub fn total_lines_cleared(&self) -> u32 {
        self.score.total_lines_cleared()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Starts or resumes the game. A finished game stays over.
    pub fn play(&mut self) {
        if matches!(self.status, GameStatus::Ready | GameStatus::Paused) {
            info!("Game started");
            self.status = GameStatus::Playing;
        }
    }

    /// Toggles between playing and paused.
    pub fn pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            other => other,
        };
    }

    /// The cell at `location`, or `None` outside the grid.
    pub fn get_cell(&self, location: Vector3D) -> Option<&Cell> {
        self.grid.get_cell(location)
    }

    /// Whether moving the active piece by `offset` would hit the floor or the stack.
    pub fn would_collide(&self, offset: Vector3D) -> bool {
        if self.active.bottom() + offset.y < 0 {
            return true;
        }

        self.active
            .world_cells()
            .any(|cell| self.grid.is_occupied(cell + offset))
    }

    /// Whether the active piece's box stays inside the grid on x and z after moving.
    pub fn is_within_horizontal_bounds(&self, dx: i32, dz: i32) -> bool {
        let lower = self.active.location + self.active.lower_bound();
        let upper = self.active.location + self.active.upper_bound();
        let size = self.grid.size();

        lower.x + dx >= 0 && upper.x + dx < size.x && lower.z + dz >= 0 && upper.z + dz < size.z
    }

    /// Moves the active piece horizontally if the move is legal.
    ///
    /// Illegal moves are silently rejected; returns whether the piece moved.
    pub fn translate_active_piece(&mut self, dx: i32, dz: i32) -> bool {
        if self.would_collide(Vector3::new(dx, 0, dz)) || !self.is_within_horizontal_bounds(dx, dz)
        {
            return false;
        }

        self.active.translate(dx, dz);
        true
    }

    /// Rotates the active piece, keeping its box inside the grid.
    ///
    /// If the rotated piece overlaps the stack the rotation is undone and the
    /// previous location restored. Returns whether the rotation was kept.
    pub fn rotate_active_piece(&mut self, angle: Vector3D) -> bool {
        let previous_location = self.active.location;

        self.active.rotate(angle);
        self.clamp_active_piece();

        if self.would_collide(no_offset()) {
            // Exact only for right-angle rotations about a single axis.
            self.active.rotate(-angle);
            self.active.location = previous_location;
            debug!("Rotation {:?} of {} rolled back", angle, self.active.name);
            return false;
        }

        true
    }

    fn clamp_active_piece(&mut self) {
        let size = self.grid.size();
        let lower = self.active.lower_bound();
        let upper = self.active.upper_bound();
        let location = &mut self.active.location;

        // When the box is larger than the grid the lower limit wins.
        location.x = location.x.min(size.x - upper.x - 1).max(-lower.x);
        location.y = location.y.min(size.y - upper.y - 1).max(-lower.y);
        location.z = location.z.min(size.z - upper.z - 1).max(-lower.z);
    }

    /// Feeds one player command into the game. Ignored unless playing.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        match command {
            Command::Translate { dx, dz } => self.translate_active_piece(dx, dz),
            Command::Rotate { axis, sign } => {
                self.rotate_active_piece(Command::rotation_angle(axis, sign))
            }
        }
    }

    /// One gravity step: lock or fall, then clear full layers and score them.
    ///
    /// Does nothing unless the game is playing.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.status != GameStatus::Playing {
            return report;
        }

        if self.would_collide(down()) {
            report.locked = true;
            report.overflowed = self.lock_active_piece();
            self.place_and_advance();
        } else {
            self.active.tick();
        }

        let level_before = self.score.level();
        report.cleared = self.grid.clear_full_layers();
        report.awarded = self.score.record_clear(report.cleared);

        if report.cleared > 0 {
            info!(
                "Cleared {} layer(s) for {} points, score {}",
                report.cleared,
                report.awarded,
                self.score.score()
            );
        }
        if self.score.level() > level_before {
            info!("Reached level {}", self.score.level());
        }

        if report.overflowed {
            warn!("Stack overflowed the grid, game over");
            self.status = GameStatus::Over;
        } else if report.locked && self.would_collide(no_offset()) {
            warn!("No room to spawn {}, game over", self.active.name);
            self.status = GameStatus::Over;
        }

        report
    }

    /// Writes the active piece into the grid. Returns `true` if any cell fell outside.
    fn lock_active_piece(&mut self) -> bool {
        let color = Some(self.active.color());
        let mut overflowed = false;

        for cell in self.active.world_cells() {
            if !self.grid.fill(cell, color) {
                debug!("Skipped locking out-of-grid cell {:?}", cell);
                overflowed = true;
            }
        }

        debug!("Locked {} at {:?}", self.active.name, self.active.location);
        overflowed
    }

    /// Promotes the next queued piece, refills the queue, and returns the retired piece.
    pub fn place_and_advance(&mut self) -> Piece {
        let next = self
            .queue
            .pop_front()
            .unwrap_or_else(|| self.factory.next_piece());
        self.queue.push_back(self.factory.next_piece());
        mem::replace(&mut self.active, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::cell::Color;

    fn single_cell_catalog() -> Arc<PieceCatalog> {
        Arc::new(
            PieceCatalog::from_json(
                r#"[{ "name": "dot", "dimensions": [[[1]]], "center": [0, 0, 0], "colorHex": "ffffff" }]"#,
            )
            .unwrap(),
        )
    }

    fn game(size: Vector3D) -> Game {
        let spawn = Vector3::new(size.x / 2, size.y - 1, size.z / 2);
        let mut game =
            Game::new(size, spawn, 2, single_cell_catalog(), fastrand::Rng::with_seed(3)).unwrap();
        game.play();
        game
    }

    fn dot_at(location: Vector3D) -> Piece {
        Piece::new(
            "dot",
            vec![Vector3::new(0, 0, 0)],
            Vector3::new(0, 0, 0),
            location,
            Color(0x00FF00),
        )
        .unwrap()
    }

    #[test]
    fn zero_queue_length_is_rejected() {
        let result = Game::new(
            Vector3::new(3, 3, 3),
            Vector3::new(1, 2, 1),
            0,
            single_cell_catalog(),
            fastrand::Rng::with_seed(0),
        );
        assert!(matches!(result, Err(Error::InvalidQueueLength)));
    }

    #[test]
    fn floor_blocks_the_drop() {
        let mut game = game(Vector3::new(3, 5, 3));
        game.set_active_piece(dot_at(Vector3::new(1, 0, 1)));
        assert!(game.would_collide(down()));

        game.set_active_piece(dot_at(Vector3::new(1, 1, 1)));
        assert!(!game.would_collide(down()));
    }

    #[test]
    fn stack_blocks_the_drop() {
        let mut game = game(Vector3::new(3, 5, 3));
        game.grid_mut().fill(Vector3::new(1, 1, 1), None);
        game.set_active_piece(dot_at(Vector3::new(1, 2, 1)));
        assert!(game.would_collide(down()));
    }

    #[test]
    fn lock_copies_color_and_advances_queue() {
        let mut game = game(Vector3::new(3, 5, 3));
        let next_name = game.queue().next().unwrap().name.clone();
        game.set_active_piece(dot_at(Vector3::new(2, 0, 0)));

        let report = game.tick();

        assert!(report.locked);
        assert!(!report.overflowed);
        let cell = game.get_cell(Vector3::new(2, 0, 0)).unwrap();
        assert!(cell.occupied);
        assert_eq!(cell.color, Some(Color(0x00FF00)));
        assert_eq!(game.active_piece().name, next_name);
        assert_eq!(game.queue().count(), 2);
    }

    #[test]
    fn falls_one_layer_per_tick() {
        let mut game = game(Vector3::new(3, 5, 3));
        game.set_active_piece(dot_at(Vector3::new(1, 3, 1)));
        let report = game.tick();
        assert!(!report.locked);
        assert_eq!(game.active_piece().location, Vector3::new(1, 2, 1));
    }

    #[test]
    fn ticks_are_ignored_unless_playing() {
        let mut game = game(Vector3::new(3, 5, 3));
        game.pause();
        let before = game.active_piece().location;
        assert_eq!(game.tick(), TickReport::default());
        assert_eq!(game.active_piece().location, before);
        assert!(!game.apply(Command::Translate { dx: 1, dz: 0 }));
        game.pause();
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn overflowing_lock_ends_the_game() {
        let mut game = game(Vector3::new(2, 2, 2));
        game.grid_mut().fill(Vector3::new(0, 1, 0), None);
        game.set_active_piece(dot_at(Vector3::new(0, 2, 0)));

        let report = game.tick();

        assert!(report.overflowed);
        assert_eq!(game.status(), GameStatus::Over);
        game.play();
        assert_eq!(game.status(), GameStatus::Over);
    }

    #[test]
    fn rotation_is_clamped_into_the_grid() {
        let mut game = game(Vector3::new(4, 6, 4));
        let bar = Piece::new(
            "bar",
            vec![
                Vector3::new(0, 0, 0),
                Vector3::new(1, 0, 0),
                Vector3::new(2, 0, 0),
            ],
            Vector3::new(0, 0, 0),
            Vector3::new(0, 2, 0),
            Color(1),
        )
        .unwrap();
        game.set_active_piece(bar);

        // A quarter turn about y swings the bar onto negative z.
        assert!(game.rotate_active_piece(Vector3::new(0, 90, 0)));

        let piece = game.active_piece();
        for cell in piece.world_cells() {
            assert!(game.grid().contains(cell), "{:?}", cell);
        }
    }
}
