use glam::Vec2;

use crate::{
    engine::{Collision, Engine, ObstacleHandle},
    scene::Role,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
}

/// Where the player is told the maze is solved.
pub trait GameUi {
    fn show_solved(&mut self);
    fn hide_solved(&mut self);
}

/// Sole owner of the [`GameState`]. Watches for the ball reaching the goal,
/// then collapses the maze: gravity switches on and every wall comes loose.
#[derive(Debug)]
pub struct WinCondition {
    state: GameState,
    walls: Vec<ObstacleHandle>,
    collapse_gravity: Vec2,
}

impl WinCondition {
    pub fn new(walls: Vec<ObstacleHandle>, collapse_gravity: Vec2) -> Self {
        Self {
            state: GameState::Playing,
            walls,
            collapse_gravity,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns `true` only for the collision that wins the game. Collisions
    /// between anything other than the ball and the goal, and every collision
    /// after the win, change nothing.
    pub fn handle_collision<E: Engine + ?Sized>(
        &mut self,
        collision: &Collision,
        engine: &mut E,
        ui: &mut dyn GameUi,
    ) -> bool {
        if self.state == GameState::Won || !collision.involves(Role::Ball, Role::Goal) {
            return false;
        }

        self.state = GameState::Won;
        ui.show_solved();
        engine.set_gravity(self.collapse_gravity);
        for &wall in &self.walls {
            engine.set_static(wall, false);
        }

        true
    }
}
