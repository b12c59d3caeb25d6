use glam::{Vec2, vec2};

use crate::{
    constants::SPEED_INCREMENT,
    engine::{Engine, ObstacleHandle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Up,
    Right,
    Down,
    Left,
}

impl Steer {
    /// Screen y grows downward, so `Up` is negative.
    pub fn velocity_delta(self) -> Vec2 {
        match self {
            Steer::Up => vec2(0.0, -SPEED_INCREMENT),
            Steer::Right => vec2(SPEED_INCREMENT, 0.0),
            Steer::Down => vec2(0.0, SPEED_INCREMENT),
            Steer::Left => vec2(-SPEED_INCREMENT, 0.0),
        }
    }
}

/// Adds one press worth of velocity to the ball. There is no speed cap.
pub fn steer<E: Engine + ?Sized>(engine: &mut E, ball: ObstacleHandle, steer: Steer) {
    if let Some(velocity) = engine.velocity(ball) {
        engine.set_velocity(ball, velocity + steer.velocity_delta());
    }
}
