use std::collections::VecDeque;

use glam::Vec2;

use crate::{
    engine::{Collision, Contact, Engine, ObstacleHandle, SimulationConfig},
    error::GameError,
    game::GameUi,
    scene::Role,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MockBody {
    pub role: Role,
    pub center: Vec2,
    pub is_static: bool,
    pub velocity: Vec2,
}

/// Records every command instead of simulating anything.
#[derive(Default)]
pub struct MockEngine {
    pub config: Option<SimulationConfig>,
    pub bodies: Vec<MockBody>,
    pub gravity_changes: Vec<Vec2>,
    pub static_changes: Vec<(ObstacleHandle, bool)>,
    pub velocity_changes: Vec<(ObstacleHandle, Vec2)>,
    /// Collisions handed out by the next `poll_collisions`.
    pub pending: VecDeque<Collision>,
}

impl MockEngine {
    pub fn role(&self, handle: ObstacleHandle) -> Option<Role> {
        self.bodies.get(handle.0).map(|body| body.role)
    }

    pub fn is_static(&self, handle: ObstacleHandle) -> bool {
        self.bodies
            .get(handle.0)
            .map(|body| body.is_static)
            .unwrap_or(false)
    }

    pub fn queue_collision(&mut self, a: ObstacleHandle, b: ObstacleHandle) {
        let contact = |handle: ObstacleHandle| Contact {
            handle,
            role: self.role(handle).expect("collision with unregistered handle"),
        };
        let collision = Collision {
            first: contact(a),
            second: contact(b),
        };
        self.pending.push_back(collision);
    }

    fn add(&mut self, center: Vec2, role: Role, is_static: bool) -> ObstacleHandle {
        self.bodies.push(MockBody {
            role,
            center,
            is_static,
            velocity: Vec2::ZERO,
        });
        ObstacleHandle(self.bodies.len() - 1)
    }
}

impl Engine for MockEngine {
    fn create(config: &SimulationConfig) -> Result<Self, GameError> {
        if !config.gravity.is_finite() {
            return Err(GameError::EngineUnavailable(
                "gravity must be finite".to_string(),
            ));
        }
        Ok(Self {
            config: Some(*config),
            ..Default::default()
        })
    }

    fn add_static_rectangle(&mut self, center: Vec2, _size: Vec2, role: Role) -> ObstacleHandle {
        self.add(center, role, true)
    }

    fn add_circle(&mut self, center: Vec2, _radius: f32, role: Role) -> ObstacleHandle {
        self.add(center, role, false)
    }

    fn velocity(&self, handle: ObstacleHandle) -> Option<Vec2> {
        self.bodies.get(handle.0).map(|body| body.velocity)
    }

    fn set_velocity(&mut self, handle: ObstacleHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle.0) {
            body.velocity = velocity;
            self.velocity_changes.push((handle, velocity));
        }
    }

    fn set_static(&mut self, handle: ObstacleHandle, is_static: bool) {
        if let Some(body) = self.bodies.get_mut(handle.0) {
            body.is_static = is_static;
            self.static_changes.push((handle, is_static));
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity_changes.push(gravity);
    }

    fn poll_collisions(&mut self) -> Vec<Collision> {
        self.pending.drain(..).collect()
    }
}

#[derive(Default)]
pub struct MockUi {
    pub solved_shown: usize,
    pub solved_hidden: usize,
}

impl GameUi for MockUi {
    fn show_solved(&mut self) {
        self.solved_shown += 1;
    }

    fn hide_solved(&mut self) {
        self.solved_hidden += 1;
    }
}
