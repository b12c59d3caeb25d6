use glam::Vec2;

use crate::{error::GameError, scene::Role};

/// Index of a shape registered with an [`Engine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleHandle(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub world_size: Vec2,
    pub gravity: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub handle: ObstacleHandle,
    pub role: Role,
}

/// Two tracked obstacles that started touching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
    pub first: Contact,
    pub second: Contact,
}

impl Collision {
    /// True when the pair is `a` and `b`, in either order.
    pub fn involves(&self, a: Role, b: Role) -> bool {
        (self.first.role == a && self.second.role == b)
            || (self.first.role == b && self.second.role == a)
    }
}

/// The physics and rendering backend.
///
/// Velocities are in world units per simulation tick; gravity is in world
/// units per second squared. Commands addressed to an unknown handle are
/// ignored.
pub trait Engine {
    fn create(config: &SimulationConfig) -> Result<Self, GameError>
    where
        Self: Sized;

    fn add_static_rectangle(&mut self, center: Vec2, size: Vec2, role: Role) -> ObstacleHandle;
    fn add_circle(&mut self, center: Vec2, radius: f32, role: Role) -> ObstacleHandle;

    fn velocity(&self, handle: ObstacleHandle) -> Option<Vec2>;
    fn set_velocity(&mut self, handle: ObstacleHandle, velocity: Vec2);
    fn set_static(&mut self, handle: ObstacleHandle, is_static: bool);
    fn set_gravity(&mut self, gravity: Vec2);

    /// Drains the collisions reported since the last call.
    fn poll_collisions(&mut self) -> Vec<Collision>;
}
