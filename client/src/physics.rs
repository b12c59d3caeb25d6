use std::sync::mpsc::{self, Receiver, Sender};

use glam::{Vec2, vec2};
use rapier2d::prelude::*;

use common::{
    constants::{TICK_RATE, TICK_SECS},
    engine::{Collision, Contact, Engine, ObstacleHandle, SimulationConfig},
    error::GameError,
    scene::{Role, Shape},
};

const MAX_STEPS_PER_FRAME: u32 = 5;
const BALL_DAMPING: f32 = 0.6;
const BALL_RESTITUTION: f32 = 0.3;

struct Body {
    handle: RigidBodyHandle,
    role: Role,
    shape: Shape,
}

/// What the renderer needs to draw one obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub role: Role,
    pub shape: Shape,
    pub center: Vec2,
    pub rotation: f32,
}

/// Sends the obstacle indices of every pair that starts touching. Each
/// collider's `user_data` holds the index of its obstacle.
struct CollisionForwarder {
    sender: Sender<(usize, usize)>,
}

impl EventHandler for CollisionForwarder {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if !event.started() {
            return;
        }

        let index = |handle: ColliderHandle| colliders.get(handle).map(|c| c.user_data as usize);
        if let (Some(a), Some(b)) = (index(event.collider1()), index(event.collider2())) {
            // The receiver lives as long as the engine, so a failed send only
            // happens during teardown.
            let _ = self.sender.send((a, b));
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// [`Engine`] backed by rapier2d, stepped at a fixed rate.
pub struct RapierEngine {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    query_pipeline: QueryPipeline,
    events: CollisionForwarder,
    collisions: Receiver<(usize, usize)>,
    obstacles: Vec<Body>,
    accumulator: f32,
}

impl RapierEngine {
    /// Runs as many fixed ticks as `frame_time` covers.
    pub fn advance(&mut self, frame_time: f32) {
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= TICK_SECS && steps < MAX_STEPS_PER_FRAME {
            self.step();
            self.accumulator -= TICK_SECS;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME {
            // Fell too far behind; drop the backlog rather than spiral.
            self.accumulator = 0.0;
        }
    }

    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            Some(&mut self.query_pipeline),
            &(),
            &self.events,
        );
    }

    pub fn obstacles(&self) -> impl Iterator<Item = ObstacleView> + '_ {
        self.obstacles.iter().filter_map(|body| {
            let rigid_body = self.bodies.get(body.handle)?;
            let translation = rigid_body.translation();
            Some(ObstacleView {
                role: body.role,
                shape: body.shape,
                center: vec2(translation.x, translation.y),
                rotation: rigid_body.rotation().angle(),
            })
        })
    }

    fn insert(
        &mut self,
        body: RigidBody,
        collider: ColliderBuilder,
        role: Role,
        shape: Shape,
    ) -> ObstacleHandle {
        let index = self.obstacles.len();
        let handle = self.bodies.insert(body);
        let collider = collider
            .user_data(index as u128)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        self.obstacles.push(Body {
            handle,
            role,
            shape,
        });

        ObstacleHandle(index)
    }

    fn rigid_body_mut(&mut self, handle: ObstacleHandle) -> Option<&mut RigidBody> {
        let handle = self.obstacles.get(handle.0)?.handle;
        self.bodies.get_mut(handle)
    }

    fn contact(&self, index: usize) -> Option<Contact> {
        self.obstacles.get(index).map(|body| Contact {
            handle: ObstacleHandle(index),
            role: body.role,
        })
    }
}

impl Engine for RapierEngine {
    fn create(config: &SimulationConfig) -> Result<Self, GameError> {
        let size = config.world_size;
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(GameError::EngineUnavailable(format!(
                "cannot simulate a {}x{} world",
                size.x, size.y
            )));
        }
        if !config.gravity.is_finite() {
            return Err(GameError::EngineUnavailable(format!(
                "gravity {} is not finite",
                config.gravity
            )));
        }

        let (sender, collisions) = mpsc::channel();
        let mut params = IntegrationParameters::default();
        params.dt = TICK_SECS;

        Ok(Self {
            gravity: vector![config.gravity.x, config.gravity.y],
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            events: CollisionForwarder { sender },
            collisions,
            obstacles: Vec::new(),
            accumulator: 0.0,
        })
    }

    fn add_static_rectangle(&mut self, center: Vec2, size: Vec2, role: Role) -> ObstacleHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x, center.y])
            .build();
        let collider = ColliderBuilder::cuboid(size.x / 2.0, size.y / 2.0);
        self.insert(body, collider, role, Shape::Rectangle { size })
    }

    fn add_circle(&mut self, center: Vec2, radius: f32, role: Role) -> ObstacleHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![center.x, center.y])
            .linear_damping(BALL_DAMPING)
            .ccd_enabled(true)
            .build();
        let collider = ColliderBuilder::ball(radius).restitution(BALL_RESTITUTION);
        self.insert(body, collider, role, Shape::Circle { radius })
    }

    fn velocity(&self, handle: ObstacleHandle) -> Option<Vec2> {
        let body = self.obstacles.get(handle.0)?;
        let velocity = self.bodies.get(body.handle)?.linvel();
        Some(vec2(velocity.x, velocity.y) / TICK_RATE)
    }

    fn set_velocity(&mut self, handle: ObstacleHandle, velocity: Vec2) {
        let per_second = velocity * TICK_RATE;
        if let Some(body) = self.rigid_body_mut(handle) {
            body.set_linvel(vector![per_second.x, per_second.y], true);
        }
    }

    fn set_static(&mut self, handle: ObstacleHandle, is_static: bool) {
        let body_type = if is_static {
            RigidBodyType::Fixed
        } else {
            RigidBodyType::Dynamic
        };
        if let Some(body) = self.rigid_body_mut(handle) {
            body.set_body_type(body_type, true);
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = vector![gravity.x, gravity.y];
        // Sleeping bodies ignore gravity until something touches them.
        for (_, body) in self.bodies.iter_mut() {
            if body.is_dynamic() {
                body.wake_up(true);
            }
        }
    }

    fn poll_collisions(&mut self) -> Vec<Collision> {
        let pairs: Vec<(usize, usize)> = self.collisions.try_iter().collect();
        pairs
            .into_iter()
            .filter_map(|(a, b)| {
                Some(Collision {
                    first: self.contact(a)?,
                    second: self.contact(b)?,
                })
            })
            .collect()
    }
}
