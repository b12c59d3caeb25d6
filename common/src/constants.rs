use glam::Vec2;

// Grid:
pub const DEFAULT_ROWS: usize = 24;
pub const DEFAULT_COLUMNS: usize = 32;

// Scene geometry, in world units:
pub const BOUNDARY_THICKNESS: f32 = 2.0;
pub const WALL_THICKNESS: f32 = 5.0;
pub const GOAL_SCALE: f32 = 0.7; // Fraction of a cell.
pub const BALL_RADIUS_FRACTION: f32 = 0.25; // Of the shorter side of a cell.

// Simulation:
pub const TICK_RATE: f32 = 60.0;
pub const TICK_SECS: f32 = 1.0 / 60.0;
pub const SPEED_INCREMENT: f32 = 3.0; // World units per tick, added per key press.
pub const COLLAPSE_GRAVITY: Vec2 = Vec2::new(0.0, 1000.0); // World units per second squared, pointing down the screen.
