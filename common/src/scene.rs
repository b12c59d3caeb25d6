use glam::{Vec2, vec2};

use crate::{
    constants::{BALL_RADIUS_FRACTION, BOUNDARY_THICKNESS, GOAL_SCALE, WALL_THICKNESS},
    engine::{Engine, ObstacleHandle},
    error::GameError,
    maze::Maze,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Wall,
    Goal,
    Ball,
    Boundary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rectangle { size: Vec2 },
    Circle { radius: f32 },
}

/// A shape in world coordinates: x to the right, y down, origin at the
/// top-left corner of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub role: Role,
    pub center: Vec2,
    pub shape: Shape,
}

impl Obstacle {
    fn rectangle(role: Role, center: Vec2, size: Vec2) -> Self {
        Self {
            role,
            center,
            shape: Shape::Rectangle { size },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub viewport: Vec2,
    pub unit: Vec2,
}

impl Layout {
    pub fn new(rows: usize, columns: usize, viewport: Vec2) -> Self {
        Self {
            viewport,
            unit: vec2(viewport.x / columns as f32, viewport.y / rows as f32),
        }
    }
}

pub fn materialize(maze: &Maze, layout: &Layout) -> Vec<Obstacle> {
    let Vec2 {
        x: width,
        y: height,
    } = layout.viewport;
    let Vec2 { x: ux, y: uy } = layout.unit;
    let mut obstacles = Vec::new();

    obstacles.extend([
        Obstacle::rectangle(
            Role::Boundary,
            vec2(width / 2.0, 0.0),
            vec2(width, BOUNDARY_THICKNESS),
        ),
        Obstacle::rectangle(
            Role::Boundary,
            vec2(width / 2.0, height),
            vec2(width, BOUNDARY_THICKNESS),
        ),
        Obstacle::rectangle(
            Role::Boundary,
            vec2(0.0, height / 2.0),
            vec2(BOUNDARY_THICKNESS, height),
        ),
        Obstacle::rectangle(
            Role::Boundary,
            vec2(width, height / 2.0),
            vec2(BOUNDARY_THICKNESS, height),
        ),
    ]);

    // Closed edges only; an open edge is a gap the ball can pass through.
    for (row, column, open) in maze.walls.horizontals.iter() {
        if open {
            continue;
        }
        obstacles.push(Obstacle::rectangle(
            Role::Wall,
            vec2(column as f32 * ux + ux / 2.0, row as f32 * uy + uy),
            vec2(ux, WALL_THICKNESS),
        ));
    }

    for (row, column, open) in maze.walls.verticals.iter() {
        if open {
            continue;
        }
        obstacles.push(Obstacle::rectangle(
            Role::Wall,
            vec2(column as f32 * ux + ux, row as f32 * uy + uy / 2.0),
            vec2(WALL_THICKNESS, uy),
        ));
    }

    obstacles.push(Obstacle::rectangle(
        Role::Goal,
        vec2(width - ux / 2.0, height - uy / 2.0),
        vec2(ux * GOAL_SCALE, uy * GOAL_SCALE),
    ));

    obstacles.push(Obstacle {
        role: Role::Ball,
        center: vec2(ux / 2.0, uy / 2.0),
        shape: Shape::Circle {
            radius: ux.min(uy) * BALL_RADIUS_FRACTION,
        },
    });

    obstacles
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneHandles {
    pub ball: ObstacleHandle,
    pub goal: ObstacleHandle,
    pub walls: Vec<ObstacleHandle>,
    pub boundaries: Vec<ObstacleHandle>,
}

/// Hands every obstacle to the engine. Only the ball is simulated; everything
/// else starts out static. A scene without a ball or a goal cannot be played.
pub fn register<E: Engine + ?Sized>(
    obstacles: &[Obstacle],
    engine: &mut E,
) -> Result<SceneHandles, GameError> {
    if !obstacles.iter().any(|o| o.role == Role::Ball) {
        return Err(GameError::MissingObstacle(Role::Ball));
    }
    if !obstacles.iter().any(|o| o.role == Role::Goal) {
        return Err(GameError::MissingObstacle(Role::Goal));
    }

    let mut ball = None;
    let mut goal = None;
    let mut walls = Vec::new();
    let mut boundaries = Vec::new();

    for obstacle in obstacles {
        let handle = match obstacle.shape {
            Shape::Rectangle { size } => {
                engine.add_static_rectangle(obstacle.center, size, obstacle.role)
            }
            Shape::Circle { radius } => engine.add_circle(obstacle.center, radius, obstacle.role),
        };

        match obstacle.role {
            Role::Ball => ball = Some(handle),
            Role::Goal => goal = Some(handle),
            Role::Wall => walls.push(handle),
            Role::Boundary => boundaries.push(handle),
        }
    }

    Ok(SceneHandles {
        ball: ball.ok_or(GameError::MissingObstacle(Role::Ball))?,
        goal: goal.ok_or(GameError::MissingObstacle(Role::Goal))?,
        walls,
        boundaries,
    })
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_helpers::MockEngine;

    fn count(obstacles: &[Obstacle], role: Role) -> usize {
        obstacles.iter().filter(|o| o.role == role).count()
    }

    #[test]
    fn test_one_wall_per_closed_edge() {
        let mut rng = StdRng::seed_from_u64(10);
        let maze = Maze::generate(24, 32, &mut rng).expect("should generate");
        let layout = Layout::new(24, 32, vec2(1280.0, 720.0));
        let obstacles = materialize(&maze, &layout);

        let edges = 24 * 31 + 23 * 32;
        assert_eq!(count(&obstacles, Role::Wall), edges - (24 * 32 - 1));
        assert_eq!(count(&obstacles, Role::Boundary), 4);
        assert_eq!(count(&obstacles, Role::Goal), 1);
        assert_eq!(count(&obstacles, Role::Ball), 1);
    }

    #[test]
    fn test_single_cell_scene_has_no_walls() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = Maze::generate(1, 1, &mut rng).expect("should generate");
        let layout = Layout::new(1, 1, vec2(100.0, 50.0));
        let obstacles = materialize(&maze, &layout);

        assert_eq!(obstacles.len(), 6);
        assert_eq!(count(&obstacles, Role::Wall), 0);

        let goal = obstacles
            .iter()
            .find(|o| o.role == Role::Goal)
            .expect("goal");
        assert_eq!(goal.center, vec2(50.0, 25.0));
        assert_eq!(
            goal.shape,
            Shape::Rectangle {
                size: vec2(70.0, 35.0)
            }
        );

        let ball = obstacles
            .iter()
            .find(|o| o.role == Role::Ball)
            .expect("ball");
        assert_eq!(ball.center, vec2(50.0, 25.0));
        assert_eq!(ball.shape, Shape::Circle { radius: 12.5 });
    }

    #[test]
    fn test_walls_sit_on_edge_midpoints() {
        // A 1x2 maze has exactly one edge, and carving always opens it, so
        // force a closed one by building the walls by hand.
        let mut rng = StdRng::seed_from_u64(0);
        let mut maze = Maze::generate(2, 1, &mut rng).expect("should generate");
        maze.walls = crate::maze::Walls::new(2, 1);
        let layout = Layout::new(2, 1, vec2(40.0, 80.0));
        let obstacles = materialize(&maze, &layout);

        let wall = obstacles
            .iter()
            .find(|o| o.role == Role::Wall)
            .expect("one closed horizontal edge");
        assert_eq!(wall.center, vec2(20.0, 40.0));
        assert_eq!(
            wall.shape,
            Shape::Rectangle {
                size: vec2(40.0, WALL_THICKNESS)
            }
        );

        let mut maze = Maze::generate(1, 2, &mut rng).expect("should generate");
        maze.walls = crate::maze::Walls::new(1, 2);
        let layout = Layout::new(1, 2, vec2(80.0, 40.0));
        let obstacles = materialize(&maze, &layout);
        let wall = obstacles
            .iter()
            .find(|o| o.role == Role::Wall)
            .expect("one closed vertical edge");
        assert_eq!(wall.center, vec2(40.0, 20.0));
        assert_eq!(
            wall.shape,
            Shape::Rectangle {
                size: vec2(WALL_THICKNESS, 40.0)
            }
        );
    }

    #[test]
    fn test_materialize_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(31);
        let maze = Maze::generate(6, 7, &mut rng).expect("should generate");
        let layout = Layout::new(6, 7, vec2(700.0, 600.0));
        assert_eq!(materialize(&maze, &layout), materialize(&maze, &layout));
    }

    #[test]
    fn test_register_sorts_handles_by_role() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = Maze::generate(4, 4, &mut rng).expect("should generate");
        let layout = Layout::new(4, 4, vec2(400.0, 400.0));
        let obstacles = materialize(&maze, &layout);

        let mut engine = MockEngine::default();
        let handles = register(&obstacles, &mut engine).expect("scene is complete");

        assert_eq!(handles.boundaries.len(), 4);
        assert_eq!(handles.walls.len(), count(&obstacles, Role::Wall));
        assert_eq!(engine.role(handles.ball), Some(Role::Ball));
        assert_eq!(engine.role(handles.goal), Some(Role::Goal));
        assert!(engine.is_static(handles.goal));
        assert!(!engine.is_static(handles.ball));
        let last = obstacles.last().expect("ball comes last");
        assert_eq!(engine.bodies[handles.ball.0].center, last.center);
        for wall in &handles.walls {
            assert_eq!(engine.role(*wall), Some(Role::Wall));
            assert!(engine.is_static(*wall));
        }
    }

    #[test]
    fn test_register_rejects_scene_without_ball_or_goal() {
        let wall = Obstacle::rectangle(Role::Wall, vec2(5.0, 5.0), vec2(10.0, 1.0));
        let goal = Obstacle::rectangle(Role::Goal, vec2(9.0, 9.0), vec2(1.0, 1.0));

        let mut engine = MockEngine::default();
        assert_eq!(
            register(&[wall], &mut engine),
            Err(GameError::MissingObstacle(Role::Ball))
        );
        assert!(engine.bodies.is_empty(), "nothing reaches the engine");

        let ball = Obstacle {
            role: Role::Ball,
            center: vec2(1.0, 1.0),
            shape: Shape::Circle { radius: 0.5 },
        };
        assert_eq!(
            register(&[wall, ball], &mut engine),
            Err(GameError::MissingObstacle(Role::Goal))
        );
        assert!(engine.bodies.is_empty());

        let handles = register(&[wall, goal, ball], &mut engine).expect("scene is complete");
        assert_eq!(engine.bodies[handles.goal.0].center, vec2(9.0, 9.0));
        assert_eq!(handles.walls.len(), 1);
    }

    #[test]
    fn test_boundaries_frame_the_viewport() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = Maze::generate(1, 1, &mut rng).expect("should generate");
        let layout = Layout::new(1, 1, vec2(100.0, 50.0));
        let obstacles = materialize(&maze, &layout);

        let boundaries: Vec<(Vec2, Shape)> = obstacles
            .iter()
            .filter(|o| o.role == Role::Boundary)
            .map(|o| (o.center, o.shape))
            .collect();
        let horizontal = Shape::Rectangle {
            size: vec2(100.0, BOUNDARY_THICKNESS),
        };
        let vertical = Shape::Rectangle {
            size: vec2(BOUNDARY_THICKNESS, 50.0),
        };

        assert_eq!(
            boundaries,
            vec![
                (vec2(50.0, 0.0), horizontal),
                (vec2(50.0, 50.0), horizontal),
                (vec2(0.0, 25.0), vertical),
                (vec2(100.0, 25.0), vertical),
            ]
        );
    }
}
