use macroquad::prelude::*;

use common::scene::{Role, Shape};

use crate::physics::ObstacleView;

const WALL_COLOR: Color = Color::new(0.357, 0.0, 0.682, 1.0); // #5B00AE
const BALL_COLOR: Color = Color::new(1.0, 0.561, 0.349, 1.0); // #FF8F59
const GOAL_COLOR: Color = GREEN;
const BOUNDARY_COLOR: Color = DARKGRAY;
const BACKGROUND_COLOR: Color = Color::new(0.08, 0.08, 0.1, 1.0);

fn color_for(role: Role) -> Color {
    match role {
        Role::Wall => WALL_COLOR,
        Role::Goal => GOAL_COLOR,
        Role::Ball => BALL_COLOR,
        Role::Boundary => BOUNDARY_COLOR,
    }
}

pub fn draw_scene(obstacles: impl Iterator<Item = ObstacleView>) {
    clear_background(BACKGROUND_COLOR);

    for obstacle in obstacles {
        let color = color_for(obstacle.role);
        match obstacle.shape {
            Shape::Rectangle { size } => draw_rectangle_ex(
                obstacle.center.x,
                obstacle.center.y,
                size.x,
                size.y,
                DrawRectangleParams {
                    offset: vec2(0.5, 0.5),
                    rotation: obstacle.rotation,
                    color,
                },
            ),
            Shape::Circle { radius } => {
                draw_circle(obstacle.center.x, obstacle.center.y, radius, color)
            }
        }
    }
}
