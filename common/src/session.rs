use glam::Vec2;
use rand::Rng;

use crate::{
    config::GameConfig,
    constants::COLLAPSE_GRAVITY,
    engine::{Engine, SimulationConfig},
    error::GameError,
    game::{GameState, GameUi, WinCondition},
    input::{self, Steer},
    maze::Maze,
    scene::{self, Layout, SceneHandles},
};

/// One playthrough: a maze, the engine simulating it, and the win condition.
pub struct Game<E: Engine> {
    pub config: GameConfig,
    pub maze: Maze,
    pub scene: SceneHandles,
    engine: E,
    win: WinCondition,
}

/// Generates a maze, builds its scene in a fresh engine and hands back the
/// running game. Nothing reaches the engine until carving has finished.
pub fn start_new_game<E: Engine, R: Rng>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Game<E>, GameError> {
    config.validate()?;

    let maze = Maze::generate(config.rows, config.columns, rng)?;
    let layout = Layout::new(config.rows, config.columns, config.viewport());

    let mut engine = E::create(&SimulationConfig {
        world_size: config.viewport(),
        gravity: Vec2::ZERO,
    })?;
    let obstacles = scene::materialize(&maze, &layout);
    let scene = scene::register(&obstacles, &mut engine)?;
    let win = WinCondition::new(scene.walls.clone(), COLLAPSE_GRAVITY);

    println!(
        "Generated a {}x{} maze from ({}, {}); {} walls.",
        config.rows,
        config.columns,
        maze.start.row,
        maze.start.column,
        scene.walls.len()
    );

    Ok(Game {
        config: *config,
        maze,
        scene,
        engine,
        win,
    })
}

impl<E: Engine> Game<E> {
    pub fn state(&self) -> GameState {
        self.win.state()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn steer(&mut self, steer: Steer) {
        input::steer(&mut self.engine, self.scene.ball, steer);
    }

    /// Feeds pending collisions to the win condition.
    pub fn update(&mut self, ui: &mut dyn GameUi) {
        for collision in self.engine.poll_collisions() {
            if self
                .win
                .handle_collision(&collision, &mut self.engine, ui)
            {
                println!("Maze solved.");
            }
        }
    }

    /// Throws this game away and starts a new one with the same configuration.
    pub fn replay<R: Rng>(self, rng: &mut R, ui: &mut dyn GameUi) -> Result<Game<E>, GameError> {
        ui.hide_solved();
        let config = self.config;
        drop(self);

        println!("Replaying.");
        start_new_game(&config, rng)
    }
}
