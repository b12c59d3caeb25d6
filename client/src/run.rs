use macroquad::time::get_frame_time;
use rand::rngs::StdRng;

use common::{
    config::GameConfig,
    error::GameError,
    session::{self, Game},
};

use crate::{input, physics::RapierEngine, render, ui::Banner};

pub struct GameRunner {
    game: Option<Game<RapierEngine>>,
    banner: Banner,
    rng: StdRng,
}

impl GameRunner {
    pub fn new(config: &GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        let game = session::start_new_game(config, &mut rng)?;
        Ok(Self {
            game: Some(game),
            banner: Banner::default(),
            rng,
        })
    }

    /// One frame: input, physics, win check, drawing.
    pub fn frame(&mut self) -> Result<(), GameError> {
        if self.banner.replay_clicked() || input::replay_requested() {
            self.replay()?;
        }

        let Some(game) = self.game.as_mut() else {
            return Ok(());
        };

        for steer in input::steers_from_keys() {
            game.steer(steer);
        }

        game.engine_mut().advance(get_frame_time());
        game.update(&mut self.banner);

        render::draw_scene(game.engine().obstacles());
        self.banner.draw();

        Ok(())
    }

    fn replay(&mut self) -> Result<(), GameError> {
        if let Some(game) = self.game.take() {
            self.game = Some(game.replay(&mut self.rng, &mut self.banner)?);
        }
        Ok(())
    }
}
