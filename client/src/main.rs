use std::process;

use macroquad::window::{Conf, next_frame, screen_height, screen_width};
use rand::{SeedableRng, rngs::StdRng};

use client::run::GameRunner;
use common::config::{self, GameConfig};

fn window_conf() -> Conf {
    Conf {
        window_title: "Maze Collapse".to_string(),
        window_width: 1024,
        window_height: 768,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match GameConfig::from_env(screen_width(), screen_height()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration: {}.", e);
            process::exit(1);
        }
    };

    let rng = match config::seed_from_env() {
        Ok(Some(seed)) => {
            println!("Using maze seed {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        Ok(None) => StdRng::from_rng(&mut rand::rng()),
        Err(e) => {
            eprintln!("Error: invalid configuration: {}.", e);
            process::exit(1);
        }
    };

    let mut runner = match GameRunner::new(&config, rng) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: failed to start the game.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    loop {
        if let Err(e) = runner.frame() {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
        next_frame().await;
    }
}
