use macroquad::prelude::*;

use common::input::Steer;

const BINDINGS: [(KeyCode, Steer); 8] = [
    (KeyCode::W, Steer::Up),
    (KeyCode::D, Steer::Right),
    (KeyCode::S, Steer::Down),
    (KeyCode::A, Steer::Left),
    (KeyCode::Up, Steer::Up),
    (KeyCode::Right, Steer::Right),
    (KeyCode::Down, Steer::Down),
    (KeyCode::Left, Steer::Left),
];

/// One `Steer` per key that went down this frame.
pub fn steers_from_keys() -> Vec<Steer> {
    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, steer)| steer)
        .collect()
}

pub fn replay_requested() -> bool {
    is_key_pressed(KeyCode::R)
}
