pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod maze;
pub mod scene;
pub mod session;

#[cfg(test)]
mod test_helpers;
