pub mod input;
pub mod physics;
pub mod render;
pub mod run;
pub mod ui;
