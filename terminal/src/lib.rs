pub mod app;
pub mod cues;
pub mod input;
pub mod render;
pub mod settings;
pub mod views;
