//! A food-seeking Battlesnake.
//!
//! Each `/move` runs [`engine::classify`] to find the directions that do not
//! kill us this turn, then hands that set to the configured
//! [`strategy::MoveSelector`].

pub mod config;
pub mod engine;
pub mod game;
pub mod server;
pub mod strategy;
