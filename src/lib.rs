//! Terminal space invaders.
//!
//! The library holds everything that can run without a terminal:
//! - `geometry`: points, sizes and the rectangle overlap test
//! - `entities`: actors, sprite regions and the game state record
//! - `compute`: the per-tick simulation
//! - `frame`: turning a snapshot into an ordered list of sprite draws
//! - `input`: the key → command queue fed by a background thread
//! - `game`: the Start → Playing → GameOver state machine
//! - `config`: gameplay constants and tunable settings

pub mod compute;
pub mod config;
pub mod entities;
pub mod frame;
pub mod game;
pub mod geometry;
pub mod input;
