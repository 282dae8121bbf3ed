// Sokoban rules: layout validation for authored levels, the per-session puzzle
// engine, and the map/leaderboard store the game talks to.
// Cell codes: 'W' wall, '.' floor, 'P' player, 'B' box, 'T' target, '*' box on target.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod layout;
pub mod logging;
pub mod models;
pub mod play;
pub mod store;

#[cfg(test)]
mod test;
