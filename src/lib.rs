//! Rules engine for a crate-pushing puzzle, plus a small terminal front end.
//!
//! Tiles: '#' wall, '@' player, '$' crate, '.' target, '*' crate on target, '+' player on target, ' ' floor.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod models;
#[cfg(test)]
mod test;
