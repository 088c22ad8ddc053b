mod action;
mod board;
mod constants;
mod coordinate;
mod display;
mod engine;
mod error;
mod game_state;
mod pathing;
mod pawn;
mod pawn_moves;
mod player;
mod serde;
mod wall;
mod wall_placement;

#[cfg(test)]
mod game_state_test;

pub use action::*;
pub use board::*;
pub use constants::*;
pub use coordinate::*;
pub use self::engine::*;
pub use error::*;
pub use game_state::*;
pub use pawn::*;
pub use player::*;
pub use wall::{Orientation, Wall};
