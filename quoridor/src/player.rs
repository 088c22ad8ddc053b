use std::fmt::{self, Display, Formatter};

use crate::{Coordinate, BOARD_HEIGHT};

/// One of the two sides of the game.
///
/// `One` has index 0, owns pawn `1`, starts on `(4, 8)` and races to row 0.
/// `Two` has index 1, owns pawn `2`, starts on `(4, 0)` and races to row 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::One),
            1 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn pawn_id(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn goal_row(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => BOARD_HEIGHT - 1,
        }
    }

    pub fn start(&self) -> Coordinate {
        match self {
            Player::One => Coordinate::new(4, BOARD_HEIGHT - 1),
            Player::Two => Coordinate::new(4, 0),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.pawn_id())
    }
}
