use super::constants::NUM_WALLS_PER_PLAYER;
use super::{Coordinate, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pawn {
    player: Player,
    position: Coordinate,
    walls_remaining: u8,
}

impl Pawn {
    pub fn new(player: Player, position: Coordinate) -> Self {
        Self {
            player,
            position,
            walls_remaining: NUM_WALLS_PER_PLAYER,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn id(&self) -> u8 {
        self.player.pawn_id()
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn walls_remaining(&self) -> u8 {
        self.walls_remaining
    }

    pub fn has_reached_goal(&self) -> bool {
        self.position.y() == self.player.goal_row()
    }

    pub(crate) fn move_to(&mut self, position: Coordinate) {
        self.position = position;
    }

    pub(crate) fn use_wall(&mut self) {
        self.walls_remaining = self.walls_remaining.saturating_sub(1);
    }
}
