use itertools::iproduct;

use super::constants::{MAX_WALL_INTERSECTION, MIN_WALL_INTERSECTION};
use super::pathing::distance_to_row;
use super::{GameState, Orientation, Player, Wall};

impl GameState {
    /// Whether `wall` could be added to the board.
    ///
    /// The intersection must be on the board, no placed wall may share it, no placed wall of the
    /// same orientation may sit on the same track one unit or less away, and with the wall added
    /// both pawns must still have a path to their goal row.
    pub fn is_legal_wall(&self, wall: &Wall) -> bool {
        if !wall.is_on_board() {
            return false;
        }

        if self.walls().iter().any(|placed| placed.conflicts_with(wall)) {
            return false;
        }

        let mut walls = Vec::with_capacity(self.walls().len() + 1);
        walls.extend_from_slice(self.walls());
        walls.push(*wall);

        Player::ALL.iter().all(|player| {
            distance_to_row(&walls, self.pawn(*player).position(), player.goal_row()).is_some()
        })
    }

    /// Every wall the player to move may place, horizontal walls first, each in row major order.
    pub fn legal_walls(&self) -> Vec<Wall> {
        if self.is_terminal() || self.pawn(self.current_player()).walls_remaining() == 0 {
            return Vec::new();
        }

        let intersections = MIN_WALL_INTERSECTION as u8..=MAX_WALL_INTERSECTION as u8;

        iproduct!(Orientation::ALL, intersections.clone(), intersections)
            .map(|(orientation, y, x)| Wall::new(x, y, orientation))
            .filter(|wall| self.is_legal_wall(wall))
            .collect()
    }
}
