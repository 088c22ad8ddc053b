use std::collections::VecDeque;

use super::constants::BOARD_SIZE;
use super::wall::is_wall_blocking;
use super::{Coordinate, GameState, Player, Wall};

impl GameState {
    /// Whether `player` could still walk to their goal row. Pawns are not obstacles, only walls.
    pub fn has_path_to_goal(&self, player: Player) -> bool {
        self.distance_to_goal(player).is_some()
    }

    /// Length of the shortest wall respecting path from `player`'s pawn to their goal row.
    pub fn distance_to_goal(&self, player: Player) -> Option<usize> {
        distance_to_row(self.walls(), self.pawn(player).position(), player.goal_row())
    }
}

/// Breadth first search over the board, stopping at the first cell dequeued on `goal_row`.
pub(crate) fn distance_to_row(walls: &[Wall], start: Coordinate, goal_row: usize) -> Option<usize> {
    let mut visited = [false; BOARD_SIZE];
    let mut frontier = VecDeque::with_capacity(BOARD_SIZE);

    visited[start.index()] = true;
    frontier.push_back((start, 0));

    while let Some((cell, distance)) = frontier.pop_front() {
        if cell.y() == goal_row {
            return Some(distance);
        }

        for neighbor in cell.neighbors() {
            if visited[neighbor.index()] || is_wall_blocking(walls, cell, neighbor) {
                continue;
            }

            visited[neighbor.index()] = true;
            frontier.push_back((neighbor, distance + 1));
        }
    }

    None
}
