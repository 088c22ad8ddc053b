use super::wall::is_wall_blocking;
use super::{Coordinate, Direction, GameState, PawnMove, Player};

impl GameState {
    /// The cells `player`'s pawn may move to right now, regardless of whose turn it is.
    ///
    /// Each of the four neighbours not cut off by a wall is a normal move when empty. When the
    /// opponent stands on it, the cell straight beyond the opponent is a jump instead, provided it
    /// is on the board and no wall stands between it and the opponent. Diagonal side steps around
    /// a blocked jump are not generated. No moves are available once the game has been won.
    pub fn legal_moves(&self, player: Player) -> Vec<PawnMove> {
        if self.is_terminal() {
            return Vec::new();
        }

        let position = self.pawn(player).position();
        let opponent = self.pawn(player.opponent()).position();

        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let adjacent = position.step(direction)?;
                if is_wall_blocking(self.walls(), position, adjacent) {
                    return None;
                }

                if adjacent != opponent {
                    return Some(PawnMove::normal(adjacent));
                }

                self.jump_over(opponent, direction).map(PawnMove::jump)
            })
            .collect()
    }

    fn jump_over(&self, opponent: Coordinate, direction: Direction) -> Option<Coordinate> {
        let landing = opponent.step(direction)?;

        if is_wall_blocking(self.walls(), opponent, landing) {
            None
        } else {
            Some(landing)
        }
    }
}
