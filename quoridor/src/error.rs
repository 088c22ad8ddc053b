use derive_more::{Display, Error};

use super::{Coordinate, Player, Wall};

/// The reason why an action was rejected. The state it was applied to is left untouched.
#[derive(Debug, Display, Clone, Copy, Eq, PartialEq, Hash, Error)]
#[error(ignore)]
pub enum InvalidAction {
    #[display(fmt = "the game has already been won by {}", _0)]
    GameOver(Player),

    #[display(fmt = "it is not {}'s turn to move", _0)]
    NotPlayersTurn(Player),

    #[display(fmt = "{} is not a legal pawn move", _0)]
    IllegalMove(Coordinate),

    #[display(fmt = "{} has no walls remaining", _0)]
    NoWallsRemaining(Player),

    #[display(fmt = "{} is not a legal wall placement", _0)]
    IllegalWall(Wall),
}
