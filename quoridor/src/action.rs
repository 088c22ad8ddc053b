use super::{Coordinate, Wall};
use anyhow::bail;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MoveKind {
    /// One step into an empty adjacent cell.
    Normal,
    /// Two steps in a straight line over the adjacent opponent.
    Jump,
}

/// A destination a pawn may move to this turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PawnMove {
    pub target: Coordinate,
    pub kind: MoveKind,
}

impl PawnMove {
    pub fn normal(target: Coordinate) -> Self {
        Self {
            target,
            kind: MoveKind::Normal,
        }
    }

    pub fn jump(target: Coordinate) -> Self {
        Self {
            target,
            kind: MoveKind::Jump,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    MovePawn(Coordinate),
    PlaceWall(Wall),
}

impl From<PawnMove> for Action {
    fn from(pawn_move: PawnMove) -> Self {
        Action::MovePawn(pawn_move.target)
    }
}

impl From<Wall> for Action {
    fn from(wall: Wall) -> Self {
        Action::PlaceWall(wall)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::MovePawn(coordinate) => write!(f, "{}", coordinate),
            Action::PlaceWall(wall) => write!(f, "{}", wall),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.chars().count() {
            2 => Ok(Action::MovePawn(s.parse()?)),
            3 => Ok(Action::PlaceWall(s.parse()?)),
            _ => bail!("Invalid action {:?}", s),
        }
    }
}
