use super::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use super::{Coordinate, Pawn, Player};

/// Cell occupancy, always rebuilt from the pawns rather than edited in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub fn from_pawns(pawns: &[Pawn; 2]) -> Self {
        let mut cells = [[None; BOARD_WIDTH]; BOARD_HEIGHT];

        for pawn in pawns {
            let position = pawn.position();
            cells[position.y()][position.x()] = Some(pawn.player());
        }

        Self { cells }
    }

    pub fn occupant(&self, coordinate: Coordinate) -> Option<Player> {
        self.cells[coordinate.y()][coordinate.x()]
    }

    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        self.occupant(coordinate).is_none()
    }

    /// The identifier of the pawn on the cell, `0` when empty.
    pub fn pawn_id(&self, coordinate: Coordinate) -> u8 {
        self.occupant(coordinate).map_or(0, |player| player.pawn_id())
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|player| (Coordinate::new(x, y), player)))
        })
    }
}
