use std::fmt::{self, Display, Formatter};

use crate::wall::is_wall_blocking;
use crate::{
    Coordinate, Direction, GameState, Orientation, Player, ASCII_LETTER_A, BOARD_HEIGHT, BOARD_WIDTH,
};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let walls = self.walls();
        let wall_at = |x: usize, y: usize| {
            walls
                .iter()
                .find(|w| w.x() == x && w.y() == y)
                .map(|w| w.orientation())
        };

        writeln!(f)?;

        for x in 0..BOARD_WIDTH {
            if x == 0 {
                write!(f, "  +")?;
            }
            write!(f, "---+")?;
        }

        writeln!(f)?;

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let coord = Coordinate::new(x, y);
                if x == 0 {
                    write!(f, "{} |", coord.rank())?;
                }
                let p = match self.board().occupant(coord) {
                    Some(player) => player.pawn_id().to_string(),
                    None => " ".to_string(),
                };
                let w = match coord.step(Direction::Right) {
                    Some(right) if is_wall_blocking(walls, coord, right) => "█",
                    _ => "|",
                };
                write!(f, " {} {}", p, w)?;
            }

            writeln!(f)?;

            for x in 0..BOARD_WIDTH {
                if x == 0 {
                    write!(f, "  +")?;
                }
                let coord = Coordinate::new(x, y);
                let w = match coord.step(Direction::Down) {
                    Some(below) if is_wall_blocking(walls, coord, below) => "■■■",
                    _ => "---",
                };
                let c = match wall_at(x + 1, y + 1) {
                    Some(Orientation::Horizontal) => "■",
                    Some(Orientation::Vertical) => "█",
                    None => "+",
                };
                write!(f, "{}{}", w, c)?;
            }

            writeln!(f)?;
        }

        for x in 0..BOARD_WIDTH {
            if x == 0 {
                write!(f, "   ")?;
            }
            let col_letter = (ASCII_LETTER_A + x as u8) as char;
            write!(f, " {}  ", col_letter)?;
        }

        writeln!(f)?;
        writeln!(f)?;
        write!(
            f,
            "  P1: {}  P2: {}",
            self.pawn(Player::One).walls_remaining(),
            self.pawn(Player::Two).walls_remaining()
        )?;

        match self.winner() {
            Some(winner) => writeln!(f, "  {} wins", winner),
            None => writeln!(f, "  {} to move", self.current_player()),
        }
    }
}
