use super::constants::{ASCII_LETTER_A, BOARD_HEIGHT, MAX_WALL_INTERSECTION, MIN_WALL_INTERSECTION};
use super::Coordinate;
use anyhow::{anyhow, bail};
use std::fmt::{self};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    fn suffix(&self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}

/// A wall centered on the grid intersection `(x, y)`.
///
/// Intersection `(x, y)` is the corner shared by cells `(x - 1, y - 1)`, `(x, y - 1)`, `(x - 1, y)`
/// and `(x, y)`. A horizontal wall separates rows `y - 1` and `y` across columns `x - 1` and `x`,
/// a vertical wall separates columns `x - 1` and `x` across rows `y - 1` and `y`.
///
/// Any intersection can be described; only `[1, 8] x [1, 8]` are on the board.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Wall {
    x: u8,
    y: u8,
    orientation: Orientation,
}

impl Wall {
    pub fn new(x: u8, y: u8, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    pub fn horizontal(x: u8, y: u8) -> Self {
        Self::new(x, y, Orientation::Horizontal)
    }

    pub fn vertical(x: u8, y: u8) -> Self {
        Self::new(x, y, Orientation::Vertical)
    }

    pub fn x(&self) -> usize {
        self.x as usize
    }

    pub fn y(&self) -> usize {
        self.y as usize
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_on_board(&self) -> bool {
        let range = MIN_WALL_INTERSECTION..=MAX_WALL_INTERSECTION;
        range.contains(&self.x()) && range.contains(&self.y())
    }

    /// Whether this wall cuts the step between two orthogonally adjacent cells.
    pub fn blocks(&self, from: Coordinate, to: Coordinate) -> bool {
        let spans = |cell: usize, wall: usize| cell == wall || cell + 1 == wall;
        let crosses = |a: usize, b: usize, wall: usize| a.max(b) == wall && a.min(b) + 1 == wall;

        match self.orientation {
            Orientation::Horizontal => {
                from.x() == to.x()
                    && crosses(from.y(), to.y(), self.y())
                    && spans(from.x(), self.x())
            }
            Orientation::Vertical => {
                from.y() == to.y()
                    && crosses(from.x(), to.x(), self.x())
                    && spans(from.y(), self.y())
            }
        }
    }

    /// Whether this wall may not coexist with `other`: they share an intersection, or they run
    /// along the same track with their centers at most one unit apart.
    pub fn conflicts_with(&self, other: &Wall) -> bool {
        if self.x == other.x && self.y == other.y {
            return true;
        }

        self.orientation == other.orientation
            && match self.orientation {
                Orientation::Horizontal => self.y == other.y && self.x.abs_diff(other.x) <= 1,
                Orientation::Vertical => self.x == other.x && self.y.abs_diff(other.y) <= 1,
            }
    }
}

pub(crate) fn is_wall_blocking(walls: &[Wall], from: Coordinate, to: Coordinate) -> bool {
    walls.iter().any(|wall| wall.blocks(from, to))
}

impl FromStr for Wall {
    type Err = anyhow::Error;

    /// Parses the cell to the lower left of the intersection followed by `h` or `v`, e.g. `d5h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 3 {
            bail!("Invalid wall {:?}, expected a column letter, a rank and 'h' or 'v'", s);
        }

        let orientation = match chars[2] {
            'h' => Orientation::Horizontal,
            'v' => Orientation::Vertical,
            _ => bail!("Invalid wall orientation in {:?}", s),
        };

        if !chars[0].is_ascii_lowercase() {
            bail!("Invalid column in {:?}", s);
        }

        let x = (chars[0] as usize) - (ASCII_LETTER_A as usize) + 1;
        let rank = chars[1]
            .to_digit(10)
            .ok_or_else(|| anyhow!("Invalid rank in {:?}", s))? as usize;
        let y = BOARD_HEIGHT
            .checked_sub(rank)
            .ok_or_else(|| anyhow!("Invalid rank in {:?}", s))?;

        let range = MIN_WALL_INTERSECTION..=MAX_WALL_INTERSECTION;
        if !range.contains(&x) || !range.contains(&y) {
            bail!("Wall {:?} is not on the board", s);
        }

        Ok(Wall::new(x as u8, y as u8, orientation))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({},{}){}", self.x, self.y, self.orientation.suffix());
        }

        let col = (ASCII_LETTER_A + self.x - 1) as char;
        let rank = BOARD_HEIGHT - self.y();

        write!(f, "{}{}{}", col, rank, self.orientation.suffix())
    }
}

impl fmt::Debug for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
