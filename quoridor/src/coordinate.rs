use super::constants::{ASCII_LETTER_A, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};
use anyhow::{anyhow, bail};
use std::fmt::{self};
use std::str::FromStr;

/// A cell on the board.
///
/// `x` is the column, `y` the row. Row 0 is the goal row of `Player::One` and is written as rank 9,
/// row 8 is written as rank 1. e.g. `(4, 8)` is `e1`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: u8,
    y: u8,
}

/// The four orthogonal directions, in the order pawn moves are generated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];

    fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
        }
    }
}

impl Coordinate {
    /// # Panics
    ///
    /// Panics if `(x, y)` is not on the 9x9 board.
    pub fn new(x: usize, y: usize) -> Self {
        Self::try_new(x, y)
            .unwrap_or_else(|| panic!("Coordinate ({}, {}) is off the board", x, y))
    }

    pub fn try_new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_WIDTH && y < BOARD_HEIGHT {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub fn x(&self) -> usize {
        self.x as usize
    }

    pub fn y(&self) -> usize {
        self.y as usize
    }

    /// The adjacent cell in `direction`, `None` when that would leave the board.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x().checked_add_signed(dx)?;
        let y = self.y().checked_add_signed(dy)?;

        Self::try_new(x, y)
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::ALL.into_iter().filter_map(|d| self.step(d))
    }

    /// Row major index, `(0, 0)` is 0 and `(8, 8)` is 80.
    pub fn index(&self) -> usize {
        self.y() * BOARD_WIDTH + self.x()
    }

    pub fn from_index(value: usize) -> Self {
        assert!(
            value < BOARD_SIZE,
            "Coordinate value must be less than {}",
            BOARD_SIZE
        );

        Self::new(value % BOARD_WIDTH, value / BOARD_WIDTH)
    }

    pub fn col(&self) -> char {
        (self.x + ASCII_LETTER_A) as char
    }

    pub fn rank(&self) -> usize {
        BOARD_HEIGHT - self.y()
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            bail!("Invalid coordinate {:?}, expected a column letter and a rank", s);
        }

        let x = (chars[0] as u32)
            .checked_sub(ASCII_LETTER_A as u32)
            .ok_or_else(|| anyhow!("Invalid column in {:?}", s))? as usize;
        let rank = chars[1]
            .to_digit(10)
            .ok_or_else(|| anyhow!("Invalid rank in {:?}", s))? as usize;

        if rank == 0 || rank > BOARD_HEIGHT {
            bail!("Invalid rank in {:?}", s);
        }

        Self::try_new(x, BOARD_HEIGHT - rank).ok_or_else(|| anyhow!("Invalid column in {:?}", s))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.col(), self.rank())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
