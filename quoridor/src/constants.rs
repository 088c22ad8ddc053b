pub const BOARD_WIDTH: usize = 9;
pub const BOARD_HEIGHT: usize = 9;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;
pub const NUM_WALLS_PER_PLAYER: u8 = 10;
pub const MIN_WALL_INTERSECTION: usize = 1;
pub const MAX_WALL_INTERSECTION: usize = 8;
pub const ASCII_LETTER_A: u8 = b'a';
