mod game_manager;
mod input_parser;
mod options;
mod perft;

pub use game_manager::*;
pub use input_parser::*;
pub use options::*;
pub use perft::*;
