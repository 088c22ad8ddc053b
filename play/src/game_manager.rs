use engine::GameState as GameStateTrait;
use itertools::Itertools;
use log::{debug, info};
use quoridor::{Action, GameState, Player, Wall};

use crate::{PlayOptions, SessionCommand};

/// What the console should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Message(String),
    Rejected(String),
    Nothing,
    Quit,
}

/// A console session over a single game.
///
/// The session owns the current snapshot and replaces it after every accepted action. A wall may
/// be previewed first, in which case it is only placed once confirmed.
pub struct GameManager {
    game_state: GameState,
    pending_wall: Option<Wall>,
    options: PlayOptions,
}

impl GameManager {
    pub fn new(options: PlayOptions) -> Self {
        Self {
            game_state: GameState::initial(),
            pending_wall: None,
            options,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn pending_wall(&self) -> Option<Wall> {
        self.pending_wall
    }

    pub fn command(&mut self, command: SessionCommand) -> Output {
        match command {
            SessionCommand::Action(action) => {
                self.pending_wall = None;
                self.take_action(action)
            }
            SessionCommand::Moves => {
                let player = self.game_state.current_player();
                let moves = self
                    .game_state
                    .legal_moves(player)
                    .iter()
                    .map(|m| m.target)
                    .join(" ");

                Output::Message(format!("{}: {}", player, moves))
            }
            SessionCommand::Walls => {
                let walls = self.game_state.legal_walls();

                Output::Message(format!("{} walls: {}", walls.len(), walls.iter().join(" ")))
            }
            SessionCommand::Path => Output::Message(
                Player::ALL
                    .iter()
                    .map(|player| match self.game_state.distance_to_goal(*player) {
                        Some(distance) => format!("{}: {}", player, distance),
                        None => format!("{}: no path", player),
                    })
                    .join("  "),
            ),
            SessionCommand::Board => Output::Message(self.game_state.to_string()),
            SessionCommand::Preview(wall) => self.preview(wall),
            SessionCommand::Confirm => match self.pending_wall.take() {
                Some(wall) => self.take_action(Action::PlaceWall(wall)),
                None => Output::Rejected("There is no wall to confirm".to_string()),
            },
            SessionCommand::Cancel => match self.pending_wall.take() {
                Some(wall) => Output::Message(format!("Cancelled {}", wall)),
                None => Output::Nothing,
            },
            SessionCommand::NewGame => {
                info!("Starting a new game");
                self.game_state = GameState::initial();
                self.pending_wall = None;
                Output::Message(self.game_state.to_string())
            }
            SessionCommand::Quit => Output::Quit,
            SessionCommand::Noop => Output::Nothing,
        }
    }

    fn preview(&mut self, wall: Wall) -> Output {
        match self.game_state.apply_wall(wall) {
            Ok(preview) => {
                debug!("Previewing {}", wall);
                self.pending_wall = Some(wall);

                Output::Message(format!(
                    "{}Type confirm to place {} or cancel",
                    preview, wall
                ))
            }
            Err(err) => Output::Rejected(err.to_string()),
        }
    }

    fn take_action(&mut self, action: Action) -> Output {
        let player = self.game_state.current_player();

        match self.game_state.take_action(&action) {
            Ok(game_state) => {
                self.game_state = game_state;
                Output::Message(self.describe(player, action))
            }
            Err(err) => Output::Rejected(err.to_string()),
        }
    }

    fn describe(&self, player: Player, action: Action) -> String {
        let mut message = match action {
            Action::MovePawn(target) => format!("{} moved to {}\n", player, target),
            Action::PlaceWall(wall) => format!("{} placed {}\n", player, wall),
        };

        if self.options.show_board {
            message.push_str(&self.game_state.to_string());
        }

        if let Some(winner) = self.game_state.winner() {
            info!("{} wins on move {}", winner, self.game_state.move_number());
            message.push_str(&format!("{} wins\n", winner));
        } else if self.options.show_moves {
            let player = self.game_state.current_player();
            let moves = self
                .game_state
                .legal_moves(player)
                .iter()
                .map(|m| m.target)
                .join(" ");
            message.push_str(&format!("{} moves: {}\n", player, moves));
        }

        message
    }
}
