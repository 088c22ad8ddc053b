use super::{Action, GameState, InvalidAction, Player};
use engine::engine::{GameEngine, ValidActions};

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Player = Player;
    type Error = InvalidAction;

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, Self::Error> {
        game_state.take_action(action)
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        game_state.current_player()
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Player> {
        game_state.winner()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.move_number()
    }
}

impl ValidActions for Engine {
    type State = GameState;
    type Action = Action;

    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action> {
        game_state.valid_actions().into_iter()
    }
}
