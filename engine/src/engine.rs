pub trait GameEngine {
    type Action;
    type State;
    type Player;
    type Error;

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, Self::Error>;

    fn player_to_move(&self, game_state: &Self::State) -> Self::Player;

    /// The winning player once the game has ended, `None` while it is still in progress.
    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Player>;

    fn move_number(&self, game_state: &Self::State) -> usize;
}

pub trait ValidActions {
    type State;
    type Action;

    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action>;
}
