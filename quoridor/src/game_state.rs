use log::{debug, trace};

use super::{Action, Board, Coordinate, InvalidAction, Pawn, Player, Wall};
use engine::game_state;

/// A snapshot of the game between two turns.
///
/// Snapshots are never edited in place by callers. The transitions take `&self` and return a new,
/// independent snapshot, leaving the original untouched whether or not the action was accepted.
#[derive(Hash, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    pawns: [Pawn; 2],
    walls: Vec<Wall>,
    current_player: Player,
    winner: Option<Player>,
    move_number: usize,
}

impl GameState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pawn(&self, player: Player) -> &Pawn {
        &self.pawns[player.index()]
    }

    pub fn pawns(&self) -> &[Pawn; 2] {
        &self.pawns
    }

    /// Placed walls in the order they were placed.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Moves `player`'s pawn to `target`.
    ///
    /// Declares `player` the winner when `target` is on their goal row, in which case the turn does
    /// not pass. Otherwise the opponent is to move next.
    pub fn apply_move(&self, player: Player, target: Coordinate) -> Result<Self, InvalidAction> {
        self.validate_move(player, target).map_err(|err| {
            trace!("Rejected pawn move {} for {}: {}", target, player, err);
            err
        })?;

        let mut game_state = self.clone();
        game_state.move_pawn(player, target);

        debug!("{} moved to {}", player, target);
        if let Some(winner) = game_state.winner {
            debug!("{} has won on move {}", winner, game_state.move_number);
        }

        Ok(game_state)
    }

    /// Places `wall` for the player to move, spending one of their walls. The turn always passes.
    pub fn apply_wall(&self, wall: Wall) -> Result<Self, InvalidAction> {
        self.validate_wall(wall).map_err(|err| {
            trace!("Rejected wall {} for {}: {}", wall, self.current_player, err);
            err
        })?;

        let mut game_state = self.clone();
        game_state.place_wall(wall);

        debug!("{} placed wall {}", self.current_player, wall);

        Ok(game_state)
    }

    pub fn take_action(&self, action: &Action) -> Result<Self, InvalidAction> {
        match action {
            Action::MovePawn(target) => self.apply_move(self.current_player, *target),
            Action::PlaceWall(wall) => self.apply_wall(*wall),
        }
    }

    /// Every action the player to move may take: pawn moves first, then wall placements.
    pub fn valid_actions(&self) -> Vec<Action> {
        self.legal_moves(self.current_player)
            .into_iter()
            .map(Action::from)
            .chain(self.legal_walls().into_iter().map(Action::from))
            .collect()
    }

    fn validate_move(&self, player: Player, target: Coordinate) -> Result<(), InvalidAction> {
        if let Some(winner) = self.winner {
            return Err(InvalidAction::GameOver(winner));
        }

        if player != self.current_player {
            return Err(InvalidAction::NotPlayersTurn(player));
        }

        if !self.legal_moves(player).iter().any(|m| m.target == target) {
            return Err(InvalidAction::IllegalMove(target));
        }

        Ok(())
    }

    fn validate_wall(&self, wall: Wall) -> Result<(), InvalidAction> {
        if let Some(winner) = self.winner {
            return Err(InvalidAction::GameOver(winner));
        }

        if self.pawn(self.current_player).walls_remaining() == 0 {
            return Err(InvalidAction::NoWallsRemaining(self.current_player));
        }

        if !self.is_legal_wall(&wall) {
            return Err(InvalidAction::IllegalWall(wall));
        }

        Ok(())
    }

    fn move_pawn(&mut self, player: Player, target: Coordinate) {
        let pawn = &mut self.pawns[player.index()];
        pawn.move_to(target);
        let has_reached_goal = pawn.has_reached_goal();

        self.board = Board::from_pawns(&self.pawns);

        if has_reached_goal {
            self.winner = Some(player);
        } else {
            self.increment_turn();
        }
    }

    fn place_wall(&mut self, wall: Wall) {
        self.pawns[self.current_player.index()].use_wall();
        self.walls.push(wall);
        self.increment_turn();
    }

    fn increment_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        if self.current_player == Player::One {
            self.move_number += 1;
        }
    }
}

impl game_state::GameState for GameState {
    fn initial() -> Self {
        let pawns = [
            Pawn::new(Player::One, Player::One.start()),
            Pawn::new(Player::Two, Player::Two.start()),
        ];

        GameState {
            board: Board::from_pawns(&pawns),
            pawns,
            walls: Vec::new(),
            current_player: Player::One,
            winner: None,
            move_number: 1,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        <Self as game_state::GameState>::initial()
    }
}
