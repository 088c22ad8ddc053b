#[cfg(test)]
mod tests {
    use super::super::{
        Action, Coordinate, GameState, InvalidAction, MoveKind, PawnMove, Player, Wall,
    };
    use engine::game_state::GameState as GameStateTrait;

    fn c(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y)
    }

    /// Moves the pawn of whoever is to move through each cell in turn.
    fn walk(game_state: &GameState, cells: &[(usize, usize)]) -> GameState {
        cells.iter().fold(game_state.clone(), |game_state, (x, y)| {
            game_state
                .apply_move(game_state.current_player(), c(*x, *y))
                .unwrap()
        })
    }

    fn play(game_state: &GameState, actions: &[&str]) -> GameState {
        actions.iter().fold(game_state.clone(), |game_state, action| {
            game_state
                .take_action(&action.parse::<Action>().unwrap())
                .unwrap()
        })
    }

    fn targets(moves: &[PawnMove]) -> Vec<Coordinate> {
        moves.iter().map(|m| m.target).collect()
    }

    // One at (4, 4) facing Two at (4, 3), Two to move.
    fn face_to_face() -> GameState {
        walk(
            &GameState::initial(),
            &[(4, 7), (4, 1), (4, 6), (4, 2), (4, 5), (4, 3), (4, 4)],
        )
    }

    #[test]
    fn test_initial_state() {
        let game_state = GameState::initial();

        assert_eq!(game_state.pawn(Player::One).position(), c(4, 8));
        assert_eq!(game_state.pawn(Player::One).walls_remaining(), 10);
        assert_eq!(game_state.pawn(Player::One).id(), 1);
        assert_eq!(game_state.pawn(Player::Two).position(), c(4, 0));
        assert_eq!(game_state.pawn(Player::Two).walls_remaining(), 10);
        assert_eq!(game_state.pawn(Player::Two).id(), 2);
        assert!(game_state.walls().is_empty());
        assert_eq!(game_state.current_player(), Player::One);
        assert_eq!(game_state.winner(), None);
        assert_eq!(game_state.move_number(), 1);
        assert_eq!(game_state.board().pawn_id(c(4, 8)), 1);
        assert_eq!(game_state.board().pawn_id(c(4, 0)), 2);
        assert_eq!(game_state.board().occupied().count(), 2);
    }

    #[test]
    fn test_legal_moves_p1() {
        let game_state = GameState::initial();
        let valid_moves = game_state.legal_moves(Player::One);

        assert_eq!(
            valid_moves,
            vec![
                PawnMove::normal("f1".parse().unwrap()),
                PawnMove::normal("e2".parse().unwrap()),
                PawnMove::normal("d1".parse().unwrap()),
            ]
        );
    }

    #[test]
    fn test_legal_moves_p2() {
        let game_state = play(&GameState::initial(), &["f1"]);
        let valid_moves = game_state.legal_moves(Player::Two);

        assert_eq!(
            valid_moves,
            vec![
                PawnMove::normal("e8".parse().unwrap()),
                PawnMove::normal("f9".parse().unwrap()),
                PawnMove::normal("d9".parse().unwrap()),
            ]
        );
    }

    #[test]
    fn test_legal_moves_vertical_walls() {
        let game_state = GameState::initial()
            .apply_wall(Wall::vertical(4, 8))
            .unwrap()
            .apply_wall(Wall::vertical(5, 8))
            .unwrap();

        assert_eq!(
            game_state.legal_moves(Player::One),
            vec![PawnMove::normal(c(4, 7))]
        );
    }

    #[test]
    fn test_legal_moves_horizontal_wall() {
        let game_state = play(&GameState::initial(), &["d1h", "e8"]);

        assert_eq!(
            targets(&game_state.legal_moves(Player::One)),
            vec![c(5, 8), c(3, 8)]
        );
    }

    #[test]
    fn test_legal_moves_jump() {
        let game_state = face_to_face();
        let valid_moves = game_state.legal_moves(Player::Two);

        assert_eq!(
            valid_moves,
            vec![
                PawnMove::jump(c(4, 5)),
                PawnMove::normal(c(5, 3)),
                PawnMove::normal(c(4, 2)),
                PawnMove::normal(c(3, 3)),
            ]
        );
        assert!(!targets(&valid_moves).contains(&c(4, 4)));
    }

    #[test]
    fn test_legal_moves_jump_blocked_by_wall_has_no_side_step() {
        let game_state = face_to_face().apply_wall(Wall::horizontal(5, 5)).unwrap();

        assert_eq!(
            game_state.legal_moves(Player::Two),
            vec![
                PawnMove::normal(c(5, 3)),
                PawnMove::normal(c(4, 2)),
                PawnMove::normal(c(3, 3)),
            ]
        );
        assert_eq!(
            game_state.legal_moves(Player::One),
            vec![
                PawnMove::normal(c(5, 4)),
                PawnMove::jump(c(4, 2)),
                PawnMove::normal(c(3, 4)),
            ]
        );
    }

    #[test]
    fn test_legal_moves_jump_blocked_by_board_edge() {
        let game_state = walk(
            &GameState::initial(),
            &[
                (4, 7),
                (3, 0),
                (4, 6),
                (4, 0),
                (4, 5),
                (3, 0),
                (4, 4),
                (4, 0),
                (4, 3),
                (3, 0),
                (4, 2),
                (4, 0),
                (4, 1),
            ],
        );

        assert_eq!(
            game_state.legal_moves(Player::One),
            vec![
                PawnMove::normal(c(4, 2)),
                PawnMove::normal(c(5, 1)),
                PawnMove::normal(c(3, 1)),
            ]
        );
        assert_eq!(
            game_state.legal_moves(Player::Two),
            vec![
                PawnMove::jump(c(4, 2)),
                PawnMove::normal(c(5, 0)),
                PawnMove::normal(c(3, 0)),
            ]
        );
    }

    #[test]
    fn test_legal_moves_wall_between_pawns_prevents_jump() {
        let game_state = walk(
            &GameState::initial(),
            &[(4, 7), (4, 1), (4, 6), (4, 2), (4, 5), (4, 3)],
        )
        .apply_wall(Wall::horizontal(5, 5))
        .unwrap();
        let game_state = walk(&game_state, &[(4, 4)]);

        // The wall sits between the pawns so One has nothing to jump.
        let moves = game_state.legal_moves(Player::One);

        assert!(moves.iter().all(|m| m.kind == MoveKind::Normal));
        assert!(!targets(&moves).contains(&c(4, 4)));
    }

    #[test]
    fn test_legal_moves_empty_once_won() {
        let game_state = one_wins();

        assert!(game_state.legal_moves(Player::One).is_empty());
        assert!(game_state.legal_moves(Player::Two).is_empty());
        assert!(game_state.valid_actions().is_empty());
    }

    #[test]
    fn test_apply_move_updates_board() {
        let game_state = GameState::initial();
        let next = game_state.apply_move(Player::One, c(4, 7)).unwrap();

        assert_eq!(next.board().occupant(c(4, 8)), None);
        assert_eq!(next.board().occupant(c(4, 7)), Some(Player::One));
        assert_eq!(next.board().pawn_id(c(4, 7)), 1);
        assert_eq!(next.board().occupant(c(4, 0)), Some(Player::Two));
        assert_eq!(next.board().occupied().count(), 2);
        assert_eq!(next.current_player(), Player::Two);

        // The original snapshot is untouched.
        assert_eq!(game_state, GameState::initial());
    }

    #[test]
    fn test_apply_move_rejects_wrong_player() {
        let game_state = GameState::initial();

        assert_eq!(
            game_state.apply_move(Player::Two, c(4, 1)),
            Err(InvalidAction::NotPlayersTurn(Player::Two))
        );
    }

    #[test]
    fn test_apply_move_rejects_illegal_target() {
        let game_state = GameState::initial();

        assert_eq!(
            game_state.apply_move(Player::One, c(4, 6)),
            Err(InvalidAction::IllegalMove(c(4, 6)))
        );
        assert_eq!(
            game_state.apply_move(Player::One, c(3, 7)),
            Err(InvalidAction::IllegalMove(c(3, 7)))
        );
    }

    #[test]
    fn test_apply_move_rejects_occupied_square() {
        let game_state = face_to_face();

        assert_eq!(
            game_state.apply_move(Player::Two, c(4, 4)),
            Err(InvalidAction::IllegalMove(c(4, 4)))
        );

        let jumped = game_state.apply_move(Player::Two, c(4, 5)).unwrap();

        assert_eq!(jumped.pawn(Player::Two).position(), c(4, 5));
        assert_eq!(jumped.pawn(Player::One).position(), c(4, 4));
    }

    #[test]
    fn test_apply_move_rejects_walled_step() {
        let game_state = play(&GameState::initial(), &["d1h", "e8"]);

        assert_eq!(
            game_state.apply_move(Player::One, c(4, 7)),
            Err(InvalidAction::IllegalMove(c(4, 7)))
        );
    }

    fn one_wins() -> GameState {
        walk(
            &GameState::initial(),
            &[
                (3, 8),
                (5, 0),
                (3, 7),
                (5, 1),
                (3, 6),
                (5, 2),
                (3, 5),
                (5, 3),
                (3, 4),
                (5, 4),
                (3, 3),
                (5, 5),
                (3, 2),
                (5, 6),
                (3, 1),
                (5, 7),
                (3, 0),
            ],
        )
    }

    #[test]
    fn test_win_p1() {
        let game_state = one_wins();

        assert_eq!(game_state.winner(), Some(Player::One));
        assert!(game_state.is_terminal());
        assert_eq!(game_state.current_player(), Player::One);
    }

    #[test]
    fn test_win_p2() {
        let cells = [
            (3, 8),
            (5, 0),
            (4, 8),
            (5, 1),
            (3, 8),
            (5, 2),
            (4, 8),
            (5, 3),
            (3, 8),
            (5, 4),
            (4, 8),
            (5, 5),
            (3, 8),
            (5, 6),
            (4, 8),
            (5, 7),
            (3, 8),
        ];

        let game_state = cells.iter().fold(GameState::initial(), |game_state, cell| {
            let next = walk(&game_state, &[*cell]);
            assert_eq!(next.winner(), None);
            next
        });

        assert_eq!(game_state.current_player(), Player::Two);

        let game_state = walk(&game_state, &[(5, 8)]);

        assert_eq!(game_state.winner(), Some(Player::Two));
        assert_eq!(game_state.current_player(), Player::Two);
    }

    #[test]
    fn test_no_transitions_after_win() {
        let game_state = one_wins();

        assert_eq!(
            game_state.apply_move(Player::One, c(3, 1)),
            Err(InvalidAction::GameOver(Player::One))
        );
        assert_eq!(
            game_state.apply_move(Player::Two, c(5, 8)),
            Err(InvalidAction::GameOver(Player::One))
        );
        assert_eq!(
            game_state.apply_wall(Wall::horizontal(1, 1)),
            Err(InvalidAction::GameOver(Player::One))
        );
        assert!(game_state.legal_walls().is_empty());
    }

    #[test]
    fn test_apply_wall_turn_and_wall_count() {
        let game_state = GameState::initial();
        let next = game_state.apply_wall(Wall::horizontal(4, 4)).unwrap();

        assert_eq!(next.walls(), &[Wall::horizontal(4, 4)]);
        assert_eq!(next.pawn(Player::One).walls_remaining(), 9);
        assert_eq!(next.pawn(Player::Two).walls_remaining(), 10);
        assert_eq!(next.current_player(), Player::Two);
        assert_eq!(next.board(), game_state.board());

        let next = next.apply_wall(Wall::vertical(2, 2)).unwrap();

        assert_eq!(next.pawn(Player::One).walls_remaining(), 9);
        assert_eq!(next.pawn(Player::Two).walls_remaining(), 9);
        assert_eq!(next.current_player(), Player::One);
        assert_eq!(next.walls(), &[Wall::horizontal(4, 4), Wall::vertical(2, 2)]);
    }

    #[test]
    fn test_is_legal_wall_overlap() {
        let game_state = GameState::initial()
            .apply_wall(Wall::horizontal(3, 3))
            .unwrap();

        assert!(!game_state.is_legal_wall(&Wall::horizontal(4, 3)));
        assert!(!game_state.is_legal_wall(&Wall::horizontal(2, 3)));
        assert!(!game_state.is_legal_wall(&Wall::horizontal(3, 3)));
        assert!(!game_state.is_legal_wall(&Wall::vertical(3, 3)));

        assert!(game_state.is_legal_wall(&Wall::horizontal(5, 3)));
        assert!(game_state.is_legal_wall(&Wall::horizontal(3, 4)));
        assert!(game_state.is_legal_wall(&Wall::vertical(3, 4)));
        assert!(game_state.is_legal_wall(&Wall::vertical(4, 3)));

        assert_eq!(
            game_state.apply_wall(Wall::horizontal(4, 3)),
            Err(InvalidAction::IllegalWall(Wall::horizontal(4, 3)))
        );
    }

    #[test]
    fn test_is_legal_wall_vertical_overlap() {
        let game_state = GameState::initial()
            .apply_wall(Wall::vertical(5, 5))
            .unwrap();

        assert!(!game_state.is_legal_wall(&Wall::vertical(5, 4)));
        assert!(!game_state.is_legal_wall(&Wall::vertical(5, 6)));
        assert!(!game_state.is_legal_wall(&Wall::horizontal(5, 5)));
        assert!(game_state.is_legal_wall(&Wall::vertical(5, 7)));
        assert!(game_state.is_legal_wall(&Wall::vertical(6, 5)));
    }

    #[test]
    fn test_is_legal_wall_out_of_range() {
        let game_state = GameState::initial();

        assert!(!game_state.is_legal_wall(&Wall::horizontal(0, 3)));
        assert!(!game_state.is_legal_wall(&Wall::vertical(9, 1)));
        assert!(!game_state.is_legal_wall(&Wall::horizontal(3, 0)));
        assert!(!game_state.is_legal_wall(&Wall::vertical(4, 9)));
        assert!(game_state.is_legal_wall(&Wall::horizontal(1, 1)));
        assert!(game_state.is_legal_wall(&Wall::vertical(8, 8)));
    }

    #[test]
    fn test_is_legal_wall_path_preservation_p1() {
        assert!(GameState::initial().is_legal_wall(&Wall::horizontal(6, 7)));

        // Box in columns 3 to 6 of the two bottom rows, with the board edge as the fourth side.
        let game_state = GameState::initial()
            .apply_wall(Wall::vertical(3, 8))
            .unwrap()
            .apply_wall(Wall::vertical(7, 8))
            .unwrap()
            .apply_wall(Wall::horizontal(4, 7))
            .unwrap();

        assert!(game_state.has_path_to_goal(Player::One));
        assert!(!game_state.is_legal_wall(&Wall::horizontal(6, 7)));
        assert!(!game_state.is_legal_wall(&Wall::horizontal(5, 7)));
        assert!(game_state.is_legal_wall(&Wall::horizontal(6, 6)));
        assert_eq!(
            game_state.apply_wall(Wall::horizontal(6, 7)),
            Err(InvalidAction::IllegalWall(Wall::horizontal(6, 7)))
        );
    }

    #[test]
    fn test_is_legal_wall_path_preservation_p2() {
        let game_state = GameState::initial()
            .apply_wall(Wall::vertical(4, 1))
            .unwrap()
            .apply_wall(Wall::vertical(5, 1))
            .unwrap();

        assert!(!game_state.is_legal_wall(&Wall::horizontal(4, 2)));
        assert!(!game_state.is_legal_wall(&Wall::horizontal(5, 2)));
        assert!(game_state.is_legal_wall(&Wall::horizontal(4, 3)));
    }

    #[test]
    fn test_is_legal_wall_ignores_pawns_as_obstacles() {
        // Only the gap at column 4 stays open, and Two's pawn sits in it.
        let game_state = walk(
            &GameState::initial(),
            &[(4, 7), (4, 1), (4, 6), (4, 2), (4, 5), (4, 3)],
        );
        let game_state = play(&game_state, &["a5h", "c5h", "f5h", "h5h"]);

        assert_eq!(game_state.pawn(Player::Two).position(), c(4, 3));
        assert!(game_state.has_path_to_goal(Player::One));
        assert!(game_state.has_path_to_goal(Player::Two));
    }

    #[test]
    fn test_no_walls_remaining() {
        let walls = [
            "a5h", "c5h", "e5h", "g5h", "a7h", "c7h", "e7h", "g7h", "a3h", "c3h",
        ];

        let game_state = walls
            .iter()
            .zip([(3, 0), (4, 0)].iter().cycle())
            .fold(GameState::initial(), |game_state, (wall, cell)| {
                let game_state = play(&game_state, &[*wall]);
                walk(&game_state, &[*cell])
            });

        assert_eq!(game_state.pawn(Player::One).walls_remaining(), 0);
        assert_eq!(game_state.pawn(Player::Two).walls_remaining(), 10);
        assert_eq!(game_state.walls().len(), 10);
        assert_eq!(game_state.current_player(), Player::One);
        assert!(game_state.legal_walls().is_empty());
        assert!(game_state
            .valid_actions()
            .iter()
            .all(|a| matches!(a, Action::MovePawn(_))));
        assert_eq!(
            game_state.apply_wall(Wall::horizontal(1, 1)),
            Err(InvalidAction::NoWallsRemaining(Player::One))
        );
    }

    #[test]
    fn test_legal_walls_initial() {
        let legal_walls = GameState::initial().legal_walls();

        assert_eq!(legal_walls.len(), 128);
        assert_eq!(legal_walls[0], Wall::horizontal(1, 1));
        assert_eq!(legal_walls[1], Wall::horizontal(2, 1));
        assert_eq!(legal_walls[8], Wall::horizontal(1, 2));
        assert_eq!(legal_walls[64], Wall::vertical(1, 1));
        assert_eq!(legal_walls[127], Wall::vertical(8, 8));
    }

    #[test]
    fn test_legal_walls_excludes_conflicts() {
        let game_state = GameState::initial()
            .apply_wall(Wall::horizontal(3, 3))
            .unwrap();
        let legal_walls = game_state.legal_walls();
        let excluded = [
            Wall::horizontal(2, 3),
            Wall::horizontal(3, 3),
            Wall::horizontal(4, 3),
            Wall::vertical(3, 3),
        ];

        assert_eq!(legal_walls.len(), 128 - excluded.len());
        assert!(!legal_walls.iter().any(|w| excluded.contains(w)));
    }

    #[test]
    fn test_legal_walls_excludes_sealing_walls() {
        let game_state = GameState::initial()
            .apply_wall(Wall::vertical(4, 1))
            .unwrap()
            .apply_wall(Wall::vertical(5, 1))
            .unwrap();
        let legal_walls = game_state.legal_walls();

        assert!(!legal_walls.contains(&Wall::horizontal(4, 2)));
        assert!(!legal_walls.contains(&Wall::horizontal(5, 2)));
        assert!(legal_walls.contains(&Wall::horizontal(4, 3)));
    }

    #[test]
    fn test_distance_to_goal() {
        let game_state = GameState::initial();

        assert_eq!(game_state.distance_to_goal(Player::One), Some(8));
        assert_eq!(game_state.distance_to_goal(Player::Two), Some(8));

        // Both pawns use column 4 across rows 7 and 8, so both detour.
        let game_state = play(&game_state, &["d1h"]);

        assert_eq!(game_state.distance_to_goal(Player::One), Some(9));
        assert_eq!(game_state.distance_to_goal(Player::Two), Some(9));

        // Only columns 0 and 1 are cut, away from either pawn.
        let game_state = play(&GameState::initial(), &["a1h"]);

        assert_eq!(game_state.distance_to_goal(Player::One), Some(8));
        assert_eq!(game_state.distance_to_goal(Player::Two), Some(8));
    }
}

#[cfg(test)]
mod properties {
    use super::super::{Coordinate, GameState, Orientation, Player, Wall, NUM_WALLS_PER_PLAYER};
    use engine::game_state::GameState as GameStateTrait;
    use proptest::arbitrary::any;
    use proptest::collection::vec;
    use proptest::sample::Selector;
    use test_strategy::proptest;

    fn every_wall() -> impl Iterator<Item = Wall> {
        Orientation::ALL.into_iter().flat_map(|orientation| {
            (1..=8u8).flat_map(move |y| (1..=8u8).map(move |x| Wall::new(x, y, orientation)))
        })
    }

    fn manhattan(a: Coordinate, b: Coordinate) -> usize {
        a.x().abs_diff(b.x()) + a.y().abs_diff(b.y())
    }

    fn assert_invariants(game_state: &GameState) {
        let [one, two] = game_state.pawns();

        assert_ne!(one.position(), two.position());
        assert_eq!(game_state.board().occupied().count(), 2);
        for pawn in game_state.pawns() {
            assert_eq!(
                game_state.board().occupant(pawn.position()),
                Some(pawn.player())
            );
        }

        let walls_used = 2 * NUM_WALLS_PER_PLAYER as usize
            - one.walls_remaining() as usize
            - two.walls_remaining() as usize;
        assert_eq!(walls_used, game_state.walls().len());

        for player in Player::ALL {
            assert!(game_state.has_path_to_goal(player));

            let pawn = game_state.pawn(player);
            for pawn_move in game_state.legal_moves(player) {
                assert!(game_state.board().is_empty(pawn_move.target));
                assert!((1..=2).contains(&manhattan(pawn.position(), pawn_move.target)));
            }
        }
    }

    #[proptest(cases = 64)]
    fn random_play_preserves_invariants(
        #[strategy(vec(any::<(bool, Selector)>(), 1..150))] turns: Vec<(bool, Selector)>,
    ) {
        let mut game_state = GameState::initial();

        for (place_wall, selector) in turns {
            if game_state.is_terminal() {
                break;
            }

            let player = game_state.current_player();
            let walls_remaining = game_state.pawn(player).walls_remaining();

            let next = if place_wall {
                let wall = selector.select(every_wall());

                match game_state.apply_wall(wall) {
                    Ok(next) => {
                        assert!(game_state.is_legal_wall(&wall));
                        assert_eq!(next.pawn(player).walls_remaining(), walls_remaining - 1);
                        assert_eq!(
                            next.pawn(player.opponent()).walls_remaining(),
                            game_state.pawn(player.opponent()).walls_remaining()
                        );
                        assert_eq!(next.current_player(), player.opponent());
                        next
                    }
                    Err(_) => {
                        assert!(walls_remaining == 0 || !game_state.is_legal_wall(&wall));
                        continue;
                    }
                }
            } else {
                let moves = game_state.legal_moves(player);
                if moves.is_empty() {
                    continue;
                }

                let pawn_move = selector.select(moves);
                let next = game_state.apply_move(player, pawn_move.target).unwrap();

                assert_eq!(next.pawn(player).position(), pawn_move.target);
                assert_eq!(next.walls(), game_state.walls());
                if pawn_move.target.y() == player.goal_row() {
                    assert_eq!(next.winner(), Some(player));
                    assert_eq!(next.current_player(), player);
                } else {
                    assert_eq!(next.winner(), None);
                    assert_eq!(next.current_player(), player.opponent());
                }
                next
            };

            assert_invariants(&next);
            game_state = next;
        }
    }
}
