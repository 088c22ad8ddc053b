use anyhow::Result;
use engine::{GameEngine, GameState, ValidActions};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Counts the action sequences of length `depth` from the initial position.
pub fn run_perft<S, A, E>(depth: usize, engine: &E) -> Result<u64>
where
    S: GameState + Send + Sync,
    A: Send + Sync,
    E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A> + Sync,
    E::Error: std::error::Error + Send + Sync + 'static,
{
    let game_state = S::initial();
    count_moves_par(&game_state, engine, depth)
}

/// Fans every ply above the last two out over the rayon pool.
pub fn count_moves_par<S, A, E>(game_state: &S, engine: &E, depth: usize) -> Result<u64>
where
    S: GameState + Send + Sync,
    A: Send + Sync,
    E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A> + Sync,
    E::Error: std::error::Error + Send + Sync + 'static,
{
    if depth <= 2 {
        return count_moves(game_state, engine, depth);
    }

    let counts = engine
        .valid_actions(game_state)
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|action| {
            let next_game_state = engine.take_action(game_state, &action)?;
            count_moves_par(&next_game_state, engine, depth - 1)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(counts.into_iter().sum())
}

pub fn count_moves<S, A, E>(game_state: &S, engine: &E, depth: usize) -> Result<u64>
where
    S: GameState,
    E: GameEngine<State = S, Action = A> + ValidActions<State = S, Action = A>,
    E::Error: std::error::Error + Send + Sync + 'static,
{
    if depth == 0 {
        return Ok(1);
    }

    if depth == 1 {
        return Ok(engine.valid_actions(game_state).count() as u64);
    }

    let mut count = 0;
    for action in engine.valid_actions(game_state) {
        let next_game_state = engine.take_action(game_state, &action)?;
        count += count_moves(&next_game_state, engine, depth - 1)?;
    }

    Ok(count)
}
