use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicBool};

use kalaha::{visualize_board, Board};
use kalaha_agents::Agent;
use tracing::{debug, info, trace};

/// How many times in a row one side may submit a rejected move before the
/// round is scored against it.
pub const MAX_ILLEGAL_ATTEMPTS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Draw,
    /// A side exhausted its illegal-move attempts and loses the round.
    ForfeitByPlayer { player_idx: usize },
    /// The match was interrupted before the game finished.
    Aborted,
}

/// Plays a single game to the end.
///
/// Returns an error only when an agent fails outright (e.g. its input
/// closed), not when it submits an illegal move.
pub fn play_game<'a>(
    board: &mut Board,
    agent_one: &'a mut dyn Agent,
    agent_two: &'a mut dyn Agent,
    stop: &AtomicBool,
    show_board: bool,
) -> anyhow::Result<GameResult> {
    let agents = [agent_one, agent_two];

    while !board.is_terminal() {
        if stop.load(atomic::Ordering::SeqCst) {
            return Ok(GameResult::Aborted);
        }
        if show_board {
            eprintln!("{}", visualize_board(board));
        }
        let player_idx = board.current_player().index();
        let mut attempts = 0;
        loop {
            let pit = agents[player_idx].choose_move(board)?;
            match board.apply_move(pit) {
                Ok(outcome) => {
                    trace!(
                        player_idx,
                        pit,
                        landing_pit = outcome.landing_pit,
                        extra_turn = outcome.extra_turn,
                        captured = outcome.captured,
                        "applied move"
                    );
                    break;
                }
                Err(err) => {
                    info!(player_idx, pit, %err, "rejected move");
                    attempts += 1;
                    if attempts >= MAX_ILLEGAL_ATTEMPTS {
                        return Ok(GameResult::ForfeitByPlayer { player_idx });
                    }
                }
            }
        }
    }
    if show_board {
        eprintln!("{}", visualize_board(board));
    }

    let [score_one, score_two] = board.scores();
    debug!(score_one, score_two, "game over");
    let result = match score_one.cmp(&score_two) {
        Ordering::Less => GameResult::WonByPlayer { player_idx: 1 },
        Ordering::Equal => GameResult::Draw,
        Ordering::Greater => GameResult::WonByPlayer { player_idx: 0 },
    };
    Ok(result)
}
