use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use judge::{play_game, AgentSpec, GameResult, MAX_ILLEGAL_ATTEMPTS};
use kalaha::Board;
use kalaha_agents::Agent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// The agent playing the first side: human, random, greedy or minimax[:depth]
    player_one: AgentSpec,

    /// The agent playing the second side
    player_two: AgentSpec,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// Number of cups per player
    #[arg(long, default_value_t = 6)]
    cups: usize,

    /// Number of stones each cup starts with
    #[arg(long, default_value_t = 6)]
    stones: u32,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Disable alpha-beta pruning in minimax agents
    #[arg(long, default_value_t = false)]
    no_pruning: bool,

    /// Print the board before every turn (always on when a human plays)
    #[arg(long, default_value_t = false)]
    show_board: bool,

    /// Stop the match as soon as one side forfeits a game
    #[arg(short, long, default_value_t = false)]
    stop_on_forfeit: bool,

    /// Print the final tallies as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default, Serialize)]
struct MatchScore {
    wins: [usize; 2],
    forfeits: [usize; 2],
    draws: usize,
}

fn play_matchup(
    args: &Args,
    agent_one: &mut dyn Agent,
    agent_two: &mut dyn Agent,
    stop: &AtomicBool,
    show_board: bool,
) -> anyhow::Result<MatchScore> {
    let player_names = [args.player_one.to_string(), args.player_two.to_string()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..args.num_games {
        if stop.load(Ordering::SeqCst) {
            info!(game_idx, "match interrupted, reporting partial results");
            break;
        }
        let mut board = Board::new(args.cups, args.stones)?;
        match play_game(&mut board, agent_one, agent_two, stop, show_board)? {
            GameResult::WonByPlayer { player_idx } => {
                debug!(winner = %player_names[player_idx], game_idx);
                match_score.wins[player_idx] += 1;
            }
            GameResult::Draw => {
                debug!(game_idx, "Draw");
                match_score.draws += 1;
            }
            GameResult::ForfeitByPlayer { player_idx } => {
                info!(
                    player = %player_names[player_idx],
                    game_idx,
                    "Forfeit after {} rejected moves in a row",
                    MAX_ILLEGAL_ATTEMPTS
                );
                match_score.forfeits[player_idx] += 1;
                match_score.wins[1 - player_idx] += 1;
                if args.stop_on_forfeit {
                    break;
                }
            }
            GameResult::Aborted => {
                info!(game_idx, "game interrupted, reporting partial results");
                break;
            }
        }
    }

    let paren_1 = if match_score.forfeits[1] > 0 {
        format!(" ({} through forfeits by player 2)", match_score.forfeits[1])
    } else {
        String::new()
    };
    let paren_2 = if match_score.forfeits[0] > 0 {
        format!(" ({} through forfeits by player 1)", match_score.forfeits[0])
    } else {
        String::new()
    };
    eprintln!(
        "End result:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} draws",
        match_score.wins[0],
        player_names[0],
        paren_1,
        match_score.wins[1],
        player_names[1],
        paren_2,
        match_score.draws
    );

    Ok(match_score)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))?;
    }

    let show_board = args.show_board
        || args.player_one == AgentSpec::Human
        || args.player_two == AgentSpec::Human;

    let mut agent_one = args.player_one.build(!args.no_pruning, &mut rng);
    let mut agent_two = args.player_two.build(!args.no_pruning, &mut rng);

    let match_score = play_matchup(
        &args,
        agent_one.as_mut(),
        agent_two.as_mut(),
        &stop,
        show_board,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&match_score)?);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
