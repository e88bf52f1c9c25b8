//! Quoridor AI CLI
//!
//! Plays an AI-vs-AI match on the standard board and prints the lattice
//! after every turn.
//!
//! Usage: `quoridor-cli [difficulty-one] [difficulty-two] [seed]`
//! where difficulties are `easy`, `medium` or `hard`.

use quoridor::rules::{check_winner, shortest_path_length};
use quoridor::{AIEngine, Board, Difficulty, EngineError, PlayerId, Pos};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Stop a match that runs this long
const MAX_TURNS: usize = 300;

fn parse_difficulty(arg: Option<&str>) -> Difficulty {
    match arg.map(str::to_ascii_lowercase).as_deref() {
        Some("easy") => Difficulty::Easy,
        Some("hard") => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::with_capacity(size * (size + 1));
    for row in 0..size {
        for col in 0..size {
            let pos = Pos::new(row as u8, col as u8);
            let blocked = !board.grid().is_empty(pos);
            let ch = if pos.is_cell() {
                match board.occupant(pos) {
                    Some(PlayerId::One) => '1',
                    Some(PlayerId::Two) => '2',
                    None => '.',
                }
            } else if !blocked {
                ' '
            } else if pos.is_connector() {
                '+'
            } else if row % 2 == 1 {
                '-'
            } else {
                '|'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let first = parse_difficulty(args.first().map(String::as_str));
    let second = parse_difficulty(args.get(1).map(String::as_str));
    let seed = args.get(2).and_then(|s| s.parse::<u64>().ok());

    let engine_for = |difficulty: Difficulty, offset: u64| match seed {
        Some(seed) => AIEngine::with_seed(difficulty.config(), seed.wrapping_add(offset)),
        None => AIEngine::with_difficulty(difficulty),
    };
    let mut engines = [engine_for(first, 0), engine_for(second, 1)];

    println!("===========================================");
    println!("   Quoridor AI match: {} vs {}", first.label(), second.label());
    println!("===========================================\n");

    let mut board = Board::new();
    let mut turn = PlayerId::One;
    println!("{}", render(&board));

    for ply in 1..=MAX_TURNS {
        let engine = &mut engines[turn.index()];
        match engine.play_turn(&mut board, turn) {
            Ok(result) => {
                println!(
                    "--- Turn {ply}: {turn:?} plays {:?} ({:?}, score {:.2}, {} nodes, {} cutoffs, {}ms)",
                    result.best_move,
                    result.search_type,
                    result.score,
                    result.nodes,
                    result.stats.cutoffs,
                    result.time_ms
                );
            }
            Err(EngineError::NoLegalMove) => {
                error!(?turn, "no legal move");
                return;
            }
            Err(e) => {
                error!(?turn, error = %e, "move rejected");
                return;
            }
        }

        println!("{}", render(&board));
        println!(
            "Paths: one {:?}, two {:?} | Walls: one {}, two {}\n",
            shortest_path_length(&board, PlayerId::One),
            shortest_path_length(&board, PlayerId::Two),
            board.walls_left(PlayerId::One),
            board.walls_left(PlayerId::Two)
        );

        if let Some(winner) = check_winner(&board) {
            info!(?winner, ply, "match finished");
            println!("===========================================");
            println!("          {winner:?} wins after {ply} turns");
            println!("===========================================");
            return;
        }
        turn = turn.opponent();
    }

    println!("No winner after {MAX_TURNS} turns");
}
