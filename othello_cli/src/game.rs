use std::io::{BufRead, Write};

use othello::{
    apply_move, classify_outcome, score, Board, MoveOutcome, Outcome, Player, PlayerId,
};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::console::{Console, QUIT};

/// A game that is being played.
pub struct Game {
    pub board: Board,
    /// Black first, then white.
    pub players: [Player; 2],
    pub current_player_idx: usize,
}

/// How a game ended.
#[derive(Debug)]
pub struct GameReport {
    pub board: Board,
    pub players: [Player; 2],
    /// Indexed like `players`.
    pub scores: [usize; 2],
    pub outcome: Outcome,
}

/// Determines the players, who starts, and the board size.
///
/// Settings that are not in `config` are asked for if `prompt` is set, and
/// take their defaults otherwise. Fails if the board size is invalid.
pub fn setup_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    prompt: bool,
) -> anyhow::Result<Game> {
    let mut new_player = |id: PlayerId| match config.name_for(id) {
        Some(name) => Ok(Player::new(id, name)),
        None if prompt => console.player_name(id),
        None => Ok(Player::with_default_name(id)),
    };
    let players = [new_player(PlayerId::Black)?, new_player(PlayerId::White)?];

    let current_player_idx = match config.first {
        Some(PlayerId::Black) => 0,
        Some(PlayerId::White) => 1,
        None if prompt => console.first_player(&players)?,
        None => 0,
    };

    let mut size = |configured: Option<usize>, direction: &str| match configured {
        Some(size) => Ok(size),
        None if prompt => console.board_size(direction),
        None => Ok(GameConfig::DEFAULT_SIZE),
    };
    let rows = size(config.rows, "rows")?;
    let cols = size(config.cols, "columns")?;

    let board = Board::new(rows, cols);
    if board.is_degenerate() {
        anyhow::bail!(
            "Cannot play on a {}x{} board, rows and columns must be even and between {} and {}",
            rows,
            cols,
            othello::MIN_BOARD_SIZE,
            othello::MAX_BOARD_SIZE
        );
    }

    Ok(Game {
        board,
        players,
        current_player_idx,
    })
}

/// Plays until someone types `quit` or the input ends.
///
/// A game never ends by itself, even if neither player can place a disc.
/// Returns an error only on I/O failure, not when an illegal move is played.
pub fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut game: Game,
) -> anyhow::Result<GameReport> {
    let (rows, cols) = game.board.dimensions();
    info!(
        rows,
        cols,
        black = game.players[0].name(),
        white = game.players[1].name(),
        first = game.players[game.current_player_idx].name(),
        "Starting game"
    );

    loop {
        let player = &game.players[game.current_player_idx];
        write!(console, "{}", game.board)?;
        write_scores(console, "Score", &game.board, &game.players)?;

        if !game.board.has_legal_move(player.id()) {
            info!(player = player.name(), "No legal placement left");
            writeln!(
                console,
                "{} has no cell to play on and can only skip.",
                player.name()
            )?;
        }

        let Some(token) = console.next_move(player)? else {
            info!("End of input");
            break;
        };
        if token == QUIT {
            break;
        }

        match apply_move(&mut game.board, player, &token) {
            Ok(outcome) => {
                match outcome {
                    MoveOutcome::Skipped => debug!(player = player.name(), "Skipped"),
                    MoveOutcome::Placed {
                        coordinate,
                        flipped,
                    } => debug!(player = player.name(), %coordinate, flipped, "Placed disc"),
                }
                game.current_player_idx = 1 - game.current_player_idx;
            }
            Err(err) => {
                debug!(player = player.name(), %err, "Illegal move");
                writeln!(console, "{}.", err)?;
                if !console.acknowledge_rejection()? {
                    info!("End of input");
                    break;
                }
            }
        }
    }

    let scores = [
        score(&game.board, game.players[0].id()),
        score(&game.board, game.players[1].id()),
    ];
    let outcome = classify_outcome(&game.board, game.players[0].id(), game.players[1].id());
    info!(?outcome, black = scores[0], white = scores[1], "Game over");

    Ok(GameReport {
        board: game.board,
        players: game.players,
        scores,
        outcome,
    })
}

/// Sets up and plays one game, then announces the winner.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    prompt: bool,
) -> anyhow::Result<GameReport> {
    if prompt {
        console.welcome()?;
    }
    let game = setup_game(console, config, prompt)?;
    let report = play_game(console, game)?;

    write_scores(console, "Final Scores", &report.board, &report.players)?;
    match report.outcome {
        Outcome::Win(id) => {
            let winner = report
                .players
                .iter()
                .find(|p| p.id() == id)
                .map_or(id.default_name(), |p| p.name());
            writeln!(console, "Congratulations {} has won", winner)?;
        }
        Outcome::Draw => writeln!(console, "The game is a draw... Rematch?")?,
    }
    writeln!(console)?;
    writeln!(console, "Thank you for playing. Game terminated")?;
    Ok(report)
}

fn write_scores<W: Write>(
    out: &mut W,
    label: &str,
    board: &Board,
    players: &[Player; 2],
) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}: {}: {}, {}: {}",
        label,
        players[0].name(),
        score(board, players[0].id()),
        players[1].name(),
        score(board, players[1].id())
    )?;
    Ok(())
}
