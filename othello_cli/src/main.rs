use std::path::PathBuf;

use clap::Parser;
use othello::PlayerId;
use othello_cli::{run, Console, GameConfig};
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Two-player Othello in the terminal
#[derive(Parser)]
struct Args {
    /// Number of rows, even and between 4 and 26
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns, even and between 4 and 26
    #[arg(long)]
    cols: Option<usize>,

    /// Name of the player with the black discs (X)
    #[arg(long)]
    black_name: Option<String>,

    /// Name of the player with the white discs (O)
    #[arg(long)]
    white_name: Option<String>,

    /// Which side moves first, "black" or "white"
    #[arg(long)]
    first: Option<PlayerId>,

    /// Path to a JSON config file with any of the settings above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Don't ask for settings; use defaults for everything not configured
    #[arg(long, default_value_t = false)]
    no_prompt: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let file_config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    // Flags override the config file
    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        black_name: args.black_name,
        white_name: args.white_name,
        first: args.first,
    }
    .or(file_config);
    debug!(?config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run(&mut console, &config, !args.no_prompt)?;

    Ok(())
}

// Logs go to stderr, so they don't get mixed into the board.
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
