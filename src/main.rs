use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use terminal_chess::chess_errors::ChessErrors;
use terminal_chess::terminal::session_config::SessionConfig;
use terminal_chess::terminal::terminal_session::TerminalSession;
use terminal_chess::utils::render_game_state::RenderStyle;

/// Two-player chess on one terminal. The game ends when a king is captured.
#[derive(Parser, Debug)]
#[command(name = "terminal_chess", version, about)]
struct Args {
    /// Render without ANSI colors.
    #[arg(long)]
    plain: bool,

    /// Do not clear the screen between turns.
    #[arg(long)]
    no_clear: bool,

    /// Do not wait for Enter after an error message.
    #[arg(long)]
    no_pause: bool,

    /// Log filter for stderr output; RUST_LOG takes precedence when set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), ChessErrors> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig {
        style: if args.plain {
            RenderStyle::Plain
        } else {
            RenderStyle::Ansi
        },
        clear_screen: !args.no_clear,
        pause_after_error: !args.no_pause,
    };

    let stdin = io::stdin();
    let mut session = TerminalSession::new(stdin.lock(), io::stdout(), config);
    session.run()?;
    Ok(())
}
