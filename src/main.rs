use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use tickbox::{OutputFormat, Session, ShellError, ShellResult};
use tickbox_core::{Filter, TaskList, resolve_filter};

/// Tickbox - a single-session task list
#[derive(Parser)]
#[command(name = "tbx")]
#[command(version = "0.1.0")]
#[command(about = "A single-session task list", long_about = None)]
struct Args {
    /// Initial filter: all, active or completed (can also be set via TBX_FILTER env var)
    #[arg(long)]
    filter: Option<Filter>,

    /// Print each view as a JSON line instead of a table
    #[arg(long)]
    json: bool,

    /// Do not print the view after each command
    #[arg(short, long)]
    quiet: bool,

    /// Read session commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Logs go to stderr so stdout only carries views. Defaults to `warn`;
/// `RUST_LOG=tickbox_core=debug` shows every applied command.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> ShellResult<()> {
    let args = Args::parse();
    run_with_args(&args)
}

/// Run a session with the given arguments
fn run_with_args(args: &Args) -> ShellResult<()> {
    // Priority: CLI arg > env var > default
    let filter = resolve_filter(args.filter)?;
    let list = TaskList::with_filter(filter);

    let mut format = OutputFormat {
        json: args.json,
        quiet: args.quiet,
        prompt: false,
    };

    match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| ShellError::Script {
                path: path.clone(),
                source,
            })?;
            Session::new(
                list,
                BufReader::new(file),
                io::stdout().lock(),
                io::stderr().lock(),
                format,
            )
            .run()
        }
        None => {
            let stdin = io::stdin();
            format.prompt = stdin.is_terminal() && !args.json;
            if format.prompt {
                println!("Tickbox - type 'help' for commands, 'quit' to leave.");
            }
            Session::new(
                list,
                stdin.lock(),
                io::stdout().lock(),
                io::stderr().lock(),
                format,
            )
            .run()
        }
    }
}
