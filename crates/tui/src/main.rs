//! Entry point for the Tickbox TUI application.

use clap::Parser;
use tickbox_core::{Filter, resolve_filter};
use tickbox_tui::{App, TuiResult};

/// Tickbox - a single-session task list in the terminal
#[derive(Parser)]
#[command(name = "tbx-tui", version = "0.1.0")]
struct Args {
    /// Initial filter: all, active or completed (can also be set via TBX_FILTER env var)
    #[arg(long)]
    filter: Option<Filter>,
}

fn main() -> TuiResult<()> {
    let args = Args::parse();
    let mut app = App::new(resolve_filter(args.filter)?);
    app.run()
}
