//! Test infrastructure for integration tests
//!
//! Runs whole sessions over in-memory input and captures what they print.
//! Each test gets its own task list so no state is shared.

use std::io::Cursor;
use tickbox::{OutputFormat, Session};
use tickbox_core::{Filter, TaskList};

/// Everything a finished session left behind
pub struct SessionRun {
    pub list: TaskList,
    pub stdout: String,
    pub stderr: String,
}

impl SessionRun {
    /// Texts of every task in list order, ignoring the filter.
    pub fn texts(&self) -> Vec<&str> {
        self.list.tasks().iter().map(|t| t.text()).collect()
    }

    /// Texts of the tasks visible under the session's final filter.
    pub fn visible_texts(&self) -> Vec<&str> {
        self.list.visible_iter().map(|t| t.text()).collect()
    }

    /// Parse every stdout line as JSON.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

/// Run a session with the given format and starting filter.
pub fn run_session_with(script: &str, format: OutputFormat, filter: Filter) -> SessionRun {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let list = {
        let mut session = Session::new(
            TaskList::with_filter(filter),
            Cursor::new(script.as_bytes().to_vec()),
            &mut stdout,
            &mut stderr,
            format,
        );
        session.run().unwrap();
        session.into_list()
    };

    SessionRun {
        list,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

/// Run a session with table output.
pub fn run_session(script: &str) -> SessionRun {
    run_session_with(script, OutputFormat::default(), Filter::All)
}

/// Run a session that only prints command outcomes.
pub fn run_quiet(script: &str) -> SessionRun {
    run_session_with(
        script,
        OutputFormat {
            quiet: true,
            ..OutputFormat::default()
        },
        Filter::All,
    )
}

/// Run a session with JSON output.
pub fn run_json(script: &str) -> SessionRun {
    run_session_with(
        script,
        OutputFormat {
            json: true,
            ..OutputFormat::default()
        },
        Filter::All,
    )
}

/// Script that builds A (active), B (completed), C (active).
pub const ABC: &str = "add A\nadd B\nadd C\ntoggle 2\n";
