//! Line-oriented task list session
//!
//! Reads one command per line, applies it to the session's task list and
//! prints the updated view. Bad lines are reported on the error stream and
//! the session carries on; I/O failures end it.

use std::io::{BufRead, Write};

use tickbox_core::TaskList;
use tracing::debug;

use crate::commands::{ParsedLine, Prompt, Reply, SessionLine};
use crate::error::ShellResult;
use crate::output::{self, OutputFormat};

/// A running `tbx` session
pub struct Session<R, W, E> {
    list: TaskList,
    input: R,
    output: W,
    errors: E,
    format: OutputFormat,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(list: TaskList, input: R, output: W, errors: E, format: OutputFormat) -> Self {
        Self {
            list,
            input,
            output,
            errors,
            format,
        }
    }

    /// The session's task list.
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// End the session and hand back its task list.
    pub fn into_list(self) -> TaskList {
        self.list
    }

    /// Process lines until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` only for fatal errors (I/O, encoding); usage
    /// errors are written to the error stream and skipped.
    pub fn run(&mut self) -> ShellResult<()> {
        loop {
            if self.format.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            let Some(line) = read_line(&mut self.input)? else {
                break;
            };

            match self.run_line(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) if !err.is_fatal() => {
                    writeln!(self.errors, "error: {}", err.full_message())?;
                }
                Err(err) => return Err(err),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Process a single line. Returns `false` when the session should end.
    pub fn run_line(&mut self, line: &str) -> ShellResult<bool> {
        let command = match SessionLine::parse_line(line)? {
            ParsedLine::Blank => return Ok(true),
            ParsedLine::Help(text) => {
                writeln!(self.output, "{}", text.trim_end())?;
                return Ok(true);
            }
            ParsedLine::Command(command) => command,
        };
        debug!(?command, "running session command");

        let mut prompt = LinePrompt {
            input: &mut self.input,
            output: &mut self.output,
            echo: !self.format.json,
        };
        let reply = command.execute(&mut self.list, &mut prompt, self.format)?;
        self.print_reply(reply)
    }

    fn print_reply(&mut self, reply: Reply) -> ShellResult<bool> {
        match reply {
            Reply::Applied { outcome, view } => {
                if !self.format.json {
                    writeln!(self.output, "{}", output::describe_outcome(&outcome))?;
                }
                if let Some(view) = view {
                    writeln!(self.output, "{}", view)?;
                }
            }
            Reply::Output(text) => writeln!(self.output, "{}", text)?,
            Reply::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// Prompt that reads the answer from the session's own input
struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    /// Whether to print the question
    echo: bool,
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<'_, R, W> {
    fn ask(&mut self, question: &str, seed: &str) -> ShellResult<Option<String>> {
        if self.echo {
            write!(
                self.output,
                "{} (current: {}, blank to cancel): ",
                question, seed
            )?;
            self.output.flush()?;
        }
        read_line(self.input)
    }
}

/// Read one line without its terminator; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> ShellResult<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}
