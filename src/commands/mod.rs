//! Session commands for Tickbox
//!
//! Each line typed into a `tbx` session is parsed into one [`Command`],
//! which forwards exactly one call into the task list and reports back.

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod toggle;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use filter::FilterCommand;
pub use toggle::ToggleCommand;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tickbox_core::{Command as ListCommand, Outcome, TaskList, TaskListView};

use crate::error::ShellResult;
use crate::output::{self, OutputFormat};

/// One line of session input
#[derive(Debug, Parser)]
#[command(name = "tbx", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Command,
}

/// Result of parsing a line of session input
#[derive(Debug)]
pub enum ParsedLine {
    Command(Command),
    /// Help text requested with `help` or `-h`
    Help(String),
    /// Blank line or `#` comment
    Blank,
}

impl SessionLine {
    /// Parse one input line.
    ///
    /// `add` and `edit` take the rest of the line as task text exactly as
    /// typed; the task list trims its ends. Every other command goes
    /// through clap.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Usage` for unknown commands or bad arguments, and
    /// `ShellError::List` for an `edit` id that is not a number.
    pub fn parse_line(line: &str) -> ShellResult<ParsedLine> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(ParsedLine::Blank);
        }

        let (word, rest) = split_word(line);
        let command = match word {
            "add" => Command::Add(AddCommand::from_rest(rest)),
            "edit" => Command::Edit(EditCommand::from_rest(rest)?),
            _ => match Self::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => parsed.command,
                Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                    return Ok(ParsedLine::Help(err.render().to_string()));
                }
                Err(err) => return Err(err.into()),
            },
        };
        Ok(ParsedLine::Command(command))
    }
}

/// Split off the first word; the remainder keeps its inner whitespace.
pub(crate) fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    }
}

/// Available session commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task to the end of the list
    Add(AddCommand),
    /// Mark a task completed, or reopen it
    #[command(alias = "done")]
    Toggle(ToggleCommand),
    /// Change a task's text (prompts for it when omitted)
    Edit(EditCommand),
    /// Delete a task
    #[command(alias = "rm")]
    Delete(DeleteCommand),
    /// Delete every completed task
    #[command(name = "clear-completed", alias = "clear")]
    ClearCompleted,
    /// Show all, active or completed tasks
    Filter(FilterCommand),
    /// Print the visible tasks
    #[command(alias = "ls")]
    List,
    /// Print how many tasks are not completed
    Left,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Source of follow-up input for commands that need it
pub trait Prompt {
    /// Ask for one line of input, showing `seed` as the current value.
    ///
    /// Returns `None` when the input is exhausted.
    fn ask(&mut self, question: &str, seed: &str) -> ShellResult<Option<String>>;
}

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A command ran against the list; `view` is the rendered updated view
    /// unless output is quiet
    Applied {
        outcome: Outcome,
        view: Option<String>,
    },
    /// A query produced output
    Output(String),
    Quit,
}

impl Reply {
    /// Build the reply for an applied command from the view it returned.
    pub fn applied(
        outcome: Outcome,
        view: &TaskListView<'_>,
        format: OutputFormat,
    ) -> ShellResult<Self> {
        let view = if format.quiet {
            None
        } else {
            Some(output::format_view(view, format)?)
        };
        Ok(Reply::Applied { outcome, view })
    }
}

impl Command {
    /// Execute the command against the session's task list.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` if prompting for input or rendering output fails.
    pub fn execute(
        &self,
        list: &mut TaskList,
        prompt: &mut dyn Prompt,
        format: OutputFormat,
    ) -> ShellResult<Reply> {
        match self {
            Command::Add(cmd) => cmd.execute(list, format),
            Command::Toggle(cmd) => cmd.execute(list, format),
            Command::Edit(cmd) => cmd.execute(list, prompt, format),
            Command::Delete(cmd) => cmd.execute(list, format),
            Command::ClearCompleted => {
                let (outcome, view) = list.apply(ListCommand::ClearCompleted);
                Reply::applied(outcome, &view, format)
            }
            Command::Filter(cmd) => cmd.execute(list, format),
            Command::List => Ok(Reply::Output(output::format_view(&list.view(), format)?)),
            Command::Left => Ok(Reply::Output(output::format_remaining(
                list.remaining_count(),
                format,
            )?)),
            Command::Quit => Ok(Reply::Quit),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::error::ShellError;
    use tickbox_core::Filter;

    #[test]
    fn test_blank_and_comment_lines() {
        assert!(matches!(SessionLine::parse_line(""), Ok(ParsedLine::Blank)));
        assert!(matches!(
            SessionLine::parse_line("   "),
            Ok(ParsedLine::Blank)
        ));
        assert!(matches!(
            SessionLine::parse_line("# groceries"),
            Ok(ParsedLine::Blank)
        ));
    }

    #[test]
    fn test_help_is_not_an_error() {
        match SessionLine::parse_line("help") {
            Ok(ParsedLine::Help(text)) => assert!(text.contains("clear-completed")),
            other => panic!("expected help, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_is_usage_error() {
        let err = SessionLine::parse_line("frobnicate 3").unwrap_err();
        assert!(matches!(err, ShellError::Usage { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_aliases_parse() {
        assert!(matches!(parse("done 1"), Command::Toggle(_)));
        assert!(matches!(parse("rm 1"), Command::Delete(_)));
        assert!(matches!(parse("clear"), Command::ClearCompleted));
        assert!(matches!(parse("clear-completed"), Command::ClearCompleted));
        assert!(matches!(parse("ls"), Command::List));
        assert!(matches!(parse("exit"), Command::Quit));
    }

    #[test]
    fn test_split_word_keeps_inner_whitespace() {
        assert_eq!(split_word("add Buy  milk"), ("add", "Buy  milk"));
        assert_eq!(split_word("add\tBuy\tmilk"), ("add", "Buy\tmilk"));
        assert_eq!(split_word("list"), ("list", ""));
    }

    #[test]
    fn test_help_lists_text_commands() {
        match SessionLine::parse_line("help") {
            Ok(ParsedLine::Help(text)) => {
                assert!(text.contains("add"));
                assert!(text.contains("edit"));
            }
            other => panic!("expected help, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_completed_reply() {
        let mut list = TaskList::new();
        let id = list.add_task("a").unwrap();
        list.toggle_complete(id);

        let reply = parse("clear")
            .execute(&mut list, &mut ScriptedPrompt::default(), quiet())
            .unwrap();
        assert_eq!(
            reply,
            Reply::Applied {
                outcome: Outcome::Cleared(1),
                view: None
            }
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_applied_reply_includes_view_unless_quiet() {
        let mut list = TaskList::new();
        let format = OutputFormat::default();
        let reply = parse("add Buy milk")
            .execute(&mut list, &mut ScriptedPrompt::default(), format)
            .unwrap();
        match reply {
            Reply::Applied {
                view: Some(view), ..
            } => assert!(view.contains("Buy milk")),
            other => panic!("expected a rendered view, got {:?}", other),
        }
    }

    #[test]
    fn test_left_ignores_filter() {
        let mut list = TaskList::with_filter(Filter::Completed);
        list.add_task("a");
        list.add_task("b");

        let format = OutputFormat::default();
        let reply = parse("left")
            .execute(&mut list, &mut ScriptedPrompt::default(), format)
            .unwrap();
        assert_eq!(reply, Reply::Output("2 items left".to_string()));
    }

    #[test]
    fn test_quit_reply() {
        let mut list = TaskList::new();
        let format = OutputFormat::default();
        let reply = parse("quit")
            .execute(&mut list, &mut ScriptedPrompt::default(), format)
            .unwrap();
        assert_eq!(reply, Reply::Quit);
    }
}
