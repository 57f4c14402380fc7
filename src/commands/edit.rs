//! Edit command for changing task text
//!
//! With text on the line, the text is applied directly. Without it, the
//! session is asked for the replacement, seeded with the current text; an
//! empty answer or end of input leaves the task unchanged.

use clap::Args;
use tickbox_core::{Command as ListCommand, EditResponse, Outcome, TaskId, TaskList};

use super::{Prompt, Reply, split_word};
use crate::error::{ShellError, ShellResult};
use crate::output::OutputFormat;

/// Change a task's text
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Task ID to edit
    pub id: TaskId,

    /// Replacement text, the rest of the line as typed (prompted for when
    /// omitted)
    pub text: Option<String>,
}

impl EditCommand {
    /// Build the command from everything after the `edit` word.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Usage` when the id is missing and
    /// `ShellError::List` when it is not a number.
    pub fn from_rest(rest: &str) -> ShellResult<Self> {
        let (id, text) = split_word(rest.trim_start());
        if id.is_empty() {
            return Err(ShellError::Usage {
                message: "edit needs a task id: edit <ID> [TEXT]".to_string(),
            });
        }
        Ok(Self {
            id: id.parse()?,
            text: (!text.trim().is_empty()).then(|| text.to_string()),
        })
    }

    /// Execute the edit command.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` if reading the prompted answer fails.
    pub fn execute(
        &self,
        list: &mut TaskList,
        prompt: &mut dyn Prompt,
        format: OutputFormat,
    ) -> ShellResult<Reply> {
        if let Some(text) = &self.text {
            let (outcome, view) = list.apply(ListCommand::UpdateText {
                id: self.id,
                text: text.clone(),
            });
            return Reply::applied(outcome, &view, format);
        }

        let Some(request) = list.begin_edit(self.id) else {
            return Reply::applied(Outcome::Ignored, &list.view(), format);
        };

        let question = format!("Update your task #{}", request.id());
        let answer = prompt.ask(&question, request.current_text())?;

        let (outcome, view) = list.apply(ListCommand::FinishEdit {
            request,
            response: EditResponse::from(answer),
        });
        Reply::applied(outcome, &view, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SessionLine;
    use crate::commands::test_support::*;

    #[test]
    fn test_edit_with_inline_text() {
        let mut list = TaskList::new();
        let id = list.add_task("Buy milk").unwrap();
        let mut prompt = ScriptedPrompt::default();

        let reply = parse(&format!("edit {} Buy oat milk", id))
            .execute(&mut list, &mut prompt, quiet())
            .unwrap();
        assert_eq!(
            reply,
            Reply::Applied {
                outcome: Outcome::Updated(id),
                view: None
            }
        );
        assert_eq!(list.get(id).unwrap().text(), "Buy oat milk");
        assert!(prompt.asked.is_empty(), "inline text should not prompt");
    }

    #[test]
    fn test_edit_prompts_with_current_text() {
        let mut list = TaskList::new();
        let id = list.add_task("Buy milk").unwrap();
        let mut prompt = ScriptedPrompt::answering([Some("  Buy oat milk  ")]);

        parse(&format!("edit {}", id))
            .execute(&mut list, &mut prompt, quiet())
            .unwrap();

        assert_eq!(prompt.asked.len(), 1);
        assert_eq!(prompt.asked[0].1, "Buy milk");
        assert_eq!(list.get(id).unwrap().text(), "Buy oat milk");
    }

    #[test]
    fn test_edit_blank_answer_keeps_text() {
        let mut list = TaskList::new();
        let id = list.add_task("Buy milk").unwrap();
        let mut prompt = ScriptedPrompt::answering([Some("   ")]);

        let reply = parse(&format!("edit {}", id))
            .execute(&mut list, &mut prompt, quiet())
            .unwrap();
        assert_eq!(
            reply,
            Reply::Applied {
                outcome: Outcome::Ignored,
                view: None
            }
        );
        assert_eq!(list.get(id).unwrap().text(), "Buy milk");
    }

    #[test]
    fn test_edit_end_of_input_cancels() {
        let mut list = TaskList::new();
        let id = list.add_task("Buy milk").unwrap();
        let mut prompt = ScriptedPrompt::answering([None]);

        parse(&format!("edit {}", id))
            .execute(&mut list, &mut prompt, quiet())
            .unwrap();
        assert_eq!(list.get(id).unwrap().text(), "Buy milk");
    }

    #[test]
    fn test_inline_and_prompted_edit_agree() {
        let mut list = TaskList::new();
        let a = list.add_task("a").unwrap();
        let b = list.add_task("b").unwrap();
        let mut prompt = ScriptedPrompt::answering([Some("x  y")]);

        parse(&format!("edit {} x  y", a))
            .execute(&mut list, &mut prompt, quiet())
            .unwrap();
        parse(&format!("edit {}", b))
            .execute(&mut list, &mut prompt, quiet())
            .unwrap();

        assert_eq!(list.get(a).unwrap().text(), "x  y");
        assert_eq!(list.get(b).unwrap().text(), "x  y");
    }

    #[test]
    fn test_edit_text_may_look_like_flags() {
        let mut list = TaskList::new();
        let id = list.add_task("a").unwrap();

        parse(&format!("edit {} -- --help", id))
            .execute(&mut list, &mut ScriptedPrompt::default(), quiet())
            .unwrap();
        assert_eq!(list.get(id).unwrap().text(), "-- --help");
    }

    #[test]
    fn test_edit_requires_numeric_id() {
        let err = SessionLine::parse_line("edit").unwrap_err();
        assert!(matches!(err, ShellError::Usage { .. }));

        let err = SessionLine::parse_line("edit first thing").unwrap_err();
        assert!(err.to_string().contains("Invalid task id 'first'"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_edit_unknown_id_does_not_prompt() {
        let mut list = TaskList::new();
        let mut prompt = ScriptedPrompt::answering([Some("new")]);

        let reply = parse("edit 5").execute(&mut list, &mut prompt, quiet()).unwrap();
        assert_eq!(
            reply,
            Reply::Applied {
                outcome: Outcome::Ignored,
                view: None
            }
        );
        assert!(prompt.asked.is_empty());
    }
}
