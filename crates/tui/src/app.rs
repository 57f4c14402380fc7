//! Main application state and event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::prelude::*;

use tickbox_core::{
    Command, EditRequest, EditResponse, Filter, Outcome, Task, TaskList, TaskListView,
};

use crate::error::TuiResult;
use crate::event::{
    is_backspace, is_char, is_delete, is_down, is_enter, is_escape, is_interrupt, is_quit, is_tab,
    is_toggle, is_up, poll_key, typed_char,
};
use crate::ui;

/// What keystrokes currently do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands on the selected task.
    #[default]
    Normal,
    /// Keys type the text of a new task.
    Adding,
    /// Keys type replacement text for the task in the request.
    Editing(EditRequest),
}

impl InputMode {
    /// Check if keystrokes go to the input line.
    pub fn is_typing(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Main application state.
pub struct App {
    /// The session's tasks and filter.
    list: TaskList,
    /// Index of the selected task within the visible tasks.
    selected_index: usize,
    /// Current input mode.
    mode: InputMode,
    /// Text typed into the input line.
    input: String,
    /// Whether the application is still running.
    running: bool,
}

impl App {
    /// Create a new App with an empty task list.
    pub fn new(filter: Filter) -> Self {
        Self {
            list: TaskList::with_filter(filter),
            selected_index: 0,
            mode: InputMode::default(),
            input: String::new(),
            running: true,
        }
    }

    /// Get the task list.
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Get the derived view to render.
    pub fn view(&self) -> TaskListView<'_> {
        self.list.view()
    }

    /// Get the currently selected task index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Get the currently selected task, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        self.list.visible_iter().nth(self.selected_index)
    }

    /// Get the current input mode.
    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Get the text typed into the input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Check if the application is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Move selection down in the task list.
    ///
    /// Clamps to the last item (does not wrap).
    pub fn select_next(&mut self) {
        let max_items = self.visible_len();
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up in the task list.
    ///
    /// Clamps to the first item (does not wrap).
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Start typing a new task.
    pub fn start_adding(&mut self) {
        self.input.clear();
        self.mode = InputMode::Adding;
    }

    /// Start editing the selected task, seeding the input with its text.
    pub fn start_editing(&mut self) {
        let Some(id) = self.selected_task().map(Task::id) else {
            return;
        };
        if let Some(request) = self.list.begin_edit(id) {
            self.input = request.current_text().to_string();
            self.mode = InputMode::Editing(request);
        }
    }

    /// Submit the input line: add a task or finish the edit.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        match std::mem::take(&mut self.mode) {
            InputMode::Adding => {
                if let Outcome::Added(_) = self.apply(Command::Add { text }) {
                    self.select_last();
                }
            }
            InputMode::Editing(request) => {
                self.apply(Command::FinishEdit {
                    request,
                    response: EditResponse::Submit(text),
                });
            }
            InputMode::Normal => {}
        }
    }

    /// Abandon the input line without changing the list.
    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
        self.input.clear();
    }

    /// Toggle completion of the selected task.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(Task::id) {
            self.apply(Command::Toggle { id });
        }
    }

    /// Delete the selected task.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(Task::id) {
            self.apply(Command::Delete { id });
        }
    }

    /// Remove all completed tasks.
    pub fn clear_completed(&mut self) {
        self.apply(Command::ClearCompleted);
    }

    /// Show only the tasks matching `filter`.
    pub fn set_filter(&mut self, filter: Filter) {
        self.apply(Command::SetFilter(filter));
    }

    /// Switch to the next filter.
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.list.filter().next());
    }

    /// Run one command and keep the selection inside the new view.
    fn apply(&mut self, command: Command) -> Outcome {
        let (outcome, view) = self.list.apply(command);
        let visible = view.tasks.len();
        self.clamp_selection(visible);
        outcome
    }

    fn visible_len(&self) -> usize {
        self.list.visible_iter().count()
    }

    fn select_last(&mut self) {
        self.selected_index = self.visible_len().saturating_sub(1);
    }

    fn clamp_selection(&mut self, visible: usize) {
        if self.selected_index >= visible {
            self.selected_index = visible.saturating_sub(1);
        }
    }

    /// Run the main application loop.
    ///
    /// This initializes the terminal, runs the event loop, and ensures
    /// the terminal is restored on exit (even on panic).
    pub fn run(&mut self) -> TuiResult<()> {
        let mut terminal = init_terminal()?;

        // The guard runs restore_terminal() even if we panic
        let _guard = scopeguard::guard((), |()| {
            let _ = restore_terminal();
        });

        let result = self.event_loop(&mut terminal);

        drop(_guard);

        result
    }

    /// The main event loop.
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> TuiResult<()> {
        while self.running {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if let Some(key) = poll_key(Duration::from_millis(100))? {
                self.handle_key(&key);
            }
        }
        Ok(())
    }

    /// Handle a keyboard event.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if is_interrupt(key) {
            self.quit();
            return;
        }

        if self.mode.is_typing() {
            self.handle_input_key(key);
        } else {
            self.handle_normal_key(key);
        }
    }

    fn handle_input_key(&mut self, key: &KeyEvent) {
        if is_enter(key) {
            self.submit_input();
        } else if is_escape(key) {
            self.cancel_input();
        } else if is_backspace(key) {
            self.input.pop();
        } else if let Some(c) = typed_char(key) {
            self.input.push(c);
        }
    }

    fn handle_normal_key(&mut self, key: &KeyEvent) {
        if is_quit(key) {
            self.quit();
        } else if is_down(key) {
            self.select_next();
        } else if is_up(key) {
            self.select_previous();
        } else if is_char(key, 'a') || is_char(key, 'i') {
            self.start_adding();
        } else if is_char(key, 'e') || is_enter(key) {
            self.start_editing();
        } else if is_toggle(key) {
            self.toggle_selected();
        } else if is_delete(key) {
            self.delete_selected();
        } else if is_char(key, 'c') {
            self.clear_completed();
        } else if is_char(key, 'f') || is_tab(key) {
            self.cycle_filter();
        } else if let Some(filter) = typed_char(key).and_then(filter_for_digit) {
            self.set_filter(filter);
        }
    }
}

/// Map `1`/`2`/`3` to the filter controls in display order.
fn filter_for_digit(c: char) -> Option<Filter> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    Filter::ALL.get(index).copied()
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> TuiResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
