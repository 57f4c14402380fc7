//! UI rendering for the TUI.
//!
//! Provides layout and widget rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};
use tickbox_core::{Filter, Task, TaskListView};

use crate::app::{App, InputMode};

/// Placeholder shown in the empty input line.
const PLACEHOLDER: &str = "Currently typing";

/// Legend text for keyboard shortcuts in normal mode.
const LEGEND: &str = " [a] Add  [e] Edit  [space] Toggle  [d] Delete  [c] Clear completed  [1-3/f] Filter  [j/k] Move  [q] Quit ";

/// Legend text while typing.
const INPUT_LEGEND: &str = " [Enter] Save  [Esc] Cancel ";

/// Draw the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = create_main_layout(frame.area());
    let view = app.view();

    draw_input(frame, chunks[0], app);
    let focused = !app.mode().is_typing();
    draw_task_list(frame, chunks[1], &view, app.selected_index(), focused);
    draw_footer(frame, chunks[2], &view);
    draw_legend(frame, chunks[3], app.mode());
}

/// Create the main four-part layout: input, task list, footer, legend.
fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input line
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Legend bar
        ])
        .split(area)
        .to_vec()
}

/// Title of the input box for the current mode.
fn input_title(mode: &InputMode) -> String {
    match mode {
        InputMode::Normal => " TODO ".to_string(),
        InputMode::Adding => " New task ".to_string(),
        InputMode::Editing(request) => format!(" Update your task #{} ", request.id()),
    }
}

/// Draw the input line, with a cursor when typing.
fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let typing = app.mode().is_typing();
    let border_color = if typing { Color::Yellow } else { Color::Cyan };

    let content = if app.input().is_empty() && !typing {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input())
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(input_title(app.mode()))
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, area);

    if typing {
        let typed = app.input().chars().count() as u16;
        let x = (area.x + 1 + typed).min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// One row of the task list.
fn task_item(task: &Task) -> ListItem<'_> {
    let (mark, style) = if task.is_completed() {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default())
    };
    ListItem::new(Line::from(vec![
        Span::styled(mark, Style::default().fg(Color::Green)),
        Span::styled(task.text(), style),
    ]))
}

/// Draw the visible tasks with the selection highlighted.
fn draw_task_list(
    frame: &mut Frame,
    area: Rect,
    view: &TaskListView<'_>,
    selected: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Yellow
        } else {
            Color::Cyan
        }));

    if view.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No tasks",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view.tasks.iter().map(|task| task_item(task)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the footer: remaining count, filter controls, clear hint.
fn draw_footer(frame: &mut Frame, area: Rect, view: &TaskListView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Remaining count
            Constraint::Min(0),     // Filter controls
            Constraint::Length(17), // Clear completed
        ])
        .split(area);

    let remaining = Paragraph::new(view.remaining_label())
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(remaining, chunks[0]);

    let titles: Vec<Line> = Filter::ALL.iter().map(|f| Line::from(f.label())).collect();
    let tabs = Tabs::new(titles)
        .select(view.filter.index())
        .style(Style::default().fg(Color::Blue))
        .highlight_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[1]);

    let clear_style = if view.has_completed() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let clear = Paragraph::new("Clear completed").style(clear_style);
    frame.render_widget(clear, chunks[2]);
}

/// Draw the legend bar at the bottom.
fn draw_legend(frame: &mut Frame, area: Rect, mode: &InputMode) {
    let text = if mode.is_typing() {
        INPUT_LEGEND
    } else {
        LEGEND
    };
    let legend = Paragraph::new(text)
        .style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(legend, area);
}
