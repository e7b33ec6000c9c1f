//! UI drawing.
//!
//! Pure rendering over the app state; no mutation happens here. The
//! terminal cursor is only placed when no overlay is open.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::ui::centered_rect;

use super::state::{App, LaunchAction, Notice, NoticeLevel, PromptOverlay, Screen};

pub fn render(app: &App, frame: &mut Frame) {
    match app.screen {
        Screen::Launch => render_launch(app, frame),
        Screen::Workspace => render_workspace(app, frame),
    }

    if let Some(prompt) = &app.prompt {
        render_prompt(frame, prompt);
    }
    if let Some(notice) = &app.notice {
        render_notice(frame, notice);
    }
}

fn render_launch(app: &App, frame: &mut Frame) {
    let rect = centered_rect(60, 50, frame.area());

    let highlight = Style::default().fg(Color::Black).bg(Color::White);
    let normal = Style::default().fg(Color::White);
    let (start_style, exit_style) = match app.launch_action {
        LaunchAction::Start => (highlight, normal),
        LaunchAction::Exit => (normal, highlight),
    };

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Quick Notes!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("Write notes in tabs and save them to disk."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[ Start ]", start_style),
            Span::raw("   "),
            Span::styled("[ Exit ]", exit_style),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Enter to choose, Left/Right to switch, q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn render_workspace(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let manager = app.workspace.session_manager();
    let sessions = manager.sessions();

    if sessions.is_empty() {
        let empty = Paragraph::new("No notes open. Ctrl-N creates one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[1]);
    } else {
        let titles: Vec<Line> = sessions
            .iter()
            .map(|s| Line::raw(s.title.clone()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(manager.selected_index().unwrap_or(0))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(tabs, chunks[0]);

        if let Some(note) = manager.selected() {
            render_editor(app, frame, chunks[1], &note.content);
        }
    }

    let help = Paragraph::new(
        "Ctrl-N new  Ctrl-D delete  Ctrl-R rename  Ctrl-S save  Ctrl-Left/Right switch  Esc back",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn render_editor(app: &App, frame: &mut Frame, area: Rect, content: &str) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);

    let (row, col) = cursor_line_col(content, app.cursor);
    let scroll = (row as u16).saturating_sub(inner.height.saturating_sub(1));

    let editor = Paragraph::new(content.to_string())
        .block(block)
        .scroll((scroll, 0));
    frame.render_widget(editor, area);

    let overlay_open = app.prompt.is_some() || app.notice.is_some();
    if !overlay_open && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (col as u16).min(inner.width - 1);
        let y = inner.y + (row as u16 - scroll).min(inner.height - 1);
        frame.set_cursor_position((x, y));
    }
}

/// Line/column of a char offset within the text.
fn cursor_line_col(content: &str, cursor: usize) -> (usize, usize) {
    let mut row = 0;
    let mut col = 0;
    for c in content.chars().take(cursor) {
        if c == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (row, col)
}

fn render_prompt(frame: &mut Frame, prompt: &PromptOverlay) {
    let rect = centered_rect(50, 20, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(prompt.title.clone());
    let inner = block.inner(rect);

    let lines = vec![
        Line::raw(prompt.input.clone()),
        Line::raw(""),
        Line::from(Span::styled(
            "Enter to confirm, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);

    if inner.width > 0 && inner.height > 0 {
        let len = prompt.input.chars().count() as u16;
        frame.set_cursor_position((inner.x + len.min(inner.width - 1), inner.y));
    }
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let (title, color) = match notice.level {
        NoticeLevel::Info => ("Info", Color::Green),
        NoticeLevel::Warning => ("Warning", Color::Yellow),
        NoticeLevel::Error => ("Error", Color::Red),
    };

    let rect = centered_rect(50, 20, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::raw(notice.message.clone()),
        Line::raw(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_line_col() {
        assert_eq!(cursor_line_col("", 0), (0, 0));
        assert_eq!(cursor_line_col("abc", 2), (0, 2));
        assert_eq!(cursor_line_col("ab\ncd", 3), (1, 0));
        assert_eq!(cursor_line_col("ab\ncd", 5), (1, 2));
    }
}
