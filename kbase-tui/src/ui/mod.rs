use crate::app::{App, Page};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Tabs},
    Frame,
};

mod add_view;
mod delete_dialog;
mod edit_modal;
mod list_view;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_nav_bar(frame, app, root[0]);

    match app.current_page {
        Page::List => list_view::render_list_view(frame, app, root[1]),
        Page::AddNew => add_view::render_add_view(frame, app, root[1]),
    }

    render_status_line(frame, app, root[2]);

    // Overlays render on top of whichever page is visible.
    if app.edit_modal.is_some() {
        edit_modal::render_edit_modal(frame, app);
    }
    if app.delete_context.is_some() {
        delete_dialog::render_delete_confirm_dialog(frame, app);
    }
}

fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let selected = match app.current_page {
        Page::List => 0,
        Page::AddNew => 1,
    };
    let tabs = Tabs::new(vec!["View All [F1]", "Add New [F2]"])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " kbase ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
        );
    frame.render_widget(tabs, area);
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            format!(" {}", app.storage_label),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
