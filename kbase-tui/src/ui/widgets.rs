use super::utils::truncate;
use crate::app::{EntryForm, FormField, TextInput};
use crate::time_utils::format_created;
use crate::types::Entry;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Rows taken by one card: two borders, content, tags and actions.
pub const CARD_HEIGHT: u16 = 5;

pub fn key_hint(key: &'static str, description: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ]
}

pub fn tag_spans(tags: &[String]) -> Vec<Span<'_>> {
    if tags.is_empty() {
        return vec![Span::styled("no tags", Style::default().fg(Color::DarkGray))];
    }
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("#{tag}"),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans
}

pub fn render_card(frame: &mut Frame, area: Rect, entry: &Entry, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", truncate(&entry.title, inner_width.saturating_sub(2))),
            title_style,
        ))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ", format_created(entry.id)),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        )
        .padding(Padding::horizontal(1));

    let actions_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let lines = vec![
        Line::from(Span::styled(
            truncate(&entry.content, inner_width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(tag_spans(&entry.tags)),
        Line::from(vec![
            Span::styled("[e] Edit", actions_style),
            Span::raw("  "),
            Span::styled("[d] Delete", actions_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A bordered single-line input; the focused one shows a block cursor.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    is_focused: bool,
) {
    let text = if is_focused {
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        input.value.clone()
    };
    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let field = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {label} "))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(field, area);
}

/// Title, content and tags stacked vertically, 3 rows each.
pub fn render_entry_form(frame: &mut Frame, area: Rect, form: &EntryForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, field) in [FormField::Title, FormField::Content, FormField::Tags]
        .into_iter()
        .enumerate()
    {
        render_text_field(
            frame,
            chunks[i],
            field.label(),
            form.input(field),
            form.focused_field == field,
        );
    }
}

pub fn form_controls() -> Line<'static> {
    let mut spans = Vec::new();
    spans.extend(key_hint("Tab", ": Next field  "));
    spans.extend(key_hint("Enter", ": Next / Save  "));
    spans.extend(key_hint("Ctrl+S", ": Save  "));
    spans.extend(key_hint("Ctrl+X", ": Clear field  "));
    spans.extend(key_hint("Esc", ": Cancel"));
    Line::from(spans)
}
