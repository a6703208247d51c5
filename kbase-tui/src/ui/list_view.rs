use super::widgets::{key_hint, render_card, CARD_HEIGHT};
use super::*;
use crate::app::{ListFocus, PLACEHOLDER};

pub fn render_list_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Controls
        ])
        .split(body);

    render_search_box(frame, app, chunks[0]);

    if app.listing.is_empty() {
        let empty_msg = Paragraph::new(PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Entries ")
                    .padding(Padding::vertical(1)),
            );
        frame.render_widget(empty_msg, chunks[1]);
    } else {
        render_cards(frame, app, chunks[1]);
    }

    let controls = if app.list_focus == ListFocus::Search {
        let mut spans = Vec::new();
        spans.extend(key_hint("Type", ": Search  "));
        spans.extend(key_hint("Ctrl+X", ": Clear  "));
        spans.extend(key_hint("Tab", ": Browse entries  "));
        spans.extend(key_hint("Ctrl+C", ": Quit"));
        spans
    } else {
        let mut spans = Vec::new();
        spans.extend(key_hint("j/k", ": Move  "));
        spans.extend(key_hint("e", ": Edit  "));
        spans.extend(key_hint("d", ": Delete  "));
        spans.extend(key_hint("a", ": Add  "));
        spans.extend(key_hint("/", ": Search  "));
        spans.extend(key_hint("q", ": Quit"));
        spans
    };
    frame.render_widget(Paragraph::new(Line::from(controls)), chunks[2]);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.list_focus == ListFocus::Search;
    let text = if searching {
        let (before, after) = app.search_input.split_at_cursor();
        format!("{}█{}", before, after)
    } else if app.search_input.value.is_empty() {
        "Type / to search...".to_string()
    } else {
        app.search_input.value.clone()
    };
    let border = if searching {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_box = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}

fn render_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.listing.filter.is_empty() {
        format!(" Entries ({}) ", app.listing.len())
    } else {
        format!(
            " Entries matching \"{}\" ({}) ",
            app.listing.filter,
            app.listing.len()
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let capacity = (inner.height / CARD_HEIGHT) as usize;
    app.clamp_list_scroll(capacity);

    let cards_focused = app.list_focus == ListFocus::Cards;
    for (row, (idx, entry)) in app
        .listing
        .cards
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(capacity)
        .enumerate()
    {
        let card_area = Rect {
            x: inner.x,
            y: inner.y + row as u16 * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT,
        };
        let is_selected = cards_focused && app.selected_index == Some(idx);
        render_card(frame, card_area, entry, is_selected);
    }
}
