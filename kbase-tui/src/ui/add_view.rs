use super::widgets::{form_controls, render_entry_form};
use super::*;

pub fn render_add_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Controls
        ])
        .split(body);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" New Entry ")
        .padding(Padding::uniform(1));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    render_entry_form(frame, inner, &app.add_form);
    frame.render_widget(Paragraph::new(form_controls()), chunks[1]);
}
