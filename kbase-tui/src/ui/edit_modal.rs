use super::utils::centered_rect;
use super::widgets::{form_controls, render_entry_form};
use super::*;

pub fn render_edit_modal(frame: &mut Frame, app: &App) {
    let Some(modal) = &app.edit_modal else {
        return;
    };

    let area = centered_rect(72, 15, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Edit Entry ",
            Style::default().fg(Color::Yellow),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Min(9),    // Fields
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    render_entry_form(frame, chunks[1], &modal.form);
    frame.render_widget(Paragraph::new(form_controls()), chunks[2]);
}
