use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme::Theme};

/// Render a confirmation popup for deleting a saved location
pub fn render_delete_confirmation(f: &mut Frame, theme: &Theme, location_name: &str) {
    let inner = super::popup::render_popup_frame(
        f,
        theme,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Confirm Delete ",
        theme.danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Warning message
            Constraint::Length(1), // Empty line
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let warning = Paragraph::new(format!("Delete \"{}\" from your locations?", location_name))
        .style(theme.highlight_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(warning, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled("[Y]es ", Style::default().fg(theme.positive)),
        Span::raw("/ "),
        Span::styled("any other key", Style::default().fg(theme.negative)),
        Span::raw(" cancels"),
    ]);
    let instructions_para = Paragraph::new(instructions).alignment(Alignment::Center);
    f.render_widget(instructions_para, chunks[2]);
}
