use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_EIGHT};

use crate::ui::theme::Theme;

/// Spinner plus label, shown while the simulated QR scan runs.
/// The throbber state is advanced by the redraw ticker, so rendering works
/// on a copy.
pub fn render_scan_indicator(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    throbber_state: &ThrobberState,
    label: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let spinner_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(chunks[1])[1];

    let throbber = Throbber::default()
        .throbber_style(theme.title_style())
        .throbber_set(BRAILLE_EIGHT);
    f.render_stateful_widget(throbber, spinner_area, &mut throbber_state.clone());

    let label = Paragraph::new(Span::styled(label, theme.help_text_style()))
        .alignment(Alignment::Center);
    f.render_widget(label, chunks[2]);
}
