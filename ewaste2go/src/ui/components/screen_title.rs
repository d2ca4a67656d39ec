//! Shared screen title component with a right-aligned status slot.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::{layouts, theme::Theme};

/// Render a screen title, with optional status text (e.g. the points
/// balance) right-aligned on the same row.
pub fn render_screen_title(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    status: Option<Span<'_>>,
) {
    let status_width = status
        .as_ref()
        .map(|s| s.width() as u16)
        .unwrap_or(0)
        .min(area.width / 2);
    let (title_area, status_area) = layouts::title_with_status(area, status_width);

    f.render_widget(
        Paragraph::new(Span::styled(title, theme.title_style())),
        title_area,
    );

    if let Some(status) = status {
        f.render_widget(
            Paragraph::new(status).alignment(Alignment::Right),
            status_area,
        );
    }
}
