//! Filter bar for the collection points directory.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Render the filter input with the current query. While `editing` the
/// bar shows a cursor and the keys that leave filter mode.
pub fn render_filter_input(f: &mut Frame, area: Rect, theme: &Theme, query: &str, editing: bool) {
    let (title, border_style) = if editing {
        ("Filter (Enter: apply, Esc: clear)", theme.info_border_style())
    } else {
        ("Filter (/: edit, Esc: clear)", theme.border_style())
    };

    let mut spans = vec![Span::styled(query, theme.highlight_style())];
    if editing {
        spans.push(Span::styled("▏", theme.form_field_style(true)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(input, area);
}
