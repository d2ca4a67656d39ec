//! Shared empty state component for consistent "no data" messages.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Render an empty state message with consistent styling.
///
/// Used when a list/table has nothing to display.
///
/// # Arguments
/// * `title` - The block title (e.g., "Collection Points")
/// * `message` - The message to display (e.g., "No matching collection points")
/// * `hint` - Optional hint text below the message
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme.highlight_style())),
    ];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(hint_text, theme.help_text_style())));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(title),
    );

    f.render_widget(paragraph, area);
}
