//! Shared help bar component for consistent bottom key hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Render a standard help bar with the given text.
///
/// Muted text in a bordered block, centered. Every screen uses this for
/// its key hints.
pub fn render_help_bar(f: &mut Frame, area: Rect, theme: &Theme, text: &str) {
    let help = Paragraph::new(text)
        .style(theme.help_text_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );

    f.render_widget(help, area);
}

/// Standard help bar text used across most screens
pub const HELP_TEXT_DEFAULT: &str = "Press ? for help";
