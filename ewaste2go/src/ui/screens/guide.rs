use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::AppState;
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts,
    theme::Theme,
};

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(f, title_area, theme, t(state.lang(), "guide"), None);
    help_bar::render_help_bar(f, help_area, theme, "Esc: back | ?: help");

    if state.guide.is_empty() {
        empty_state::render_empty_state(f, content_area, theme, "Guide", "Nothing here yet", None);
        return;
    }

    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Ratio(1, state.guide.len() as u32);
            state.guide.len()
        ])
        .split(content_area);

    for (entry, area) in state.guide.iter().zip(cards.iter()) {
        let card = Paragraph::new(entry.description.as_str())
            .style(theme.base_style())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_border_style())
                    .title(Span::styled(entry.title.as_str(), theme.title_style())),
            );
        f.render_widget(card, *area);
    }
}
