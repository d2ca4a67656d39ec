use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::i18n::{t, Lang};
use crate::state::view::View;
use crate::ui::theme::Theme;

/// Bottom navigation bar. Slots are numbered to match their `1`..`5`
/// shortcuts; views outside the bar (market, guide) highlight nothing.
pub fn render_bottom_nav(f: &mut Frame, area: Rect, theme: &Theme, current: View, lang: Lang) {
    let titles: Vec<Line> = View::NAV_BAR
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, t(lang, view.nav_label_key()))))
        .collect();

    let selected = View::NAV_BAR.iter().position(|v| *v == current);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.help_text_style())
        .highlight_style(theme.title_style())
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );

    f.render_widget(tabs, area);
}
