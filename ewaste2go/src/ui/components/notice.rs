//! Blocking notice popup for operation results and errors.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::{Notice, NoticeKind};
use crate::ui::{layouts, theme::Theme};

pub fn render_notice(f: &mut Frame, theme: &Theme, notice: &Notice) {
    let (title, border_style) = match notice.kind {
        NoticeKind::Info => (" Notice ", theme.info_border_style()),
        NoticeKind::Error => (" Error ", theme.danger_border_style()),
    };

    let inner = super::popup::render_popup_frame(
        f,
        theme,
        f.area(),
        layouts::popup_sizes::SMALL,
        title,
        border_style,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(notice.message.as_str())
        .style(theme.base_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let dismiss = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", theme.header_style()),
        Span::styled(" OK", theme.help_text_style()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(dismiss, chunks[1]);
}
