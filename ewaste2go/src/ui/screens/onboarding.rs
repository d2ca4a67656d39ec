use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, ONBOARDING_STEPS};
use crate::ui::{components::help_bar, layouts, theme::Theme};

const STEPS: [(&str, &str); ONBOARDING_STEPS] = [
    (
        "Welcome to e-waste2go",
        "The easiest way to recycle electronics in Sabah.",
    ),
    (
        "Schedule Pickups",
        "We come to you. Real-time GPS tracking for every pickup.",
    ),
    (
        "Trade & Earn",
        "Sell valuable parts to partners or earn points for recycling.",
    ),
    (
        "Sustainable Sabah",
        "Join us and DBKK in making our state greener.",
    ),
];

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let step = state.onboarding.step.min(ONBOARDING_STEPS - 1);
    let (title, description) = STEPS[step];

    let (_, content_area, help_area) = layouts::screen_layout(area);
    let card = layouts::centered_popup(70, 70, content_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(3), // Description
            Constraint::Length(1), // Step dots
            Constraint::Length(1),
            Constraint::Length(1), // Button
            Constraint::Min(1),
        ])
        .split(card);

    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_border_style())
            .style(theme.base_style()),
        card,
    );

    f.render_widget(
        Paragraph::new(Span::styled(title, theme.title_style())).alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(description)
            .style(theme.base_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    let dots: Vec<Span> = (0..ONBOARDING_STEPS)
        .map(|i| {
            if i == step {
                Span::styled("━━ ", theme.title_style())
            } else {
                Span::styled("• ", theme.help_text_style())
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        chunks[4],
    );

    let button = if step == ONBOARDING_STEPS - 1 {
        "[ Get Started → ]"
    } else {
        "[ Next → ]"
    };
    f.render_widget(
        Paragraph::new(Span::styled(button, theme.highlight_style())).alignment(Alignment::Center),
        chunks[6],
    );

    help_bar::render_help_bar(
        f,
        help_area,
        theme,
        "Enter: next | ←: back | q: quit",
    );
}
