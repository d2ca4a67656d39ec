use ewaste_data::{Pickup, PickupStatus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::i18n::t;
use crate::state::{AppState, QuickAction};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts,
    theme::{Theme, SUMMARY_CARD_HEIGHT, TABLE_COLUMN_SPACING},
    utils,
};

const ACTIVE_CARD_HEIGHT: u16 = 5;
const RECENT_PICKUPS: usize = 3;
const QUICK_ACTIONS_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    let first_name = state.user.name.split_whitespace().next().unwrap_or_default();
    screen_title::render_screen_title(
        f,
        title_area,
        theme,
        &format!("{}, {}", t(lang, "hi"), first_name),
        Some(Span::styled(
            utils::fmt_points(state.user.stats.reward_points),
            theme.highlight_style(),
        )),
    );

    let active = state.active_pickup();
    let active_height = if active.is_some() { ACTIVE_CARD_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_CARD_HEIGHT),
            Constraint::Length(active_height),
            Constraint::Length(QUICK_ACTIONS_HEIGHT),
            Constraint::Min(4),
        ])
        .split(content_area);

    render_summary(f, chunks[0], theme, state);
    if let Some(pickup) = active {
        render_active_pickup(f, chunks[1], theme, pickup);
    }
    render_quick_actions(f, chunks[2], theme, state);
    render_recent_pickups(f, chunks[3], theme, state);

    help_bar::render_help_bar(
        f,
        help_area,
        theme,
        "j/k: choose | Enter: open | t: track | ?: help",
    );
}

fn render_summary(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let stats = &state.user.stats;

    let line = Line::from(vec![
        Span::styled(format!("{} ", t(lang, "rewardPoints")), theme.help_text_style()),
        Span::styled(stats.reward_points.to_string(), theme.title_style()),
        Span::raw("    "),
        Span::styled(format!("{} ", t(lang, "totalPickups")), theme.help_text_style()),
        Span::styled(stats.total_pickups.to_string(), theme.header_style()),
        Span::raw("    "),
        Span::styled(format!("{} ", t(lang, "itemsRecycled")), theme.help_text_style()),
        Span::styled(stats.items_recycled.to_string(), theme.header_style()),
    ]);

    let card = Paragraph::new(vec![
        Line::from(Span::styled(t(lang, "readyToRecycle"), theme.base_style())),
        line,
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_border_style()),
    );

    f.render_widget(card, area);
}

fn render_active_pickup(f: &mut Frame, area: Rect, theme: &Theme, pickup: &ewaste_data::Pickup) {
    let driver = match (&pickup.driver_name, &pickup.driver_vehicle) {
        (Some(name), Some(vehicle)) => format!("{} · {}", name, vehicle),
        (Some(name), None) => name.clone(),
        _ => "Driver Assigned".to_string(),
    };

    let lines = vec![
        Line::from(vec![
            utils::status_span(pickup.status, theme),
            Span::raw("  "),
            Span::styled(
                pickup.tracking_id.clone().unwrap_or_default(),
                theme.help_text_style(),
            ),
        ]),
        Line::from(format!("{} {} · {}", pickup.date, pickup.time, pickup.items_summary())),
        Line::from(vec![
            Span::raw(driver),
            Span::styled("   [t] Track", theme.highlight_style()),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.info_border_style())
            .title("Active Pickup"),
    );

    f.render_widget(card, area);
}

fn render_quick_actions(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, QuickAction::ALL.len() as u32); 4])
        .split(area);

    for (i, action) in QuickAction::ALL.iter().enumerate() {
        let selected = i == state.home.selected_action;
        let (style, border_style) = if selected {
            (theme.selection_style(), theme.accent_border_style())
        } else {
            (theme.base_style(), theme.border_style())
        };
        let card = Paragraph::new(t(lang, action.label_key()))
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(card, cells[i]);
    }
}

/// Latest pickups, leaving out the one on the road (it has its own card)
fn recent_pickups(state: &AppState) -> Vec<&Pickup> {
    state
        .pickups
        .iter()
        .filter(|pickup| pickup.status != PickupStatus::InTransit)
        .take(RECENT_PICKUPS)
        .collect()
}

fn render_recent_pickups(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let title = t(state.lang(), "recentPickups");
    let recent = recent_pickups(state);

    if recent.is_empty() {
        empty_state::render_empty_state(f, area, theme, title, "No pickups yet", None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Time"),
        Cell::from("Items"),
        Cell::from("Status"),
    ])
    .style(theme.header_style())
    .underlined();

    let rows: Vec<Row> = recent
        .into_iter()
        .map(|pickup| {
            Row::new(vec![
                Cell::from(pickup.date.clone()),
                Cell::from(pickup.time.clone()),
                Cell::from(pickup.items_summary()),
                Cell::from(utils::status_span(pickup.status, theme)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .column_spacing(TABLE_COLUMN_SPACING)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(title),
    );

    f.render_widget(table, area);
}
