use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Tabs},
};

use crate::i18n::t;
use crate::state::forms::{CashOutForm, CASH_OUT_MIN};
use crate::state::{AppState, RewardsOverlay, RewardsTab, Scrollable};
use crate::ui::{
    components::{empty_state, help_bar, popup, scan_indicator, screen_title},
    layouts,
    theme::{Theme, SUMMARY_CARD_HEIGHT, TABLE_COLUMN_SPACING},
    utils,
};

const TABS_HEIGHT: u16 = 1;
const QR_SIZE: usize = 17;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(
        f,
        title_area,
        theme,
        t(lang, "myRewards"),
        Some(Span::styled(
            utils::fmt_points(state.user.stats.reward_points),
            theme.highlight_style(),
        )),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_CARD_HEIGHT),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(3),
        ])
        .split(content_area);

    render_balance(f, chunks[0], theme, state);
    render_tabs(f, chunks[1], theme, state);
    match state.rewards_screen.tab {
        RewardsTab::History => render_history(f, chunks[2], theme, state),
        RewardsTab::Catalog => render_catalog(f, chunks[2], theme, state),
    }

    help_bar::render_help_bar(
        f,
        help_area,
        theme,
        "Tab: history/catalog | c: cash out | s: scan | r: my QR | ?: help",
    );

    match &state.rewards_screen.overlay {
        Some(RewardsOverlay::CashOut(form)) => render_cash_out(f, theme, state, form),
        Some(RewardsOverlay::MyQr) => render_my_qr(f, theme, state),
        Some(RewardsOverlay::Scanning(throbber)) => {
            let inner = popup::render_popup_frame(
                f,
                theme,
                f.area(),
                layouts::popup_sizes::SMALL,
                " Scan QR ",
                theme.info_border_style(),
            );
            scan_indicator::render_scan_indicator(
                f,
                inner,
                theme,
                throbber,
                "Scanning... point your camera at the code (Esc to cancel)",
            );
        }
        None => {}
    }
}

fn render_balance(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let points = state.user.stats.reward_points;

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", t(lang, "availablePoints")), theme.help_text_style()),
            Span::styled(points.to_string(), theme.title_style()),
            Span::styled(
                format!("  ≈ {}", utils::fmt_points_as_rm(points)),
                theme.help_text_style(),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "[c] {}  [s] Scan QR  [r] My QR",
                t(lang, "cashOut")
            ),
            theme.highlight_style(),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_border_style()),
        ),
        area,
    );
}

fn render_tabs(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let selected = match state.rewards_screen.tab {
        RewardsTab::History => 0,
        RewardsTab::Catalog => 1,
    };

    let tabs = Tabs::new(vec!["History", t(lang, "catalog")])
        .select(selected)
        .style(theme.help_text_style())
        .highlight_style(theme.title_style().underlined())
        .divider("│");

    f.render_widget(tabs, area);
}

fn render_history(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let rewards = &state.rewards_screen;
    let len = state.history_len();

    if len == 0 {
        empty_state::render_empty_state(f, area, theme, "History", "No activity yet", None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Activity"),
        Cell::from("Date"),
        Cell::from(Text::from("Amount").right_aligned()),
    ])
    .style(theme.header_style())
    .underlined();

    let claimed = state.user.claimed_rewards.iter().map(|claim| {
        Row::new(vec![
            Cell::from(Line::from(vec![
                Span::raw(claim.name.clone()),
                Span::styled(format!("  {}", claim.code), theme.help_text_style()),
            ])),
            Cell::from(format!("{} {}", t(lang, "claimedOn"), claim.date)),
            Cell::from(Text::from(t(lang, "useNow")).right_aligned())
                .style(theme.highlight_style()),
        ])
    });

    let ledger = state.ledger.iter().map(|entry| {
        Row::new(vec![
            Cell::from(entry.name.clone()),
            Cell::from(entry.date.clone()),
            Cell::from(
                Text::from(utils::ledger_amount_span(
                    &entry.amount,
                    entry.direction,
                    theme,
                ))
                .right_aligned(),
            ),
        ])
    });

    let rows: Vec<Row> = claimed.chain(ledger).collect();

    let selected = rewards.selected_index(len);
    rewards.history_state.borrow_mut().select(selected);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .column_spacing(TABLE_COLUMN_SPACING)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    )
    .row_highlight_style(theme.selection_style());

    f.render_stateful_widget(table, area, &mut rewards.history_state.borrow_mut());
}

fn render_catalog(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let rewards = &state.rewards_screen;
    let balance = state.user.stats.reward_points;

    if state.rewards.is_empty() {
        empty_state::render_empty_state(f, area, theme, "Catalog", "No rewards available", None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Reward"),
        Cell::from("Category"),
        Cell::from(Text::from("Cost").right_aligned()),
        Cell::from(Text::from("Stock").right_aligned()),
        Cell::from(""),
    ])
    .style(theme.header_style())
    .underlined();

    let rows: Vec<Row> = state
        .rewards
        .iter()
        .map(|reward| {
            let action = if balance >= reward.cost {
                Span::styled(format!("[Enter] {}", t(lang, "redeem")), theme.title_style())
            } else {
                Span::styled(
                    format!("{} {}", t(lang, "needPoints"), reward.cost - balance),
                    theme.help_text_style(),
                )
            };
            Row::new(vec![
                Cell::from(reward.name.clone()),
                Cell::from(reward.category.label()),
                Cell::from(Text::from(utils::fmt_points(reward.cost)).right_aligned()),
                Cell::from(Text::from(reward.stock.to_string()).right_aligned()),
                Cell::from(action),
            ])
        })
        .collect();

    let selected = rewards.selected_index(state.rewards.len());
    rewards.catalog_state.borrow_mut().select(selected);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(10),
            Constraint::Percentage(26),
        ],
    )
    .header(header)
    .column_spacing(TABLE_COLUMN_SPACING)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    )
    .row_highlight_style(theme.selection_style());

    f.render_stateful_widget(table, area, &mut rewards.catalog_state.borrow_mut());
}

fn render_cash_out(f: &mut Frame, theme: &Theme, state: &AppState, form: &CashOutForm) {
    let lang = state.lang();
    let balance = state.user.stats.reward_points;

    let inner = popup::render_popup_frame(
        f,
        theme,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        &format!(" {} ", t(lang, "cashOut")),
        theme.accent_border_style(),
    );

    let methods = &state.user.payment_methods;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(3), // Slider
            Constraint::Length(1), // Conversion rate
            Constraint::Length(1),
            Constraint::Length(1), // Payment heading
            Constraint::Length(methods.len().max(1) as u16),
            Constraint::Min(0),
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{}: ", t(lang, "amountToWithdraw")), theme.help_text_style()),
            Span::styled(utils::fmt_points(form.points), theme.header_style()),
            Span::styled(format!("  →  RM {}", form.cash_value()), theme.title_style()),
        ])),
        chunks[0],
    );

    let max = balance.max(CASH_OUT_MIN);
    let ratio = f64::from(form.points.min(max)) / f64::from(max);
    let (gauge_style, label) = if form.points > balance {
        (
            Style::default().fg(theme.negative),
            t(lang, "insufficientPoints").to_string(),
        )
    } else {
        (
            Style::default().fg(theme.primary),
            format!("{} / {}", form.points, balance),
        )
    };
    f.render_widget(
        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style()),
            )
            .gauge_style(gauge_style)
            .ratio(ratio.clamp(0.0, 1.0))
            .label(label),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{}: 100 pts = RM 10.00", t(lang, "conversionRate")),
            theme.help_text_style(),
        )),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(Span::styled(t(lang, "selectPaymentMethod"), theme.header_style())),
        chunks[4],
    );

    let method_lines: Vec<Line> = if methods.is_empty() {
        vec![Line::from(Span::styled(
            t(lang, "noPaymentMethods"),
            theme.help_text_style(),
        ))]
    } else {
        methods
            .iter()
            .map(|method| {
                let selected = form.payment.as_ref() == Some(&method.id);
                let marker = if selected { "● " } else { "○ " };
                let style = if selected {
                    theme.selection_style()
                } else {
                    theme.base_style()
                };
                Line::from(Span::styled(
                    format!(
                        "{}{} · {} ({})",
                        marker,
                        method.provider,
                        method.account_number,
                        method.account_holder
                    ),
                    style,
                ))
            })
            .collect()
    };
    f.render_widget(Paragraph::new(method_lines), chunks[5]);

    f.render_widget(
        Paragraph::new(Span::styled(
            "←/→: amount | ↑/↓: payment method | Enter: withdraw | Esc: close",
            theme.help_text_style(),
        ))
        .alignment(Alignment::Center),
        chunks[7],
    );
}

fn render_my_qr(f: &mut Frame, theme: &Theme, state: &AppState) {
    let inner = popup::render_popup_frame(
        f,
        theme,
        f.area(),
        layouts::popup_sizes::LARGE,
        " My QR Code ",
        theme.accent_border_style(),
    );

    let mut lines: Vec<Line> = qr_rows(state.user.id.as_str(), QR_SIZE)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, theme.base_style())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        state.user.name.clone(),
        theme.title_style(),
    )));
    lines.push(Line::from(Span::styled(
        "Show this code at a collection point to earn points",
        theme.help_text_style(),
    )));
    lines.push(Line::from(Span::styled(
        "Enter/Esc: close",
        theme.help_text_style(),
    )));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Decorative QR-like pattern, stable for a given seed. Three corners carry
/// finder squares; the rest is filled from an FNV-1a hash of the seed.
fn qr_rows(seed: &str, size: usize) -> Vec<String> {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }

    let in_finder = |row: usize, col: usize| -> Option<bool> {
        let corners = [(0, 0), (0, size - 7), (size - 7, 0)];
        corners.iter().find_map(|&(r0, c0)| {
            let (r, c) = (row.checked_sub(r0)?, col.checked_sub(c0)?);
            if r >= 7 || c >= 7 {
                return None;
            }
            let ring = r.min(c).min(6 - r).min(6 - c);
            Some(ring != 1)
        })
    };

    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let dark = in_finder(row, col).unwrap_or_else(|| {
                        let bit = hash
                            .rotate_left(((row * size + col) % 64) as u32)
                            .wrapping_mul((row as u64 + 1) * 31 + col as u64)
                            >> 63;
                        bit == 1
                    });
                    if dark {
                        "██"
                    } else {
                        "  "
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_pattern_is_stable_and_square() {
        let rows = qr_rows("u1", QR_SIZE);
        assert_eq!(rows.len(), QR_SIZE);
        assert!(rows.iter().all(|r| r.chars().count() == QR_SIZE * 2));
        assert_eq!(rows, qr_rows("u1", QR_SIZE));
    }

    #[test]
    fn qr_pattern_has_finder_corners() {
        let rows = qr_rows("u1", QR_SIZE);
        // Outer ring of the top-left finder is solid, the next ring is light
        assert!(rows[0].starts_with(&"██".repeat(7)));
        assert!(rows[1].starts_with("██          ██"));
    }
}
