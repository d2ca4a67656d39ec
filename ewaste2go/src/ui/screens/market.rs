use ewaste_data::MarketplaceAd;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::i18n::t;
use crate::state::forms::{ListingField, ListingForm};
use crate::state::{AppState, Scrollable};
use crate::ui::{
    components::{empty_state, form_field::FormField, help_bar, popup, screen_title},
    layouts,
    theme::{Theme, FORM_FIELD_HEIGHT, TABLE_COLUMN_SPACING},
};

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(f, title_area, theme, t(state.lang(), "sellEwaste"), None);
    render_content(f, content_area, theme, state);
    help_bar::render_help_bar(
        f,
        help_area,
        theme,
        "n: sell an item | c: call | e: email | d: directions | ?: help",
    );

    if let Some(form) = &state.market.listing {
        render_listing_form(f, theme, form);
    }
}

fn render_content(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let market = &state.market;

    if state.ads.is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            theme,
            "Buyers",
            "No buyers right now",
            Some("Press n to list your own item"),
        );
        return;
    }

    let (list_area, detail_area) = layouts::two_columns(area, 60);

    let header = Row::new(vec![
        Cell::from("Wanted"),
        Cell::from("Buyer"),
        Cell::from(Text::from("Price").right_aligned()),
    ])
    .style(theme.header_style())
    .underlined();

    let rows: Vec<Row> = state
        .ads
        .iter()
        .map(|ad| {
            Row::new(vec![
                Cell::from(ad.title.clone()),
                Cell::from(ad.company_name.clone()),
                Cell::from(Text::from(ad.price_range.clone()).right_aligned())
                    .style(Style::default().fg(theme.positive)),
            ])
        })
        .collect();

    let selected = market.selected_index(state.ads.len());
    market.table_state.borrow_mut().select(selected);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .column_spacing(TABLE_COLUMN_SPACING)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(format!("Buyers ({})", state.ads.len())),
    )
    .row_highlight_style(theme.selection_style());

    f.render_stateful_widget(table, list_area, &mut market.table_state.borrow_mut());

    if let Some(ad) = selected.and_then(|i| state.ads.get(i)) {
        render_detail(f, detail_area, theme, state, ad);
    }
}

fn render_detail(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState, ad: &MarketplaceAd) {
    let lang = state.lang();
    let label = |key: &str| Span::styled(format!("{:9}", key), theme.help_text_style());

    let lines = vec![
        Line::from(Span::styled(ad.title.clone(), theme.title_style())),
        Line::from(Span::styled(ad.price_range.clone(), theme.highlight_style())),
        Line::from(""),
        Line::from(ad.description.clone()),
        Line::from(""),
        Line::from(vec![label("Buyer"), Span::raw(ad.company_name.clone())]),
        Line::from(vec![label(t(lang, "phone")), Span::raw(ad.contact.phone.clone())]),
        Line::from(vec![label(t(lang, "email")), Span::raw(ad.contact.email.clone())]),
        Line::from(vec![label("Address"), Span::raw(ad.contact.address.clone())]),
        Line::from(vec![
            label("Posted"),
            Span::raw(ad.posted_date.format("%d %b %Y").to_string()),
        ]),
    ];

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title("Details"),
    );

    f.render_widget(detail, area);
}

fn render_listing_form(f: &mut Frame, theme: &Theme, form: &ListingForm) {
    let inner = popup::render_popup_frame(
        f,
        theme,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        " Sell Your Item ",
        theme.accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_FIELD_HEIGHT), // Image path
            Constraint::Length(1),                 // Preview status
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    FormField::new("Photo (file path, Enter to attach)", &form.image_path)
        .placeholder("~/Pictures/laptop.jpg")
        .focused(form.focused == ListingField::Image)
        .render(f, chunks[0], theme);

    let preview = match &form.image {
        Some(url) => Span::styled(format!("✓ Attached: {}", url), theme.title_style()),
        None => Span::styled("No photo attached (optional)", theme.help_text_style()),
    };
    f.render_widget(Paragraph::new(preview), chunks[1]);

    FormField::new("Title", &form.title)
        .placeholder("e.g. Old laptop, working")
        .focused(form.focused == ListingField::Title)
        .render(f, chunks[2], theme);
    FormField::new("Description", &form.description)
        .focused(form.focused == ListingField::Description)
        .render(f, chunks[3], theme);
    FormField::new("Price (RM)", &form.price)
        .placeholder("50")
        .focused(form.focused == ListingField::Price)
        .render(f, chunks[4], theme);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Tab: next field | Ctrl+S: list item | Ctrl+D: remove photo | Esc: cancel",
            theme.help_text_style(),
        ))
        .alignment(Alignment::Center),
        chunks[6],
    );
}
