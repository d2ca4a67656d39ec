use ewaste_data::CollectionPoint;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::i18n::t;
use crate::links;
use crate::state::{search, AppState, InputMode, Scrollable};
use crate::ui::{
    components::{empty_state, filter_input, help_bar, screen_title},
    layouts,
    theme::{Theme, TABLE_COLUMN_SPACING},
};

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let points = &state.points;
    let title = t(state.lang(), "collectionPoints");
    let editing = points.input_mode == InputMode::Filter;

    // Keep the filter bar up while a query is applied, so the user can see
    // why the list is short
    if editing || !points.filter_query.is_empty() {
        let (title_area, filter_area, content_area, help_area) =
            layouts::screen_layout_with_filter(area);

        screen_title::render_screen_title(f, title_area, theme, title, None);
        filter_input::render_filter_input(f, filter_area, theme, &points.filter_query, editing);
        render_content(f, content_area, theme, state);
        help_bar::render_help_bar(f, help_area, theme, help_bar::HELP_TEXT_DEFAULT);
    } else {
        let (title_area, content_area, help_area) = layouts::screen_layout(area);

        screen_title::render_screen_title(f, title_area, theme, title, None);
        render_content(f, content_area, theme, state);
        help_bar::render_help_bar(
            f,
            help_area,
            theme,
            "/: filter | c: call | e: email | Enter: directions | ?: help",
        );
    }
}

fn render_content(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let points = &state.points;
    let sections = search::point_sections(&state.collection_points, &points.filter_query);

    if sections.is_empty() {
        let message = if points.filter_query.is_empty() {
            "No collection points found"
        } else {
            "No matching collection points"
        };
        empty_state::render_empty_state(
            f,
            area,
            theme,
            "Collection Points",
            message,
            Some("Esc clears the filter"),
        );
        return;
    }

    let (list_area, detail_area) = layouts::two_columns(area, 55);

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Type"),
        Cell::from("Hours"),
    ])
    .style(theme.header_style())
    .underlined();

    // Government points first, then everyone else, matching selection order
    let rows: Vec<Row> = sections
        .government
        .iter()
        .chain(sections.partners.iter())
        .map(|point| {
            let kind_style = if point.is_government() {
                theme.title_style()
            } else {
                theme.help_text_style()
            };
            Row::new(vec![
                Cell::from(point.name.clone()),
                Cell::from(Span::styled(point.kind.label(), kind_style)),
                Cell::from(point.operating_hours.clone()),
            ])
        })
        .collect();

    let title = if points.filter_query.is_empty() {
        format!(
            "Government ({}) · Partners ({})",
            sections.government.len(),
            sections.partners.len()
        )
    } else {
        format!(
            "Government ({}) · Partners ({}) filtered",
            sections.government.len(),
            sections.partners.len()
        )
    };

    // Clamp before drawing in case the list shrank under the selection
    let selected = points.selected_index(sections.len());
    points.table_state.borrow_mut().select(selected);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(18),
            Constraint::Percentage(32),
        ],
    )
    .header(header)
    .column_spacing(TABLE_COLUMN_SPACING)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(title),
    )
    .row_highlight_style(theme.selection_style());

    f.render_stateful_widget(table, list_area, &mut points.table_state.borrow_mut());

    if let Some(point) = selected.and_then(|i| sections.get(i)) {
        render_detail(f, detail_area, theme, state, point);
    }
}

fn render_detail(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    state: &AppState,
    point: &CollectionPoint,
) {
    let lang = state.lang();
    let label = |key: &str| Span::styled(format!("{:10}", key), theme.help_text_style());

    let mut lines = vec![
        Line::from(Span::styled(point.name.clone(), theme.title_style())),
        Line::from(""),
    ];
    if let Some(description) = &point.description {
        lines.push(Line::from(description.clone()));
        lines.push(Line::from(""));
    }
    lines.extend([
        Line::from(vec![label("Address"), Span::raw(point.address.clone())]),
        Line::from(vec![label("Hours"), Span::raw(point.operating_hours.clone())]),
        Line::from(vec![label(t(lang, "phone")), Span::raw(point.phone.clone())]),
        Line::from(vec![label(t(lang, "email")), Span::raw(point.email.clone())]),
        Line::from(vec![
            label("Accepts"),
            Span::raw(point.accepted_items.join(", ")),
        ]),
        Line::from(""),
        Line::from(Span::styled("Map preview", theme.header_style())),
        Line::from(Span::styled(
            links::maps_embed(point.coordinates, links::MAP_PREVIEW_ZOOM),
            theme.help_text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "[c] {}  [e] {}  [Enter] {}  [m] Map",
                t(lang, "call"),
                t(lang, "email"),
                t(lang, "directions")
            ),
            theme.highlight_style(),
        )),
    ]);

    let border_style = if point.is_dbkk {
        theme.accent_border_style()
    } else {
        theme.border_style()
    };

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(point.kind.label()),
    );

    f.render_widget(detail, area);
}
