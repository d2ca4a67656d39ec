use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::i18n::t;
use crate::state::forms::{LocationField, LocationForm, ScheduleField};
use crate::state::AppState;
use crate::ui::{
    components::{
        delete_confirmation, empty_state, form_field::FormField, help_bar, map_picker, popup,
        screen_title,
    },
    layouts,
    theme::{Theme, FORM_FIELD_HEIGHT},
};

const DRIVER_STATUS_HEIGHT: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let schedule = &state.schedule;
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(f, title_area, theme, t(lang, "schedulePickup"), None);

    let (form_area, side_area) = layouts::two_columns(content_area, 60);
    render_form(f, form_area, theme, state);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(DRIVER_STATUS_HEIGHT)])
        .split(side_area);
    render_locations(f, side[0], theme, state);
    render_driver_status(f, side[1], theme, schedule.driver_arrived);

    let hint = match schedule.form.focused {
        ScheduleField::Map => "arrows: move pin | Enter: drop pin | Tab: next | Ctrl+S: confirm",
        ScheduleField::Locations => {
            "Enter: use | n: new | e: edit | d: delete | o: directions | Ctrl+S: confirm"
        }
        _ => "Tab: next field | Enter: confirm pickup | Esc: cancel",
    };
    help_bar::render_help_bar(f, help_area, theme, hint);

    if let Some(editor) = &schedule.editor {
        render_editor(f, theme, editor);
    }

    if let Some(id) = &schedule.pending_delete {
        if let Some(location) = state.user.location(id) {
            delete_confirmation::render_delete_confirmation(f, theme, &location.name);
        }
    }
}

fn render_form(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let form = &state.schedule.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Min(6),
        ])
        .split(area);

    let (date_area, time_area) = layouts::two_columns(chunks[1], 50);

    FormField::new("Items (comma separated)", &form.items)
        .placeholder("Laptop, Phone, Cables")
        .focused(form.focused == ScheduleField::Items)
        .render(f, chunks[0], theme);
    FormField::new("Date", &form.date)
        .placeholder("2026-10-20")
        .focused(form.focused == ScheduleField::Date)
        .render(f, date_area, theme);
    FormField::new("Time", &form.time)
        .placeholder("10:00 AM")
        .focused(form.focused == ScheduleField::Time)
        .render(f, time_area, theme);
    FormField::new("Pickup Address", &form.address)
        .placeholder("Type, pick a saved location or drop a pin")
        .focused(form.focused == ScheduleField::Address)
        .render(f, chunks[2], theme);

    let confirm = Paragraph::new(Line::from(vec![
        Span::styled("[Ctrl+S] Confirm Pickup", theme.title_style()),
        Span::styled("   [Esc] Cancel", theme.help_text_style()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    f.render_widget(confirm, chunks[3]);

    map_picker::render_map_picker(
        f,
        chunks[4],
        theme,
        &form.picker,
        form.coordinates,
        form.focused == ScheduleField::Map,
    );
}

fn render_locations(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let schedule = &state.schedule;
    let focused = schedule.form.focused == ScheduleField::Locations;
    let locations = &state.user.saved_locations;

    if locations.is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            theme,
            t(lang, "myLocations"),
            "No saved locations",
            Some("Tab here and press n to add one"),
        );
        return;
    }

    let items: Vec<ListItem> = locations
        .iter()
        .enumerate()
        .map(|(i, location)| {
            let style = if focused && i == schedule.location_index {
                theme.selection_style()
            } else {
                theme.base_style()
            };
            ListItem::new(vec![
                Line::from(Span::styled(location.name.clone(), theme.header_style())),
                Line::from(Span::styled(
                    location.address.clone(),
                    theme.help_text_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let border_style = if focused {
        theme.form_field_style(true)
    } else {
        theme.border_style()
    };

    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(t(lang, "myLocations")),
        ),
        area,
    );
}

fn render_driver_status(f: &mut Frame, area: Rect, theme: &Theme, arrived: bool) {
    let (text, style) = if arrived {
        ("Driver has arrived!", theme.title_style())
    } else {
        ("Waiting for driver", theme.help_text_style())
    };

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(text, style)),
            Line::from(Span::styled("[a] toggle (demo)", theme.help_text_style())),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title("Driver"),
        ),
        area,
    );
}

fn render_editor(f: &mut Frame, theme: &Theme, editor: &LocationForm) {
    let title = if editor.editing.is_some() {
        " Edit Location "
    } else {
        " Add Location "
    };
    let inner = popup::render_popup_frame(
        f,
        theme,
        f.area(),
        layouts::popup_sizes::LARGE,
        title,
        theme.accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(inner);

    FormField::new("Name", &editor.name)
        .placeholder("Home, Office, ...")
        .focused(editor.focused == LocationField::Name)
        .render(f, chunks[0], theme);
    FormField::new("Address", &editor.address)
        .focused(editor.focused == LocationField::Address)
        .render(f, chunks[1], theme);
    map_picker::render_map_picker(
        f,
        chunks[2],
        theme,
        &editor.picker,
        editor.coordinates,
        editor.focused == LocationField::Map,
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "Tab: next field | Ctrl+S: save | Esc: cancel",
            theme.help_text_style(),
        ))
        .alignment(Alignment::Center),
        chunks[3],
    );
}
