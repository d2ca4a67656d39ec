use ewaste_data::PaymentKind;
use itertools::Itertools;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::i18n::{t, Lang};
use crate::links;
use crate::state::forms::{
    LocationField, LocationForm, PartnerField, PartnerForm, PaymentField, PaymentForm,
    ProfileField, ProfileForm,
};
use crate::state::{AppState, ProfileMenuItem, ProfileModal, Scrollable, SettingsRow};
use crate::ui::{
    components::{
        empty_state, form_field::render_toggle_field, form_field::FormField, help_bar,
        map_picker, popup, screen_title,
    },
    layouts,
    theme::{Theme, FORM_FIELD_HEIGHT, SUMMARY_CARD_HEIGHT},
    utils,
};

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(f, title_area, theme, t(lang, "profile"), None);

    let (card_area, menu_area) = layouts::card_over_content(content_area, SUMMARY_CARD_HEIGHT);
    render_user_card(f, card_area, theme, state);
    render_menu(f, menu_area, theme, state);

    help_bar::render_help_bar(
        f,
        help_area,
        theme,
        "j/k: move | Enter: open | ?: help",
    );

    if let Some(modal) = &state.profile.modal {
        render_modal(f, theme, state, modal);
    }
}

fn render_user_card(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let user = &state.user;

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("({}) ", user.initial()), theme.highlight_style()),
            Span::styled(user.name.clone(), theme.title_style()),
            Span::styled(
                format!("  {}  {}", user.email, user.phone.as_deref().unwrap_or("")),
                theme.help_text_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", t(lang, "totalPickups")), theme.help_text_style()),
            Span::styled(user.stats.total_pickups.to_string(), theme.header_style()),
            Span::raw("   "),
            Span::styled(format!("{} ", t(lang, "itemsRecycled")), theme.help_text_style()),
            Span::styled(user.stats.items_recycled.to_string(), theme.header_style()),
            Span::raw("   "),
            Span::styled(format!("{} ", t(lang, "rewardPoints")), theme.help_text_style()),
            Span::styled(user.stats.reward_points.to_string(), theme.header_style()),
        ]),
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

fn render_menu(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let profile = &state.profile;

    let rows: Vec<Row> = ProfileMenuItem::ALL
        .iter()
        .map(|item| {
            let style = if *item == ProfileMenuItem::SignOut {
                Style::default().fg(theme.negative)
            } else {
                theme.base_style()
            };
            Row::new(vec![Cell::from(t(lang, item.label_key())).style(style)])
        })
        .collect();

    let selected = profile.selected_index(ProfileMenuItem::ALL.len());
    profile.table_state.borrow_mut().select(selected);

    let table = Table::new(rows, [Constraint::Percentage(100)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        )
        .row_highlight_style(theme.selection_style())
        .highlight_symbol("› ");

    f.render_stateful_widget(table, area, &mut profile.table_state.borrow_mut());
}

fn render_modal(f: &mut Frame, theme: &Theme, state: &AppState, modal: &ProfileModal) {
    let lang = state.lang();
    match modal {
        ProfileModal::EditProfile(form) => render_edit_profile(f, theme, lang, form),
        ProfileModal::SavedLocations {
            adding: Some(form), ..
        } => render_add_location(f, theme, lang, form),
        ProfileModal::SavedLocations {
            selected,
            adding: None,
        } => render_saved_locations(f, theme, state, *selected),
        ProfileModal::PaymentMethods {
            adding: Some(form), ..
        } => render_add_payment(f, theme, lang, form),
        ProfileModal::PaymentMethods {
            selected,
            adding: None,
        } => render_payment_methods(f, theme, state, *selected),
        ProfileModal::Settings { selected } => render_settings(f, theme, state, *selected),
        ProfileModal::Privacy => render_privacy(f, theme, lang),
        ProfileModal::History => render_history(f, theme, state),
        ProfileModal::Partnership { form, submitted } => {
            render_partnership(f, theme, lang, form, *submitted)
        }
        ProfileModal::Support { selected, expanded } => {
            render_support(f, theme, state, *selected, *expanded)
        }
    }
}

fn modal_frame(f: &mut Frame, theme: &Theme, size: (u16, u16), title: &str) -> Rect {
    popup::render_popup_frame(
        f,
        theme,
        f.area(),
        size,
        &format!(" {} ", title),
        theme.accent_border_style(),
    )
}

/// Split `area` into `fields` form rows, a spacer and a one-line hint
fn form_rows(area: Rect, fields: usize) -> std::rc::Rc<[Rect]> {
    let mut constraints = vec![Constraint::Length(FORM_FIELD_HEIGHT); fields];
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
}

fn render_hint(f: &mut Frame, area: Rect, theme: &Theme, text: &str) {
    f.render_widget(
        Paragraph::new(Span::styled(text, theme.help_text_style())).alignment(Alignment::Center),
        area,
    );
}

fn render_edit_profile(f: &mut Frame, theme: &Theme, lang: Lang, form: &ProfileForm) {
    let inner = modal_frame(f, theme, layouts::popup_sizes::MEDIUM, t(lang, "editProfile"));
    let rows = form_rows(inner, 3);

    FormField::new(t(lang, "name"), &form.name)
        .focused(form.focused == ProfileField::Name)
        .render(f, rows[0], theme);
    FormField::new(t(lang, "email"), &form.email)
        .focused(form.focused == ProfileField::Email)
        .render(f, rows[1], theme);
    FormField::new(t(lang, "phone"), &form.phone)
        .placeholder("+60 12-345 6789")
        .focused(form.focused == ProfileField::Phone)
        .render(f, rows[2], theme);

    render_hint(
        f,
        rows[4],
        theme,
        &format!("Enter: {} | Esc: cancel", t(lang, "saveChanges")),
    );
}

fn render_saved_locations(f: &mut Frame, theme: &Theme, state: &AppState, selected: usize) {
    let lang = state.lang();
    let inner = modal_frame(f, theme, layouts::popup_sizes::LARGE, t(lang, "savedLocations"));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let locations = &state.user.saved_locations;
    if locations.is_empty() {
        empty_state::render_empty_state(
            f,
            chunks[0],
            theme,
            t(lang, "myLocations"),
            "No saved locations",
            Some("Press n to drop a pin"),
        );
    } else {
        let items: Vec<ListItem> = locations
            .iter()
            .enumerate()
            .map(|(i, location)| {
                let style = if i == selected {
                    theme.selection_style()
                } else {
                    theme.base_style()
                };
                ListItem::new(vec![
                    Line::from(Span::styled(location.name.clone(), theme.header_style())),
                    Line::from(location.address.clone()),
                    Line::from(Span::styled(
                        location.coordinates.to_string(),
                        theme.help_text_style(),
                    )),
                ])
                .style(style)
            })
            .collect();
        f.render_widget(List::new(items), chunks[0]);
    }

    render_hint(
        f,
        chunks[1],
        theme,
        &format!(
            "n: {} | d: delete | Enter: directions | Esc: close",
            t(lang, "addNewLocation")
        ),
    );
}

fn render_add_location(f: &mut Frame, theme: &Theme, lang: Lang, form: &LocationForm) {
    let inner = modal_frame(f, theme, layouts::popup_sizes::LARGE, t(lang, "addNewLocation"));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(1),
        ])
        .split(inner);

    map_picker::render_map_picker(
        f,
        chunks[0],
        theme,
        &form.picker,
        form.coordinates,
        form.focused == LocationField::Map,
    );
    FormField::new(t(lang, "name"), &form.name)
        .placeholder("New Location")
        .focused(form.focused == LocationField::Name)
        .render(f, chunks[1], theme);
    FormField::new("Address", &form.address)
        .placeholder("Drop a pin to fill in")
        .focused(form.focused == LocationField::Address)
        .render(f, chunks[2], theme);

    render_hint(
        f,
        chunks[3],
        theme,
        "Tab: next field | Ctrl+S: save | Esc: cancel",
    );
}

fn render_payment_methods(f: &mut Frame, theme: &Theme, state: &AppState, selected: usize) {
    let lang = state.lang();
    let inner = modal_frame(f, theme, layouts::popup_sizes::MEDIUM, t(lang, "paymentMethods"));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let methods = &state.user.payment_methods;
    if methods.is_empty() {
        empty_state::render_empty_state(
            f,
            chunks[0],
            theme,
            t(lang, "paymentMethods"),
            t(lang, "noPaymentMethods"),
            Some("Press n to add one"),
        );
    } else {
        let items: Vec<ListItem> = methods
            .iter()
            .enumerate()
            .map(|(i, method)| {
                let style = if i == selected {
                    theme.selection_style()
                } else {
                    theme.base_style()
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(method.provider.clone(), theme.header_style()),
                        Span::styled(
                            format!("  {}", payment_kind_label(lang, method.kind)),
                            theme.help_text_style(),
                        ),
                    ]),
                    Line::from(format!(
                        "{} · {}",
                        method.account_number, method.account_holder
                    )),
                ])
                .style(style)
            })
            .collect();
        f.render_widget(List::new(items), chunks[0]);
    }

    render_hint(
        f,
        chunks[1],
        theme,
        &format!("n: {} | d: remove | Esc: close", t(lang, "addPaymentMethod")),
    );
}

fn payment_kind_label(lang: Lang, kind: PaymentKind) -> &'static str {
    match kind {
        PaymentKind::Bank => t(lang, "bankTransfer"),
        PaymentKind::Ewallet => t(lang, "ewallet"),
    }
}

fn render_add_payment(f: &mut Frame, theme: &Theme, lang: Lang, form: &PaymentForm) {
    let inner = modal_frame(f, theme, layouts::popup_sizes::MEDIUM, t(lang, "addPaymentMethod"));
    let rows = form_rows(inner, 4);

    render_toggle_field(
        f,
        rows[0],
        theme,
        "Type",
        [t(lang, "ewallet"), t(lang, "bankTransfer")],
        form.kind == PaymentKind::Ewallet,
        form.focused == PaymentField::Kind,
    );

    let provider_label = match form.kind {
        PaymentKind::Bank => t(lang, "bankName"),
        PaymentKind::Ewallet => t(lang, "ewalletProvider"),
    };
    FormField::new(provider_label, &form.provider)
        .focused(form.focused == PaymentField::Provider)
        .render(f, rows[1], theme);
    FormField::new(t(lang, "accountNumber"), &form.account_number)
        .focused(form.focused == PaymentField::AccountNumber)
        .render(f, rows[2], theme);
    FormField::new(t(lang, "accountHolder"), &form.account_holder)
        .focused(form.focused == PaymentField::AccountHolder)
        .render(f, rows[3], theme);

    render_hint(
        f,
        rows[5],
        theme,
        &format!("Enter: {} | Esc: cancel", t(lang, "saveMethod")),
    );
}

fn render_settings(f: &mut Frame, theme: &Theme, state: &AppState, selected: usize) {
    let lang = state.lang();
    let settings = &state.settings;
    let inner = modal_frame(f, theme, layouts::popup_sizes::MEDIUM, t(lang, "appSettings"));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = SettingsRow::ALL
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let (label, value) = match row {
                SettingsRow::DarkMode => (t(lang, "darkMode"), utils::toggle_label(settings.dark_mode)),
                SettingsRow::Notifications => (
                    t(lang, "notifications"),
                    utils::toggle_label(settings.notifications),
                ),
                SettingsRow::LocationTracking => (
                    "Location Tracking",
                    utils::toggle_label(settings.location_tracking),
                ),
                SettingsRow::Language => (t(lang, "language"), settings.lang.label()),
                SettingsRow::Privacy => (t(lang, "privacy"), "›"),
            };
            let style = if i == selected {
                theme.selection_style()
            } else {
                theme.base_style()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:24}", label)),
                Span::styled(value, theme.highlight_style()),
            ]))
            .style(style)
        })
        .collect();

    f.render_widget(List::new(items), chunks[0]);
    render_hint(f, chunks[1], theme, "j/k: move | Enter: toggle | Esc: close");
}

fn render_privacy(f: &mut Frame, theme: &Theme, lang: Lang) {
    let inner = modal_frame(f, theme, layouts::popup_sizes::MEDIUM, t(lang, "privacy"));

    let text = vec![
        Line::from(Span::styled("Your data stays on this device", theme.header_style())),
        Line::from(""),
        Line::from(
            "Pickups, locations and payment details live only for this session. \
             Nothing is sent to a server and nothing is kept after you quit.",
        ),
        Line::from(""),
        Line::from(
            "Location tracking only shows where your driver is on a simulated map. \
             Your own position is never read.",
        ),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).style(theme.base_style()),
        chunks[0],
    );
    render_hint(f, chunks[1], theme, "Esc: back to settings");
}

fn render_history(f: &mut Frame, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let inner = modal_frame(f, theme, layouts::popup_sizes::LARGE, t(lang, "pickupHistory"));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    if state.pickups.is_empty() {
        empty_state::render_empty_state(
            f,
            chunks[0],
            theme,
            t(lang, "pickupHistory"),
            "No pickups yet",
            None,
        );
    } else {
        let items: Vec<ListItem> = state
            .pickups
            .iter()
            .map(|pickup| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} {}  ", pickup.date, pickup.time), theme.header_style()),
                        utils::status_span(pickup.status, theme),
                    ]),
                    Line::from(pickup.items.iter().join(", ")),
                    Line::from(Span::styled(
                        pickup.location.address.clone(),
                        theme.help_text_style(),
                    )),
                ])
            })
            .collect();
        f.render_widget(List::new(items), chunks[0]);
    }

    render_hint(f, chunks[1], theme, "Esc: close");
}

fn render_partnership(
    f: &mut Frame,
    theme: &Theme,
    lang: Lang,
    form: &PartnerForm,
    submitted: bool,
) {
    let inner = modal_frame(
        f,
        theme,
        layouts::popup_sizes::LARGE,
        t(lang, "partnershipProgram"),
    );

    if submitted {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Application Submitted!", theme.title_style())),
            Line::from(""),
            Line::from("Our partnership team will contact you within 2-3 business days."),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );
        render_hint(f, chunks[1], theme, "Enter/Esc: close");
        return;
    }

    let (pitch_area, form_area) = layouts::two_columns(inner, 40);

    let benefit = |title: &str, desc: &str| {
        vec![
            Line::from(Span::styled(format!("✓ {}", t(lang, title)), theme.header_style())),
            Line::from(Span::styled(t(lang, desc).to_string(), theme.help_text_style())),
        ]
    };
    let mut pitch = vec![
        Line::from(Span::styled(t(lang, "partnerHeroTitle"), theme.title_style())),
        Line::from(t(lang, "partnerHeroDesc")),
        Line::from(""),
        Line::from(Span::styled(t(lang, "partnershipBenefits"), theme.highlight_style())),
    ];
    pitch.extend(benefit("visibility", "visibilityDesc"));
    pitch.extend(benefit("marketingSupport", "marketingDesc"));
    pitch.extend(benefit("userBaseAccess", "userBaseDesc"));
    pitch.extend(benefit("dataInsights", "dataDesc"));

    f.render_widget(
        Paragraph::new(pitch).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(theme.border_style()),
        ),
        pitch_area,
    );

    let rows = form_rows(form_area, 5);
    let fields = [
        (PartnerField::Company, t(lang, "companyName"), &form.company),
        (PartnerField::ContactName, t(lang, "contactPerson"), &form.contact_name),
        (PartnerField::Email, t(lang, "email"), &form.email),
        (PartnerField::Phone, t(lang, "phone"), &form.phone),
        (PartnerField::Message, t(lang, "message"), &form.message),
    ];
    for (i, (field, label, value)) in fields.into_iter().enumerate() {
        let placeholder = if field == PartnerField::Message {
            t(lang, "tellUsInterest")
        } else {
            ""
        };
        FormField::new(label, value)
            .placeholder(placeholder)
            .focused(form.focused == field)
            .render(f, rows[i], theme);
    }

    render_hint(
        f,
        rows[6],
        theme,
        &format!("Enter: {} | Esc: cancel", t(lang, "submitApplication")),
    );
}

fn render_support(
    f: &mut Frame,
    theme: &Theme,
    state: &AppState,
    selected: usize,
    expanded: Option<usize>,
) {
    let lang = state.lang();
    let inner = modal_frame(f, theme, layouts::popup_sizes::LARGE, t(lang, "helpSupport"));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let contact = vec![
        Line::from(Span::styled(t(lang, "contactUs"), theme.header_style())),
        Line::from(vec![
            Span::styled("[c] ", theme.highlight_style()),
            Span::raw(format!("{}: {}", t(lang, "callUs"), links::SUPPORT_PHONE_DISPLAY)),
        ]),
        Line::from(vec![
            Span::styled("[e] ", theme.highlight_style()),
            Span::raw(format!("{}: {}", t(lang, "emailSupport"), links::SUPPORT_EMAIL)),
        ]),
        Line::from(vec![
            Span::styled("[w] ", theme.highlight_style()),
            Span::raw(t(lang, "whatsapp")),
        ]),
        Line::from(Span::styled(
            format!("{}: Mon-Fri, 9am - 6pm", t(lang, "supportHours")),
            theme.help_text_style(),
        )),
    ];
    f.render_widget(Paragraph::new(contact), chunks[0]);

    let items: Vec<ListItem> = state
        .faq
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let open = expanded == Some(i);
            let marker = if open { "▾ " } else { "▸ " };
            let mut lines = vec![Line::from(Span::styled(
                format!("{}{}", marker, entry.question),
                theme.header_style(),
            ))];
            if open {
                lines.push(Line::from(entry.answer.clone()));
            }
            let style = if i == selected {
                theme.selection_style()
            } else {
                theme.base_style()
            };
            ListItem::new(lines).style(style)
        })
        .collect();

    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border_style())
                .title(t(lang, "faq")),
        ),
        chunks[1],
    );

    render_hint(
        f,
        chunks[2],
        theme,
        "j/k: move | Enter: expand | Esc: close",
    );
}
