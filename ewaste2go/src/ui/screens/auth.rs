use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::state::forms::{AuthField, AuthMode};
use crate::state::AppState;
use crate::ui::{
    components::{form_field::FormField, help_bar},
    layouts,
    theme::{Theme, FORM_FIELD_HEIGHT},
};

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let lang = state.lang();
    let form = &state.auth;
    let (heading, action, switch) = match form.mode {
        AuthMode::SignIn => (t(lang, "welcomeBack"), t(lang, "signIn"), t(lang, "signUp")),
        AuthMode::SignUp => (t(lang, "createAccount"), t(lang, "signUp"), t(lang, "signIn")),
    };

    let (_, content_area, help_area) = layouts::screen_layout(area);
    let column = layouts::centered_popup(60, 100, content_area);

    let fields = form.fields();
    let mut constraints = vec![
        Constraint::Length(1), // Heading
        Constraint::Length(1), // Brand
        Constraint::Length(1),
    ];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FORM_FIELD_HEIGHT)));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1)); // Submit hint
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    f.render_widget(
        Paragraph::new(Span::styled(heading, theme.title_style())).alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled("e-waste2go", theme.help_text_style()))
            .alignment(Alignment::Center),
        chunks[1],
    );

    for (i, field) in fields.iter().enumerate() {
        let (label, value) = match field {
            AuthField::FullName => ("Full Name", form.full_name.as_str()),
            AuthField::Email => ("Email", form.email.as_str()),
            AuthField::Password => ("Password", form.password.as_str()),
        };
        FormField::new(label, value)
            .focused(form.focused == *field)
            .masked(*field == AuthField::Password)
            .render(f, chunks[3 + i], theme);
    }

    let submit = Line::from(vec![
        Span::styled(format!("[Enter] {}", action), theme.highlight_style()),
        Span::styled(format!("   [Ctrl+T] {}", switch), theme.help_text_style()),
    ]);
    f.render_widget(
        Paragraph::new(submit).alignment(Alignment::Center),
        chunks[4 + fields.len()],
    );

    help_bar::render_help_bar(
        f,
        help_area,
        theme,
        "Tab: next field | Enter: submit | Ctrl+T: switch | Ctrl+C: quit",
    );
}
