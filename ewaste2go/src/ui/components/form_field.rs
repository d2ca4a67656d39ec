use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{theme::Theme, utils};

/// A bordered single-line input
pub struct FormField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown dimmed when value is empty
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Render the value as bullets (passwords)
    pub masked: bool,
}

impl<'a> FormField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            is_focused: false,
            masked: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = Vec::new();
        if self.value.is_empty() {
            if !self.is_focused {
                spans.push(Span::styled(self.placeholder, theme.help_text_style()));
            }
        } else if self.masked {
            spans.push(Span::raw(utils::mask(self.value)));
        } else {
            spans.push(Span::raw(self.value));
        }
        if self.is_focused {
            spans.push(Span::styled("▏", theme.form_field_style(true)));
        }

        let border_style = if self.is_focused {
            theme.form_field_style(true)
        } else {
            theme.border_style()
        };

        let input = Paragraph::new(Line::from(spans))
            .style(theme.form_field_style(false))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(Span::styled(self.label, theme.form_field_style(self.is_focused))),
            );

        f.render_widget(input, area);
    }
}

/// A bordered two-state selector, e.g. payment kind
pub fn render_toggle_field(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    options: [&str; 2],
    first_selected: bool,
    focused: bool,
) {
    let option = |text: &str, selected: bool| {
        if selected {
            Span::styled(format!("● {}", text), theme.title_style())
        } else {
            Span::styled(format!("○ {}", text), theme.help_text_style())
        }
    };

    let line = Line::from(vec![
        option(options[0], first_selected),
        Span::raw("   "),
        option(options[1], !first_selected),
    ]);

    let border_style = if focused {
        theme.form_field_style(true)
    } else {
        theme.border_style()
    };

    f.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(label, theme.form_field_style(focused))),
        ),
        area,
    );
}
