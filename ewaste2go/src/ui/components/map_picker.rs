use ewaste_data::Coordinates;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use crate::state::forms::MapPicker;
use crate::ui::theme::Theme;

/// Simulated map with a movable pin. Grid y grows downward, canvas y
/// grows upward, so the pin is flipped when drawn.
pub fn render_map_picker(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    picker: &MapPicker,
    dropped: Option<Coordinates>,
    focused: bool,
) {
    let title = match dropped {
        Some(coordinates) => format!("Map ({})", coordinates),
        None if focused => "Map (arrows: move pin, Enter: drop)".to_string(),
        None => "Map".to_string(),
    };

    let border_style = if focused {
        theme.form_field_style(true)
    } else {
        theme.border_style()
    };

    let road = theme.muted;
    let pin_style = Style::default().fg(theme.negative);
    let (pin_x, pin_y) = (picker.x, 100.0 - picker.y);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(title, theme.form_field_style(focused))),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(move |ctx| {
            for offset in [20.0, 50.0, 80.0] {
                ctx.draw(&CanvasLine::new(0.0, offset, 100.0, offset, road));
                ctx.draw(&CanvasLine::new(offset, 0.0, offset, 100.0, road));
            }
            ctx.layer();
            ctx.print(pin_x, pin_y, Span::styled("◉", pin_style));
        });

    f.render_widget(canvas, area);
}
