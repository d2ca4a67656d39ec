use ewaste_data::Pickup;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Gauge, Paragraph,
    },
};

use crate::i18n::t;
use crate::state::{view::View, AppState};
use crate::tracking::{self, TrackingProgress, PROGRESS_END, PROGRESS_START};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts,
    theme::Theme,
    utils,
};

const SHEET_HEIGHT: u16 = 12;
const ROUTE_SAMPLES: usize = 32;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    let title = t(state.lang(), View::Tracking.title_key());
    screen_title::render_screen_title(f, title_area, theme, title, None);
    help_bar::render_help_bar(
        f,
        help_area,
        theme,
        "c: call driver | o: open in maps | Esc: back",
    );

    let Some(pickup) = state.tracked_pickup() else {
        empty_state::render_empty_state(
            f,
            content_area,
            theme,
            title,
            "No pickup is being tracked",
            Some("Press t on the home screen to track your active pickup"),
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(SHEET_HEIGHT)])
        .split(content_area);

    render_map(f, chunks[0], theme, pickup, state.tracking);
    render_driver_sheet(f, chunks[1], theme, pickup, state.tracking);
}

/// Route and truck on a simulated map. Positions are percentages measured
/// from the top-left, the canvas measures y upward.
fn render_map(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    pickup: &Pickup,
    progress: TrackingProgress,
) {
    let route: Vec<(f64, f64)> = tracking::route_points(ROUTE_SAMPLES)
        .into_iter()
        .map(|(x, y)| (x, 100.0 - y))
        .collect();
    let (truck_x, truck_y) = progress.marker_position();
    let truck = (truck_x, 100.0 - truck_y);

    let route_color = theme.border_info;
    let road_color = theme.muted;
    let truck_style = Style::default().fg(theme.primary).add_modifier(Modifier::BOLD);
    let pin_style = Style::default().fg(theme.negative);
    let destination = pickup.location.name.clone();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(pickup.tracking_id.clone().unwrap_or_else(|| pickup.id.to_string())),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(move |ctx| {
            ctx.draw(&CanvasLine::new(0.0, 30.0, 100.0, 30.0, road_color));
            ctx.draw(&CanvasLine::new(60.0, 0.0, 60.0, 100.0, road_color));
            for pair in route.windows(2) {
                ctx.draw(&CanvasLine::new(
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1,
                    route_color,
                ));
            }
            ctx.layer();
            if let (Some(start), Some(end)) = (route.first(), route.last()) {
                ctx.print(start.0, start.1, Span::styled("● Depot", pin_style));
                ctx.print(end.0, end.1, Span::styled(format!("◉ {}", destination), pin_style));
            }
            ctx.print(truck.0, truck.1, Span::styled("■", truck_style));
        });

    f.render_widget(canvas, area);
}

fn render_driver_sheet(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    pickup: &Pickup,
    progress: TrackingProgress,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // ETA
            Constraint::Length(2), // Driver
            Constraint::Length(1), // Progress
            Constraint::Length(1),
            Constraint::Length(2), // Steps
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Arriving in 15 mins", theme.title_style()),
                Span::styled("  On Time", Style::default().fg(theme.positive)),
            ]),
            Line::from(Span::styled("Driver is on the way", theme.help_text_style())),
        ]),
        chunks[0],
    );

    let driver = pickup.driver_name.as_deref().unwrap_or("Driver Assigned");
    let vehicle = pickup.driver_vehicle.as_deref().unwrap_or("Truck");
    f.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(driver, theme.header_style()),
                Span::styled("  ★ 4.9", theme.highlight_style()),
            ]),
            Line::from(vec![
                Span::styled(vehicle, theme.help_text_style()),
                Span::styled(
                    format!("   [c] Call {}", pickup.driver_first_name().unwrap_or("driver")),
                    theme.highlight_style(),
                ),
            ]),
        ]),
        chunks[1],
    );

    let span = f64::from(PROGRESS_END - PROGRESS_START);
    let done = f64::from(progress.value().saturating_sub(PROGRESS_START)) / span;
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme.primary))
            .ratio(done.clamp(0.0, 1.0))
            .label(format!("{}% of route", progress.value())),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Current Status  ", theme.help_text_style()),
                Span::styled(
                    format!("Driver {}", utils::status_label(pickup.status)),
                    theme.base_style(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Destination     ", theme.help_text_style()),
                Span::raw(format!(
                    "{}, {}",
                    pickup.location.name,
                    utils::truncate(&pickup.location.address, 48)
                )),
            ]),
        ]),
        chunks[4],
    );
}
