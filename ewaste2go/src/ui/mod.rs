pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::{view::TopLevel, view::View, AppState};
use ratatui::{widgets::Block, Frame};
use screens::*;
use theme::Theme;

/// Pure render dispatcher - routes to the screen for the current top level.
/// Reads state only; the theme is derived from the dark-mode setting on
/// every frame.
pub fn render_app(f: &mut Frame, state: &AppState) {
    let theme = Theme::from_dark_mode(state.settings.dark_mode);
    let area = f.area();

    f.render_widget(Block::default().style(theme.base_style()), area);

    match state.top_level() {
        TopLevel::Onboarding => onboarding::render(f, area, &theme, state),
        TopLevel::Auth => auth::render(f, area, &theme, state),
        TopLevel::Main(view) => {
            if view.is_full_screen() {
                render_view(f, area, &theme, state, view);
            } else {
                let (view_area, nav_area) = layouts::with_bottom_nav(area);
                render_view(f, view_area, &theme, state, view);
                components::bottom_nav::render_bottom_nav(
                    f,
                    nav_area,
                    &theme,
                    view,
                    state.lang(),
                );
            }
        }
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, &theme, state);
    }

    // Notices block all other input, so they sit above everything
    if let Some(notice) = &state.notice {
        components::notice::render_notice(f, &theme, notice);
    }
}

fn render_view(f: &mut Frame, area: ratatui::layout::Rect, theme: &Theme, state: &AppState, view: View) {
    match view {
        View::Home => home::render(f, area, theme, state),
        View::Points => points::render(f, area, theme, state),
        View::Market => market::render(f, area, theme, state),
        View::Rewards => rewards::render(f, area, theme, state),
        View::Profile => profile::render(f, area, theme, state),
        View::Guide => guide::render(f, area, theme, state),
        View::Schedule => schedule::render(f, area, theme, state),
        View::Tracking => tracking::render(f, area, theme, state),
    }
}
