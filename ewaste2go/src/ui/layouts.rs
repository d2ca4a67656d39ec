//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    BOTTOM_NAV_HEIGHT, FILTER_INPUT_HEIGHT, HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT,
};

/// Split the terminal into the view area and the bottom navigation bar.
///
/// Returns (view_area, nav_area)
pub fn with_bottom_nav(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(BOTTOM_NAV_HEIGHT)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Screen layout with filter input visible.
///
/// Returns a tuple of (title_area, filter_area, content_area, help_area)
pub fn screen_layout_with_filter(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(FILTER_INPUT_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Title row split into the title and a right-aligned status slot.
///
/// Returns (title_area, status_area)
pub fn title_with_status(area: Rect, status_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(status_width)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Content split into a fixed-height header card and the rest.
///
/// Returns (card_area, rest_area)
pub fn card_over_content(area: Rect, card_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(card_height), Constraint::Min(3)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Two side-by-side columns.
///
/// Returns (left_area, right_area)
pub fn two_columns(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Small popup (50% x 30%) - for simple confirmations and notices
    pub const SMALL: (u16, u16) = (50, 30);

    /// Medium popup (60% x 60%) - for short forms
    pub const MEDIUM: (u16, u16) = (60, 60);

    /// Large popup (80% x 80%) - for help screens and complex dialogs
    pub const LARGE: (u16, u16) = (80, 80);
}
