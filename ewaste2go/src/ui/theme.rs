//! Theme colors, layout constants and style functions.
//!
//! The palette is chosen per frame from the dark-mode setting, so every
//! render function takes a `&Theme` instead of reading global constants.

use ewaste_data::PickupStatus;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of filter input when visible
pub const FILTER_INPUT_HEIGHT: u16 = 3;

/// Height of the bottom navigation bar
pub const BOTTOM_NAV_HEIGHT: u16 = 3;

/// Height of a single bordered form input
pub const FORM_FIELD_HEIGHT: u16 = 3;

/// Standard column spacing for tables
pub const TABLE_COLUMN_SPACING: u16 = 2;

/// Height of summary cards
pub const SUMMARY_CARD_HEIGHT: u16 = 4;

// =============================================================================
// Palette
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    /// Brand green, used for titles and primary actions
    pub primary: Color,
    pub muted: Color,
    pub selection_bg: Color,
    pub header: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub border: Color,
    pub border_info: Color,
    pub border_danger: Color,
    pub input_focused: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::Reset,
        text: Color::Black,
        primary: Color::Green,
        muted: Color::DarkGray,
        selection_bg: Color::Indexed(254),
        header: Color::Indexed(28),
        positive: Color::Green,
        negative: Color::Red,
        warning: Color::Indexed(172),
        border: Color::Gray,
        border_info: Color::Blue,
        border_danger: Color::Red,
        input_focused: Color::Indexed(28),
    };

    pub const DARK: Theme = Theme {
        background: Color::Indexed(234),
        text: Color::White,
        primary: Color::LightGreen,
        muted: Color::Gray,
        selection_bg: Color::DarkGray,
        header: Color::Yellow,
        positive: Color::LightGreen,
        negative: Color::LightRed,
        warning: Color::Yellow,
        border: Color::DarkGray,
        border_info: Color::LightBlue,
        border_danger: Color::LightRed,
        input_focused: Color::Yellow,
    };

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Base style for a whole screen
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for selected/highlighted rows in tables and lists
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for table headers
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    /// Style for help bar text
    pub fn help_text_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for screen titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn form_field_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.input_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for danger/warning borders (delete confirmations, errors)
    pub fn danger_border_style(&self) -> Style {
        Style::default()
            .fg(self.border_danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info_border_style(&self) -> Style {
        Style::default()
            .fg(self.border_info)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_border_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn status_color(&self, status: PickupStatus) -> Color {
        match status {
            PickupStatus::Completed => self.positive,
            PickupStatus::InTransit | PickupStatus::Assigned => self.border_info,
            PickupStatus::Pending => self.warning,
            PickupStatus::Cancelled => self.negative,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_picks_dark_palette() {
        assert_eq!(Theme::from_dark_mode(true), Theme::DARK);
        assert_eq!(Theme::from_dark_mode(false), Theme::LIGHT);
        assert_ne!(Theme::DARK.background, Theme::LIGHT.background);
    }
}
