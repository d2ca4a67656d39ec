use ewaste_data::{LedgerDirection, PickupStatus};
use ratatui::{style::Style, text::Span};

use super::theme::Theme;
use crate::state::forms::cash_value;

/// "350 pts"
pub fn fmt_points(points: u32) -> String {
    format!("{} pts", points)
}

/// Cash value of a points balance, "RM 35.00"
pub fn fmt_points_as_rm(points: u32) -> String {
    format!("RM {}", cash_value(points))
}

/// Human label for a pickup status
pub fn status_label(status: PickupStatus) -> &'static str {
    match status {
        PickupStatus::Pending => "Pending",
        PickupStatus::Assigned => "Assigned",
        PickupStatus::InTransit => "In Transit",
        PickupStatus::Completed => "Completed",
        PickupStatus::Cancelled => "Cancelled",
    }
}

pub fn status_span(status: PickupStatus, theme: &Theme) -> Span<'static> {
    Span::styled(
        status_label(status),
        Style::default().fg(theme.status_color(status)),
    )
}

pub fn ledger_amount_span(amount: &str, direction: LedgerDirection, theme: &Theme) -> Span<'static> {
    let color = match direction {
        LedgerDirection::Credit => theme.positive,
        LedgerDirection::Debit => theme.negative,
    };
    Span::styled(amount.to_string(), Style::default().fg(color))
}

/// Replace every character with a bullet
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Shorten `value` to `max` characters, ending in an ellipsis when cut
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Checkbox-style marker for toggles
pub fn toggle_label(on: bool) -> &'static str {
    if on {
        "[on] "
    } else {
        "[off]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_convert_to_ringgit() {
        assert_eq!(fmt_points(350), "350 pts");
        assert_eq!(fmt_points_as_rm(350), "RM 35.00");
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("Kota", 10), "Kota");
        assert_eq!(truncate("Kota Kinabalu", 5), "Kota…");
    }

    #[test]
    fn mask_counts_characters_not_bytes() {
        assert_eq!(mask("pässword"), "••••••••");
    }
}
