use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::{view::TopLevel, view::View, AppState, InputMode, ProfileModal};
use crate::ui::{layouts, theme::Theme};

pub fn render_help_popup(f: &mut Frame, theme: &Theme, state: &AppState) {
    let help_items = get_help_items(state);

    let inner = super::popup::render_popup_frame(
        f,
        theme,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme.accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme.header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(theme.text));

    f.render_widget(list, inner);
}

fn get_help_items(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    let view = match state.top_level() {
        TopLevel::Onboarding => {
            items.push(("Enter/→/l", "Next step"));
            items.push(("←/h", "Previous step"));
            items.push(("q/Esc", "Quit"));
            return items;
        }
        TopLevel::Auth => {
            items.push(("Tab/Shift+Tab", "Move between fields"));
            items.push(("Enter", "Sign in / sign up"));
            items.push(("Ctrl+T", "Switch between sign in and sign up"));
            items.push(("Ctrl+U", "Clear the focused field"));
            items.push(("Ctrl+C", "Quit"));
            return items;
        }
        TopLevel::Main(view) => view,
    };

    match view {
        View::Home => {
            items.push(("↑/k ↓/j", "Move between quick actions"));
            items.push(("Enter", "Open the selected quick action"));
            items.push(("t", "Track the active pickup"));
            items.push(("s", "Schedule a pickup"));
        }
        View::Points => {
            items.push(("↑/k ↓/j", "Move selection"));
            items.push(("/", "Enter filter mode"));
            if state.points.input_mode == InputMode::Filter {
                items.push(("Type", "Filter by name or accepted items"));
                items.push(("Enter", "Exit filter mode (keep filter active)"));
                items.push(("Esc", "Clear filter and exit filter mode"));
                items.push(("Backspace", "Delete last character"));
            }
            items.push(("c", "Call the selected point"));
            items.push(("e", "Email the selected point"));
            items.push(("Enter/d", "Directions in your maps app"));
            items.push(("m", "Open the map preview"));
        }
        View::Market => {
            items.push(("↑/k ↓/j", "Move selection"));
            items.push(("n", "Sell an item"));
            items.push(("c", "Call the buyer"));
            items.push(("e", "Email the buyer"));
            items.push(("d", "Find the buyer in your maps app"));
            if state.market.listing.is_some() {
                items.push(("Enter (Image)", "Attach the typed image path"));
                items.push(("Ctrl+D (Image)", "Remove the attached image"));
                items.push(("Ctrl+S", "List the item"));
            }
        }
        View::Rewards => {
            items.push(("Tab", "Switch between history and catalog"));
            items.push(("↑/k ↓/j", "Move selection"));
            items.push(("Enter", "Redeem the selected reward (catalog)"));
            items.push(("c", "Cash out points"));
            items.push(("s", "Scan a QR code"));
            items.push(("r", "Show my QR code"));
            items.push(("←/→ (cash out)", "Change the amount"));
            items.push(("↑/↓ (cash out)", "Choose a payment method"));
        }
        View::Profile => match &state.profile.modal {
            None => {
                items.push(("↑/k ↓/j", "Move selection"));
                items.push(("Enter", "Open the selected item"));
            }
            Some(ProfileModal::SavedLocations { .. }) => {
                items.push(("n", "Add a location by dropping a pin"));
                items.push(("d/Delete", "Delete the selected location"));
                items.push(("Enter/o", "Directions to the selected location"));
            }
            Some(ProfileModal::PaymentMethods { .. }) => {
                items.push(("n", "Add a payment method"));
                items.push(("d/Delete", "Remove the selected method"));
            }
            Some(ProfileModal::Settings { .. }) => {
                items.push(("Enter/Space", "Toggle the selected setting"));
            }
            Some(ProfileModal::Support { .. }) => {
                items.push(("Enter/Space", "Expand or collapse the question"));
                items.push(("c", "Call support"));
                items.push(("e", "Email support"));
                items.push(("w", "Chat on WhatsApp"));
            }
            Some(_) => {
                items.push(("Tab/Shift+Tab", "Move between fields"));
                items.push(("Enter", "Submit"));
            }
        },
        View::Guide => {}
        View::Schedule => {
            items.push(("Tab/Shift+Tab", "Move between fields"));
            items.push(("Ctrl+S", "Confirm the pickup"));
            items.push(("arrows (map)", "Move the pin"));
            items.push(("Enter (map)", "Drop the pin"));
            items.push(("Enter (locations)", "Use the selected location"));
            items.push(("n/e (locations)", "Add or edit a location"));
            items.push(("d (locations)", "Delete a location"));
            items.push(("o (locations)", "Directions to the location"));
            items.push(("a", "Toggle driver arrived"));
            items.push(("Esc", "Cancel and go home"));
        }
        View::Tracking => {
            items.push(("c", "Call the driver"));
            items.push(("o", "Open the route in your maps app"));
        }
    }

    // Global navigation
    if !view.is_full_screen() {
        items.push(("1-5", "Home, Points, Schedule, Rewards, Profile"));
    }
    items.push(("g + h/p/m/r/u/f/s", "Jump to a view"));
    if !matches!(view, View::Home | View::Schedule) {
        items.push(("Esc/←/h", "Back to home"));
    }
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit"));

    items
}
