use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::forms::ScheduleField;
use crate::state::view::{TopLevel, View};
use crate::state::*;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    if event.is_interrupt() {
        return Some(AppCommand::Quit);
    }

    // Priority 0: a notice blocks everything until dismissed
    if state.notice.is_some() {
        return match key {
            Key::Enter | Key::Esc => Some(AppCommand::DismissNotice),
            _ => None,
        };
    }

    // Priority 1: screens shown before sign-in
    let view = match state.top_level() {
        TopLevel::Onboarding => return handle_onboarding_keys(key),
        TopLevel::Auth => return handle_auth_keys(event, state),
        TopLevel::Main(view) => view,
    };

    // Priority 2: help popup
    // This must come before the overlays so Esc closes help first
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 3: per-view overlays, forms and input modes
    match view {
        View::Points if state.points.input_mode == InputMode::Filter => {
            return match key {
                Key::Enter => Some(AppCommand::ExitFilterMode),
                Key::Backspace => Some(AppCommand::DeleteFilterChar),
                Key::Char(c) => Some(AppCommand::AppendFilterChar(c)),
                Key::Esc => Some(AppCommand::ClearFilter),
                _ => None,
            };
        }
        View::Market if state.market.listing.is_some() => {
            return handle_listing_keys(event, state);
        }
        View::Rewards => {
            if let Some(overlay) = &state.rewards_screen.overlay {
                return handle_rewards_overlay_keys(key, overlay);
            }
        }
        View::Profile => {
            if let Some(modal) = &state.profile.modal {
                return handle_profile_modal_keys(event, state, modal);
            }
        }
        View::Schedule => return handle_schedule_keys(event, state),
        _ => {}
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by a view key jumps there
            ('g', Key::Char(c)) => View::from_jump_key(c)
                .map(AppCommand::Navigate)
                .or(Some(AppCommand::ClearPendingKey)),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (view, key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Bottom navigation bar
        (_, Key::Char(c @ '1'..='5')) => View::from_nav_digit(c).map(AppCommand::Navigate),

        // Esc on the points screen clears a leftover filter before going back
        (View::Points, Key::Esc) if !state.points.filter_query.is_empty() => {
            Some(AppCommand::ClearFilter)
        }

        // Back to the dashboard
        (View::Home, Key::Esc | Key::Left | Key::Char('h')) => None,
        (_, Key::Esc | Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // List movement
        (
            View::Home | View::Points | View::Market | View::Rewards | View::Profile,
            Key::Down | Key::Char('j'),
        ) => Some(AppCommand::SelectNext),
        (
            View::Home | View::Points | View::Market | View::Rewards | View::Profile,
            Key::Up | Key::Char('k'),
        ) => Some(AppCommand::SelectPrevious),

        // Home
        (View::Home, Key::Enter) => Some(AppCommand::ActivateQuickAction),
        (View::Home, Key::Char('t')) => Some(AppCommand::TrackActivePickup),
        (View::Home, Key::Char('s')) => Some(AppCommand::Navigate(View::Schedule)),

        // Collection points
        (View::Points, Key::Char('/')) => Some(AppCommand::EnterFilterMode),
        (View::Points, Key::Char('c')) => Some(AppCommand::CallSelected),
        (View::Points, Key::Char('e')) => Some(AppCommand::EmailSelected),
        (View::Points, Key::Char('d') | Key::Enter) => Some(AppCommand::OpenDirections),
        (View::Points, Key::Char('m')) => Some(AppCommand::OpenMapPreview),

        // Marketplace
        (View::Market, Key::Char('n')) => Some(AppCommand::OpenListingForm),
        (View::Market, Key::Char('c')) => Some(AppCommand::CallSelected),
        (View::Market, Key::Char('e')) => Some(AppCommand::EmailSelected),
        (View::Market, Key::Char('d')) => Some(AppCommand::OpenDirections),

        // Rewards
        (View::Rewards, Key::Tab | Key::BackTab) => Some(AppCommand::SwitchRewardsTab),
        (View::Rewards, Key::Enter) if state.rewards_screen.tab == RewardsTab::Catalog => {
            Some(AppCommand::RedeemSelectedReward)
        }
        (View::Rewards, Key::Char('c')) => Some(AppCommand::OpenCashOut),
        (View::Rewards, Key::Char('s')) => Some(AppCommand::StartQrScan),
        (View::Rewards, Key::Char('r')) => Some(AppCommand::ShowMyQr),

        // Profile
        (View::Profile, Key::Enter) => Some(AppCommand::OpenProfileItem),

        // Tracking
        (View::Tracking, Key::Char('c')) => Some(AppCommand::CallDriver),
        (View::Tracking, Key::Char('o')) => Some(AppCommand::OpenDirections),

        _ => None,
    }
}

fn handle_onboarding_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Enter | Key::Right | Key::Char(' ') | Key::Char('l') => {
            Some(AppCommand::NextOnboardingStep)
        }
        Key::Left | Key::Char('h') => Some(AppCommand::PreviousOnboardingStep),
        Key::Char('q') | Key::Esc => Some(AppCommand::Quit),
        _ => None,
    }
}

fn handle_auth_keys(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    // Ctrl+T switches between sign in and sign up
    if event.modifiers.ctrl && matches!(event.key, Key::Char('t')) {
        return Some(AppCommand::ToggleAuthMode);
    }
    match event.key {
        Key::Esc => None,
        _ => handle_form_keys(event, state),
    }
}

/// Keys shared by every text form: Tab moves focus, characters type into
/// the focused field, Enter submits, Esc cancels. A focused map picker
/// takes the arrow keys and drops the pin on Enter; a focused toggle flips
/// on Space or the horizontal arrows.
fn handle_form_keys(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;
    let form = state.active_form()?;

    if event.modifiers.ctrl {
        return match key {
            Key::Char('u') | Key::Char('l') => Some(AppCommand::ClearFormField),
            Key::Char('s') => Some(AppCommand::SubmitForm),
            _ => None,
        };
    }

    match key {
        Key::Tab => return Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab => return Some(AppCommand::NavigateFormField { forward: false }),
        Key::Esc => return Some(AppCommand::CancelForm),
        _ => {}
    }

    if form.is_picker_focused() {
        return match key {
            Key::Up | Key::Char('k') => Some(AppCommand::MovePin { dx: 0, dy: -1 }),
            Key::Down | Key::Char('j') => Some(AppCommand::MovePin { dx: 0, dy: 1 }),
            Key::Left | Key::Char('h') => Some(AppCommand::MovePin { dx: -1, dy: 0 }),
            Key::Right | Key::Char('l') => Some(AppCommand::MovePin { dx: 1, dy: 0 }),
            Key::Enter | Key::Char(' ') => Some(AppCommand::DropPin),
            _ => None,
        };
    }

    if !form.is_text_focused() {
        return match key {
            Key::Char(' ') | Key::Left | Key::Right => Some(AppCommand::ToggleFormOption),
            Key::Enter => Some(AppCommand::SubmitForm),
            _ => None,
        };
    }

    match key {
        Key::Enter => Some(AppCommand::SubmitForm),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        Key::Char(c) => Some(AppCommand::AppendFormFieldChar(c)),
        _ => None,
    }
}

fn handle_listing_keys(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    use crate::state::forms::ListingField;

    let on_image = state
        .market
        .listing
        .as_ref()
        .is_some_and(|form| form.focused == ListingField::Image);

    if on_image {
        // Enter attaches the typed path, Ctrl+D drops the preview
        if event.modifiers.ctrl && matches!(event.key, Key::Char('d')) {
            return Some(AppCommand::RemoveListingImage);
        }
        if event.key == Key::Enter {
            return Some(AppCommand::AttachListingImage);
        }
    }
    handle_form_keys(event, state)
}

fn handle_rewards_overlay_keys(key: Key, overlay: &RewardsOverlay) -> Option<AppCommand> {
    match overlay {
        RewardsOverlay::CashOut(_) => match key {
            Key::Left | Key::Char('h') => Some(AppCommand::AdjustCashOutPoints { increase: false }),
            Key::Right | Key::Char('l') => Some(AppCommand::AdjustCashOutPoints { increase: true }),
            Key::Up | Key::Char('k') => Some(AppCommand::CyclePaymentMethod { forward: false }),
            Key::Down | Key::Char('j') => Some(AppCommand::CyclePaymentMethod { forward: true }),
            Key::Enter => Some(AppCommand::SubmitForm),
            Key::Esc => Some(AppCommand::CloseOverlay),
            _ => None,
        },
        RewardsOverlay::MyQr => match key {
            Key::Esc | Key::Enter => Some(AppCommand::CloseOverlay),
            _ => None,
        },
        RewardsOverlay::Scanning(_) => match key {
            Key::Esc => Some(AppCommand::CloseOverlay),
            _ => None,
        },
    }
}

fn handle_profile_modal_keys(
    event: KeyEvent,
    state: &AppState,
    modal: &ProfileModal,
) -> Option<AppCommand> {
    let key = event.key;
    match modal {
        ProfileModal::EditProfile(_)
        | ProfileModal::SavedLocations {
            adding: Some(_), ..
        }
        | ProfileModal::PaymentMethods {
            adding: Some(_), ..
        }
        | ProfileModal::Partnership {
            submitted: false, ..
        } => handle_form_keys(event, state),

        ProfileModal::SavedLocations { adding: None, .. } => match key {
            Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
            Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
            Key::Char('n') => Some(AppCommand::StartAddingItem),
            Key::Char('d') | Key::Delete => Some(AppCommand::DeleteSelectedItem),
            Key::Char('o') | Key::Enter => Some(AppCommand::OpenDirections),
            Key::Esc => Some(AppCommand::CloseOverlay),
            _ => None,
        },

        ProfileModal::PaymentMethods { adding: None, .. } => match key {
            Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
            Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
            Key::Char('n') => Some(AppCommand::StartAddingItem),
            Key::Char('d') | Key::Delete => Some(AppCommand::DeleteSelectedItem),
            Key::Esc => Some(AppCommand::CloseOverlay),
            _ => None,
        },

        ProfileModal::Settings { .. } => match key {
            Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
            Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
            Key::Enter | Key::Char(' ') | Key::Left | Key::Right => {
                Some(AppCommand::ToggleSelectedSetting)
            }
            Key::Esc => Some(AppCommand::CloseOverlay),
            _ => None,
        },

        ProfileModal::Support { .. } => match key {
            Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
            Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
            Key::Enter | Key::Char(' ') => Some(AppCommand::ToggleFaqEntry),
            Key::Char('c') => Some(AppCommand::CallSupport),
            Key::Char('e') => Some(AppCommand::EmailSupport),
            Key::Char('w') => Some(AppCommand::WhatsAppSupport),
            Key::Esc => Some(AppCommand::CloseOverlay),
            _ => None,
        },

        ProfileModal::Privacy
        | ProfileModal::History
        | ProfileModal::Partnership {
            submitted: true, ..
        } => match key {
            Key::Esc | Key::Enter => Some(AppCommand::CloseOverlay),
            _ => None,
        },
    }
}

fn handle_schedule_keys(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;
    let schedule = &state.schedule;

    // Delete confirmation popup: 'y' confirms, anything else cancels
    if schedule.pending_delete.is_some() {
        return match key {
            Key::Char('y') | Key::Char('Y') => Some(AppCommand::ConfirmLocationDelete),
            _ => Some(AppCommand::CancelLocationDelete),
        };
    }

    if schedule.editor.is_some() {
        return handle_form_keys(event, state);
    }

    match schedule.form.focused {
        ScheduleField::Locations if !event.modifiers.ctrl => match key {
            Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
            Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
            Key::Enter => Some(AppCommand::UseSelectedLocation),
            Key::Char('e') => Some(AppCommand::OpenLocationEditor { edit: true }),
            Key::Char('n') => Some(AppCommand::OpenLocationEditor { edit: false }),
            Key::Char('d') | Key::Delete => Some(AppCommand::RequestLocationDelete),
            Key::Char('o') => Some(AppCommand::OpenDirections),
            Key::Char('a') => Some(AppCommand::ToggleDriverArrived),
            _ => handle_form_keys(event, state),
        },
        ScheduleField::Map if key == Key::Char('a') => Some(AppCommand::ToggleDriverArrived),
        _ => handle_form_keys(event, state),
    }
}
