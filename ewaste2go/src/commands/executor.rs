use crate::background::{BackgroundTaskManager, Timers, QR_SCAN_TASK, TRACKING_TASK};
use crate::error::AppError;
use crate::events::{AppCommand, Effect};
use crate::links;
use crate::state::forms::{CashOutForm, LocationForm, PaymentForm, ProfileForm, TextForm};
use crate::state::search;
use crate::state::validators;
use crate::state::view::{TopLevel, View};
use crate::state::*;
use ewaste_data::{CollectionPoint, Coordinates, MarketplaceAd, PaymentMethodId, SavedLocation};
use std::path::Path;
use throbber_widgets_tui::ThrobberState;

/// Execute a command and perform the effects it asks for
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    timers: &Timers,
) {
    for effect in execute_command_sync(command, state) {
        perform_effect(effect, task_manager, timers);
    }
}

pub fn perform_effect(effect: Effect, task_manager: &mut BackgroundTaskManager, timers: &Timers) {
    match effect {
        Effect::OpenExternal(target) => links::open_external(&target),
        Effect::StartTrackingTicker { pickup_id } => {
            task_manager.spawn_task(TRACKING_TASK, timers.tracking_ticker(pickup_id));
        }
        Effect::StopTrackingTicker => task_manager.cancel(TRACKING_TASK),
        Effect::StartQrScan => task_manager.spawn_task(QR_SCAN_TASK, timers.qr_scan()),
        Effect::CancelQrScan => task_manager.cancel(QR_SCAN_TASK),
    }
}

/// Apply a command to the state and return the effects it produced
///
/// Never spawns anything itself, so tests can run it directly. A failing
/// command leaves the state as it was and raises an error notice instead.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Vec<Effect> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));
    let ticker_before = state.tracking_should_run();
    let mut effects = Vec::new();

    if let Err(err) = apply(command, state, &mut effects) {
        tracing::debug!("Command failed: {}", err);
        state.notice = Some(Notice::error(err.to_string()));
    }

    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    // The ticker follows the tracking view and the tracked pickup's status
    let ticker_after = state.tracking_should_run();
    if ticker_before != ticker_after {
        effects.push(match ticker_after {
            Some(pickup_id) => Effect::StartTrackingTicker { pickup_id },
            None => Effect::StopTrackingTicker,
        });
    }

    effects
}

fn apply(
    command: AppCommand,
    state: &mut AppState,
    effects: &mut Vec<Effect>,
) -> Result<(), AppError> {
    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,
        AppCommand::DismissNotice => state.notice = None,

        AppCommand::SelectNext => move_selection(state, true),
        AppCommand::SelectPrevious => move_selection(state, false),

        // Navigation
        AppCommand::Navigate(view) => state.navigate(view),
        AppCommand::NavigateBack => state.navigate_back(),

        // Onboarding / auth
        AppCommand::NextOnboardingStep => {
            if state.onboarding.step + 1 >= ONBOARDING_STEPS {
                state.complete_onboarding();
            } else {
                state.onboarding.step += 1;
            }
        }
        AppCommand::PreviousOnboardingStep => {
            state.onboarding.step = state.onboarding.step.saturating_sub(1);
        }
        AppCommand::ToggleAuthMode => state.auth.toggle_mode(),
        AppCommand::Logout => state.logout(),

        // Form editing
        AppCommand::NavigateFormField { forward } => {
            if let Some(form) = state.active_form_mut() {
                form.focus_next(forward);
            }
        }
        AppCommand::AppendFormFieldChar(c) => {
            if let Some(form) = state.active_form_mut() {
                form.push_char(c);
            }
        }
        AppCommand::DeleteFormFieldChar => {
            if let Some(form) = state.active_form_mut() {
                form.pop_char();
            }
        }
        AppCommand::ClearFormField => {
            if let Some(form) = state.active_form_mut() {
                form.clear_field();
            }
        }
        AppCommand::ToggleFormOption => {
            if let Some(form) = state.active_form_mut() {
                form.toggle_option();
            }
        }
        AppCommand::MovePin { dx, dy } => {
            if let Some(picker) = state.active_form_mut().and_then(|f| f.picker_mut()) {
                picker.move_by(dx, dy);
            }
        }
        AppCommand::DropPin => {
            if let Some(form) = state.active_form_mut() {
                let pin = form.picker_mut().map(|p| p.drop_pin(&mut rand::rng()));
                if let Some((coordinates, address)) = pin {
                    tracing::debug!("Pin dropped at {}", coordinates);
                    form.set_pin(coordinates, address);
                }
            }
        }
        AppCommand::SubmitForm => submit_form(state)?,
        AppCommand::CancelForm => cancel_form(state),

        // Collection points filter
        AppCommand::EnterFilterMode => state.points.input_mode = InputMode::Filter,
        AppCommand::ExitFilterMode => state.points.input_mode = InputMode::Normal,
        AppCommand::AppendFilterChar(c) => {
            state.points.filter_query.push(c);
            state.points.reset_selection();
        }
        AppCommand::DeleteFilterChar => {
            state.points.filter_query.pop();
            state.points.reset_selection();
        }
        AppCommand::ClearFilter => {
            state.points.filter_query.clear();
            state.points.input_mode = InputMode::Normal;
            state.points.reset_selection();
        }

        // Home
        AppCommand::ActivateQuickAction => {
            let action = QuickAction::ALL[state.home.selected_action % QuickAction::ALL.len()];
            state.navigate(action.target());
        }
        AppCommand::TrackActivePickup => {
            let id = state
                .active_pickup()
                .map(|p| p.id.clone())
                .ok_or_else(|| AppError::not_found("Active pickup"))?;
            state.track(id)?;
        }

        // External links
        AppCommand::CallSelected => {
            let phone = match state.view {
                View::Market => selected_ad(state)?.contact.phone.clone(),
                _ => selected_point(state)?.phone.clone(),
            };
            effects.push(Effect::OpenExternal(links::tel(&phone)));
        }
        AppCommand::EmailSelected => {
            let email = match state.view {
                View::Market => selected_ad(state)?.contact.email.clone(),
                _ => selected_point(state)?.email.clone(),
            };
            effects.push(Effect::OpenExternal(links::mailto(&email)));
        }
        AppCommand::OpenDirections => {
            let target = match state.view {
                // Buyers only publish a street address
                View::Market => links::maps_search_query(&selected_ad(state)?.contact.address),
                _ => links::maps_search(directions_target(state)?),
            };
            effects.push(Effect::OpenExternal(target));
        }
        AppCommand::OpenMapPreview => {
            let coordinates = selected_point(state)?.coordinates;
            effects.push(Effect::OpenExternal(links::maps_embed(
                coordinates,
                links::MAP_PREVIEW_ZOOM,
            )));
        }
        AppCommand::CallDriver => {
            let phone = state
                .tracked_pickup()
                .and_then(|p| p.driver_phone.clone())
                .ok_or_else(|| AppError::not_found("Driver phone number"))?;
            effects.push(Effect::OpenExternal(links::tel(&phone)));
        }
        AppCommand::CallSupport => {
            effects.push(Effect::OpenExternal(links::tel(links::SUPPORT_PHONE)));
        }
        AppCommand::EmailSupport => {
            effects.push(Effect::OpenExternal(links::mailto(links::SUPPORT_EMAIL)));
        }
        AppCommand::WhatsAppSupport => {
            effects.push(Effect::OpenExternal(links::whatsapp(links::SUPPORT_PHONE)));
        }

        // Marketplace
        AppCommand::OpenListingForm => state.market.listing = Some(Default::default()),
        AppCommand::AttachListingImage => {
            if let Some(form) = state.market.listing.as_mut() {
                let url = links::image_preview(Path::new(form.image_path.trim()))?;
                tracing::debug!("Attached listing image {}", url);
                form.image = Some(url);
            }
        }
        AppCommand::RemoveListingImage => {
            if let Some(form) = state.market.listing.as_mut() {
                form.image = None;
                form.image_path.clear();
            }
        }

        // Rewards
        AppCommand::SwitchRewardsTab => {
            state.rewards_screen.tab = state.rewards_screen.tab.toggle();
        }
        AppCommand::RedeemSelectedReward => {
            let reward = state
                .rewards_screen
                .selected_index(state.rewards.len())
                .and_then(|index| state.rewards.get(index))
                .cloned()
                .ok_or_else(|| AppError::not_found("Reward"))?;
            state.redeem_reward(&reward)?;
        }
        AppCommand::OpenCashOut => {
            state.rewards_screen.overlay = Some(RewardsOverlay::CashOut(CashOutForm::default()));
        }
        AppCommand::AdjustCashOutPoints { increase } => {
            let balance = state.user.stats.reward_points;
            if let Some(RewardsOverlay::CashOut(form)) = state.rewards_screen.overlay.as_mut() {
                form.adjust(increase, balance);
            }
        }
        AppCommand::CyclePaymentMethod { forward } => {
            let methods: Vec<PaymentMethodId> = state
                .user
                .payment_methods
                .iter()
                .map(|m| m.id.clone())
                .collect();
            if let Some(RewardsOverlay::CashOut(form)) = state.rewards_screen.overlay.as_mut() {
                form.cycle_payment(&methods, forward);
            }
        }
        AppCommand::StartQrScan => {
            state.rewards_screen.overlay = Some(RewardsOverlay::Scanning(ThrobberState::default()));
            effects.push(Effect::StartQrScan);
        }
        AppCommand::ShowMyQr => state.rewards_screen.overlay = Some(RewardsOverlay::MyQr),
        AppCommand::CloseOverlay => close_overlay(state, effects),

        // Profile
        AppCommand::OpenProfileItem => open_profile_item(state),
        AppCommand::ToggleSelectedSetting => toggle_selected_setting(state),
        AppCommand::StartAddingItem => match state.profile.modal.as_mut() {
            Some(ProfileModal::SavedLocations { adding, .. }) => {
                *adding = Some(LocationForm::quick_pin());
            }
            Some(ProfileModal::PaymentMethods { adding, .. }) => {
                *adding = Some(PaymentForm::default());
            }
            _ => {}
        },
        AppCommand::DeleteSelectedItem => delete_selected_item(state)?,
        AppCommand::ToggleFaqEntry => {
            if let Some(ProfileModal::Support { selected, expanded }) = state.profile.modal.as_mut()
            {
                *expanded = if *expanded == Some(*selected) {
                    None
                } else {
                    Some(*selected)
                };
            }
        }

        // Schedule
        AppCommand::UseSelectedLocation => {
            let location = selected_saved_location(state)?.clone();
            state.schedule.form.use_location(&location);
        }
        AppCommand::OpenLocationEditor { edit } => {
            let editor = if edit {
                LocationForm::edit(selected_saved_location(state)?)
            } else {
                LocationForm::editor()
            };
            state.schedule.editor = Some(editor);
        }
        AppCommand::RequestLocationDelete => {
            let id = selected_saved_location(state)?.id.clone();
            state.schedule.pending_delete = Some(id);
        }
        AppCommand::ConfirmLocationDelete => {
            if let Some(id) = state.schedule.pending_delete.take() {
                state.delete_location(&id)?;
                state.schedule.location_index = clamp_index(
                    state.schedule.location_index,
                    state.user.saved_locations.len(),
                );
            }
        }
        AppCommand::CancelLocationDelete => state.schedule.pending_delete = None,
        AppCommand::ToggleDriverArrived => {
            state.schedule.driver_arrived = !state.schedule.driver_arrived;
        }
    }
    Ok(())
}

/// Next (or previous) index in a list of `len`, wrapping
fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

fn move_selection(state: &mut AppState, forward: bool) {
    match state.view {
        View::Home => {
            state.home.selected_action =
                step_index(state.home.selected_action, QuickAction::ALL.len(), forward);
        }
        View::Points => {
            let len = search::point_sections(&state.collection_points, &state.points.filter_query)
                .len();
            scroll(&state.points, len, forward);
        }
        View::Market => scroll(&state.market, state.ads.len(), forward),
        View::Rewards => {
            let len = match state.rewards_screen.tab {
                RewardsTab::History => state.history_len(),
                RewardsTab::Catalog => state.rewards.len(),
            };
            scroll(&state.rewards_screen, len, forward);
        }
        View::Profile => match state.profile.modal.as_mut() {
            None => scroll(&state.profile, ProfileMenuItem::ALL.len(), forward),
            Some(ProfileModal::SavedLocations { selected, .. }) => {
                *selected = step_index(*selected, state.user.saved_locations.len(), forward);
            }
            Some(ProfileModal::PaymentMethods { selected, .. }) => {
                *selected = step_index(*selected, state.user.payment_methods.len(), forward);
            }
            Some(ProfileModal::Settings { selected }) => {
                *selected = step_index(*selected, SettingsRow::ALL.len(), forward);
            }
            Some(ProfileModal::Support { selected, .. }) => {
                *selected = step_index(*selected, state.faq.len(), forward);
            }
            Some(_) => {}
        },
        View::Schedule => {
            state.schedule.location_index = step_index(
                state.schedule.location_index,
                state.user.saved_locations.len(),
                forward,
            );
        }
        View::Guide | View::Tracking => {}
    }
}

fn scroll(list: &impl Scrollable, len: usize, forward: bool) {
    if forward {
        list.select_next(len);
    } else {
        list.select_prev(len);
    }
}

fn selected_point(state: &AppState) -> Result<&CollectionPoint, AppError> {
    let sections = search::point_sections(&state.collection_points, &state.points.filter_query);
    state
        .points
        .selected_index(sections.len())
        .and_then(|index| sections.get(index))
        .ok_or_else(|| AppError::not_found("Collection point"))
}

fn selected_ad(state: &AppState) -> Result<&MarketplaceAd, AppError> {
    state
        .market
        .selected_index(state.ads.len())
        .and_then(|index| state.ads.get(index))
        .ok_or_else(|| AppError::not_found("Listing"))
}

/// Saved location highlighted on the schedule screen or in the profile
/// modal
fn selected_saved_location(state: &AppState) -> Result<&SavedLocation, AppError> {
    let index = match &state.profile.modal {
        Some(ProfileModal::SavedLocations { selected, .. }) if state.view == View::Profile => {
            *selected
        }
        _ => state.schedule.location_index,
    };
    state
        .user
        .saved_locations
        .get(index)
        .ok_or_else(|| AppError::not_found("Saved location"))
}

fn directions_target(state: &AppState) -> Result<Coordinates, AppError> {
    match state.view {
        View::Tracking => state
            .tracked_pickup()
            .map(|p| p.current_location.unwrap_or(p.location.coordinates))
            .ok_or_else(|| AppError::not_found("Tracked pickup")),
        View::Profile | View::Schedule => selected_saved_location(state).map(|l| l.coordinates),
        _ => selected_point(state).map(|p| p.coordinates),
    }
}

fn submit_form(state: &mut AppState) -> Result<(), AppError> {
    match state.top_level() {
        TopLevel::Onboarding => {}
        TopLevel::Auth => {
            validators::validate_auth(&state.auth)?;
            state.login();
        }
        TopLevel::Main(View::Market) => {
            if let Some(form) = state.market.listing.clone() {
                state.list_item(&form)?;
            }
        }
        TopLevel::Main(View::Rewards) => {
            if let Some(RewardsOverlay::CashOut(form)) = state.rewards_screen.overlay.clone() {
                validators::validate_cash_out(
                    form.points,
                    state.user.stats.reward_points,
                    &state.user.payment_methods,
                    form.payment.as_ref(),
                )?;
                state.cash_out(form.points)?;
                state.rewards_screen.overlay = None;
            }
        }
        TopLevel::Main(View::Profile) => match state.profile.modal.clone() {
            Some(ProfileModal::EditProfile(form)) => {
                state.save_profile(&form)?;
                state.profile.modal = None;
            }
            Some(ProfileModal::SavedLocations {
                selected,
                adding: Some(form),
            }) => {
                state.add_location(&form)?;
                state.profile.modal = Some(ProfileModal::SavedLocations {
                    selected,
                    adding: None,
                });
            }
            Some(ProfileModal::PaymentMethods {
                selected,
                adding: Some(form),
            }) => {
                state.add_payment_method(&form)?;
                state.profile.modal = Some(ProfileModal::PaymentMethods {
                    selected,
                    adding: None,
                });
            }
            Some(ProfileModal::Partnership {
                form,
                submitted: false,
            }) => state.submit_partnership(&form)?,
            _ => {}
        },
        TopLevel::Main(View::Schedule) => match state.schedule.editor.clone() {
            Some(editor) => {
                match &editor.editing {
                    Some(id) => state.edit_location(id, &editor)?,
                    None => {
                        state.add_location(&editor)?;
                    }
                }
                state.schedule.editor = None;
            }
            None => {
                let form = state.schedule.form.clone();
                state.schedule_pickup(&form)?;
            }
        },
        TopLevel::Main(_) => {}
    }
    Ok(())
}

fn cancel_form(state: &mut AppState) {
    match state.view {
        View::Market => state.market.listing = None,
        View::Profile => match state.profile.modal.as_mut() {
            Some(ProfileModal::SavedLocations { adding, .. }) if adding.is_some() => *adding = None,
            Some(ProfileModal::PaymentMethods { adding, .. }) if adding.is_some() => *adding = None,
            _ => state.profile.modal = None,
        },
        View::Schedule => {
            if state.schedule.editor.take().is_none() {
                // Leaving the screen discards the draft
                state.schedule = ScheduleState {
                    driver_arrived: state.schedule.driver_arrived,
                    ..ScheduleState::default()
                };
                state.navigate_back();
            }
        }
        _ => {}
    }
}

fn close_overlay(state: &mut AppState, effects: &mut Vec<Effect>) {
    match state.view {
        View::Rewards => {
            if state.rewards_screen.is_scanning() {
                tracing::info!("QR scan cancelled");
                effects.push(Effect::CancelQrScan);
            }
            state.rewards_screen.overlay = None;
        }
        View::Profile => {
            state.profile.modal = match state.profile.modal {
                Some(ProfileModal::Privacy) => Some(ProfileModal::Settings {
                    selected: SettingsRow::ALL.len() - 1,
                }),
                _ => None,
            };
        }
        _ => {}
    }
}

fn open_profile_item(state: &mut AppState) {
    let Some(index) = state.profile.selected_index(ProfileMenuItem::ALL.len()) else {
        return;
    };
    let modal = match ProfileMenuItem::ALL[index] {
        ProfileMenuItem::EditProfile => ProfileModal::EditProfile(ProfileForm::from_user(&state.user)),
        ProfileMenuItem::SavedLocations => ProfileModal::SavedLocations {
            selected: 0,
            adding: None,
        },
        ProfileMenuItem::PaymentMethods => ProfileModal::PaymentMethods {
            selected: 0,
            adding: None,
        },
        ProfileMenuItem::Settings => ProfileModal::Settings { selected: 0 },
        ProfileMenuItem::History => ProfileModal::History,
        ProfileMenuItem::Partnership => ProfileModal::Partnership {
            form: Default::default(),
            submitted: false,
        },
        ProfileMenuItem::Support => ProfileModal::Support {
            selected: 0,
            expanded: None,
        },
        ProfileMenuItem::SignOut => {
            state.logout();
            return;
        }
    };
    tracing::debug!("Opening profile modal {:?}", ProfileMenuItem::ALL[index]);
    state.profile.modal = Some(modal);
}

fn toggle_selected_setting(state: &mut AppState) {
    let Some(ProfileModal::Settings { selected }) = state.profile.modal else {
        return;
    };
    let settings = state.settings;
    let change = match SettingsRow::ALL[selected.min(SettingsRow::ALL.len() - 1)] {
        SettingsRow::DarkMode => SettingChange::DarkMode(!settings.dark_mode),
        SettingsRow::Notifications => SettingChange::Notifications(!settings.notifications),
        SettingsRow::LocationTracking => {
            SettingChange::LocationTracking(!settings.location_tracking)
        }
        SettingsRow::Language => SettingChange::Lang(settings.lang.toggle()),
        SettingsRow::Privacy => {
            state.profile.modal = Some(ProfileModal::Privacy);
            return;
        }
    };
    state.update_setting(change);
}

fn delete_selected_item(state: &mut AppState) -> Result<(), AppError> {
    match state.profile.modal.clone() {
        Some(ProfileModal::SavedLocations {
            selected,
            adding: None,
        }) => {
            let id = selected_saved_location(state)?.id.clone();
            state.delete_location(&id)?;
            state.profile.modal = Some(ProfileModal::SavedLocations {
                selected: clamp_index(selected, state.user.saved_locations.len()),
                adding: None,
            });
        }
        Some(ProfileModal::PaymentMethods {
            selected,
            adding: None,
        }) => {
            let id = state
                .user
                .payment_methods
                .get(selected)
                .map(|m| m.id.clone())
                .ok_or_else(|| AppError::not_found("Payment method"))?;
            state.remove_payment_method(&id)?;
            state.profile.modal = Some(ProfileModal::PaymentMethods {
                selected: clamp_index(selected, state.user.payment_methods.len()),
                adding: None,
            });
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{ListingForm, ScheduleField};
    use ewaste_data::PickupStatus;

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state.complete_onboarding();
        state.login();
        state
    }

    fn run(state: &mut AppState, commands: Vec<AppCommand>) -> Vec<Effect> {
        commands
            .into_iter()
            .flat_map(|command| execute_command_sync(command, state))
            .collect()
    }

    // ===== Global Commands =====

    #[test]
    fn test_quit_command() {
        let mut state = signed_in();
        execute_command_sync(AppCommand::Quit, &mut state);
        assert!(state.should_quit);
    }

    #[test]
    fn test_pending_key_cleared_by_next_command() {
        let mut state = signed_in();
        execute_command_sync(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));
        execute_command_sync(AppCommand::Navigate(View::Market), &mut state);
        assert_eq!(state.pending_key, None);
        assert_eq!(state.view, View::Market);
    }

    #[test]
    fn test_onboarding_completes_after_last_step() {
        let mut state = AppState::new();
        for _ in 0..ONBOARDING_STEPS - 1 {
            execute_command_sync(AppCommand::NextOnboardingStep, &mut state);
        }
        assert!(!state.has_onboarded);
        execute_command_sync(AppCommand::NextOnboardingStep, &mut state);
        assert!(state.has_onboarded);
    }

    // ===== Tracking ticker =====

    #[test]
    fn test_tracking_in_transit_starts_ticker() {
        let mut state = signed_in();
        let effects = execute_command_sync(AppCommand::TrackActivePickup, &mut state);
        assert_eq!(state.view, View::Tracking);
        assert_eq!(
            effects,
            vec![Effect::StartTrackingTicker {
                pickup_id: "pk_active_123".into()
            }]
        );
    }

    #[test]
    fn test_leaving_tracking_stops_ticker() {
        let mut state = signed_in();
        execute_command_sync(AppCommand::TrackActivePickup, &mut state);
        let effects = execute_command_sync(AppCommand::NavigateBack, &mut state);
        assert_eq!(effects, vec![Effect::StopTrackingTicker]);
    }

    #[test]
    fn test_no_active_pickup_is_an_error_notice() {
        let mut state = signed_in();
        state
            .pickups
            .iter_mut()
            .for_each(|p| p.status = PickupStatus::Completed);
        let effects = execute_command_sync(AppCommand::TrackActivePickup, &mut state);
        assert!(effects.is_empty());
        assert_eq!(state.view, View::Home);
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Error));
    }

    // ===== External links =====

    #[test]
    fn test_call_selected_point() {
        let mut state = signed_in();
        state.navigate(View::Points);
        let effects = execute_command_sync(AppCommand::CallSelected, &mut state);
        let point = &state.collection_points[0];
        assert!(point.is_government());
        assert_eq!(effects, vec![Effect::OpenExternal(links::tel(&point.phone))]);
    }

    #[test]
    fn test_directions_follow_filtered_selection() {
        let mut state = signed_in();
        state.navigate(View::Points);
        let query: Vec<AppCommand> = "legenda".chars().map(AppCommand::AppendFilterChar).collect();
        run(&mut state, query);

        let effects = execute_command_sync(AppCommand::OpenDirections, &mut state);

        let legenda = &state.collection_points[1];
        assert_eq!(legenda.id, "cp2");
        assert_eq!(
            effects,
            vec![Effect::OpenExternal(links::maps_search(legenda.coordinates))]
        );
    }

    #[test]
    fn test_market_directions_search_buyer_address() {
        let mut state = signed_in();
        state.navigate(View::Market);
        let effects = execute_command_sync(AppCommand::OpenDirections, &mut state);
        let address = &state.ads[0].contact.address;
        assert_eq!(
            effects,
            vec![Effect::OpenExternal(links::maps_search_query(address))]
        );
    }

    #[test]
    fn test_empty_filter_result_reports_not_found() {
        let mut state = signed_in();
        state.navigate(View::Points);
        execute_command_sync(AppCommand::AppendFilterChar('#'), &mut state);
        let effects = execute_command_sync(AppCommand::OpenMapPreview, &mut state);
        assert!(effects.is_empty());
        assert_eq!(
            state.notice,
            Some(Notice::error("Collection point not found"))
        );
    }

    #[test]
    fn test_support_links() {
        let mut state = signed_in();
        let effects = run(
            &mut state,
            vec![
                AppCommand::CallSupport,
                AppCommand::EmailSupport,
                AppCommand::WhatsAppSupport,
            ],
        );
        assert_eq!(
            effects,
            vec![
                Effect::OpenExternal("tel:+6088232311".to_string()),
                Effect::OpenExternal("mailto:support@ewaste2go.my".to_string()),
                Effect::OpenExternal("https://wa.me/6088232311".to_string()),
            ]
        );
    }

    // ===== Rewards =====

    #[test]
    fn test_cash_out_requires_payment_method_when_user_has_one() {
        let mut state = signed_in();
        state.navigate(View::Rewards);
        run(&mut state, vec![AppCommand::OpenCashOut, AppCommand::SubmitForm]);
        assert_eq!(
            state.notice,
            Some(Notice::error(AppError::PaymentMethodRequired.to_string()))
        );
        assert_eq!(state.user.stats.reward_points, 350);
        assert!(state.rewards_screen.overlay.is_some());
    }

    #[test]
    fn test_cash_out_with_payment_method() {
        let mut state = signed_in();
        state.navigate(View::Rewards);
        run(
            &mut state,
            vec![
                AppCommand::OpenCashOut,
                AppCommand::AdjustCashOutPoints { increase: true },
                AppCommand::CyclePaymentMethod { forward: true },
                AppCommand::SubmitForm,
            ],
        );
        assert_eq!(state.user.stats.reward_points, 150);
        assert!(state.rewards_screen.overlay.is_none());
        assert_eq!(state.notice, Some(Notice::info("Cashed out RM 20.00")));
    }

    #[test]
    fn test_closing_scan_cancels_timer() {
        let mut state = signed_in();
        state.navigate(View::Rewards);
        let effects = run(&mut state, vec![AppCommand::StartQrScan, AppCommand::CloseOverlay]);
        assert_eq!(effects, vec![Effect::StartQrScan, Effect::CancelQrScan]);
        assert!(state.rewards_screen.overlay.is_none());
    }

    #[test]
    fn test_redeem_selected_catalog_reward() {
        let mut state = signed_in();
        state.navigate(View::Rewards);
        execute_command_sync(AppCommand::SwitchRewardsTab, &mut state);
        execute_command_sync(AppCommand::RedeemSelectedReward, &mut state);
        assert_eq!(state.user.stats.reward_points, 250);
        assert_eq!(state.user.claimed_rewards[0].reward_id, "r1");
        assert_eq!(
            state.notice,
            Some(Notice::info("Redeemed RM 10 Grocery Voucher!"))
        );
    }

    // ===== Forms =====

    #[test]
    fn test_schedule_validation_keeps_draft() {
        let mut state = signed_in();
        state.navigate(View::Schedule);
        run(
            &mut state,
            vec![
                AppCommand::AppendFormFieldChar('T'),
                AppCommand::AppendFormFieldChar('V'),
                AppCommand::SubmitForm,
            ],
        );
        assert_eq!(state.schedule.form.items, "TV");
        assert_eq!(state.view, View::Schedule);
        assert_eq!(
            state.notice,
            Some(Notice::error(
                "Please fill in all required fields: Date, Time, Address"
            ))
        );
    }

    #[test]
    fn test_schedule_uses_saved_location() {
        let mut state = signed_in();
        state.navigate(View::Schedule);
        state.schedule.form.focused = ScheduleField::Locations;
        run(
            &mut state,
            vec![AppCommand::SelectNext, AppCommand::UseSelectedLocation],
        );
        let location = &state.user.saved_locations[1];
        assert_eq!(state.schedule.form.address, location.address);
        assert_eq!(state.schedule.form.coordinates, Some(location.coordinates));
    }

    #[test]
    fn test_drop_pin_fills_address() {
        let mut state = signed_in();
        state.navigate(View::Schedule);
        state.schedule.form.focused = ScheduleField::Map;
        run(
            &mut state,
            vec![AppCommand::MovePin { dx: 1, dy: 0 }, AppCommand::DropPin],
        );
        assert!(crate::state::forms::MOCK_ADDRESSES.contains(&state.schedule.form.address.as_str()));
        assert_eq!(
            state.schedule.form.coordinates,
            Some(state.schedule.form.picker.coordinates())
        );
    }

    #[test]
    fn test_cancel_schedule_discards_draft_and_goes_home() {
        let mut state = signed_in();
        state.navigate(View::Schedule);
        run(
            &mut state,
            vec![AppCommand::AppendFormFieldChar('x'), AppCommand::CancelForm],
        );
        assert_eq!(state.view, View::Home);
        assert!(state.schedule.form.items.is_empty());
    }

    #[test]
    fn test_listing_rejects_missing_image() {
        let mut state = signed_in();
        state.navigate(View::Market);
        state.market.listing = Some(ListingForm {
            image_path: "/definitely/not/here.png".to_string(),
            ..ListingForm::default()
        });
        execute_command_sync(AppCommand::AttachListingImage, &mut state);
        assert!(state.market.listing.as_ref().unwrap().image.is_none());
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Error));
    }

    // ===== Profile =====

    #[test]
    fn test_settings_toggle_language_and_privacy() {
        let mut state = signed_in();
        state.navigate(View::Profile);
        state.profile.modal = Some(ProfileModal::Settings { selected: 3 });
        execute_command_sync(AppCommand::ToggleSelectedSetting, &mut state);
        assert_eq!(state.lang(), crate::i18n::Lang::Ms);

        run(
            &mut state,
            vec![AppCommand::SelectNext, AppCommand::ToggleSelectedSetting],
        );
        assert_eq!(state.profile.modal, Some(ProfileModal::Privacy));
        execute_command_sync(AppCommand::CloseOverlay, &mut state);
        assert_eq!(
            state.profile.modal,
            Some(ProfileModal::Settings { selected: 4 })
        );
    }

    #[test]
    fn test_sign_out_menu_item() {
        let mut state = signed_in();
        state.navigate(View::Profile);
        state
            .profile
            .table_state
            .borrow_mut()
            .select(Some(ProfileMenuItem::ALL.len() - 1));
        execute_command_sync(AppCommand::OpenProfileItem, &mut state);
        assert!(!state.is_authenticated);
        assert_eq!(state.top_level(), TopLevel::Auth);
    }

    #[test]
    fn test_delete_saved_location_clamps_selection() {
        let mut state = signed_in();
        state.navigate(View::Profile);
        state.profile.modal = Some(ProfileModal::SavedLocations {
            selected: 1,
            adding: None,
        });
        execute_command_sync(AppCommand::DeleteSelectedItem, &mut state);
        assert_eq!(state.user.saved_locations.len(), 1);
        assert_eq!(
            state.profile.modal,
            Some(ProfileModal::SavedLocations {
                selected: 0,
                adding: None
            })
        );
    }

    #[test]
    fn test_faq_entry_toggles() {
        let mut state = signed_in();
        state.navigate(View::Profile);
        state.profile.modal = Some(ProfileModal::Support {
            selected: 1,
            expanded: None,
        });
        execute_command_sync(AppCommand::ToggleFaqEntry, &mut state);
        assert_eq!(
            state.profile.modal,
            Some(ProfileModal::Support {
                selected: 1,
                expanded: Some(1)
            })
        );
        execute_command_sync(AppCommand::ToggleFaqEntry, &mut state);
        assert_eq!(
            state.profile.modal,
            Some(ProfileModal::Support {
                selected: 1,
                expanded: None
            })
        );
    }
}
