use super::{AppState, Notice};
use crate::events::DataEvent;

/// Pure state transition function for timer events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        // Ticks from a ticker that should no longer run are stale
        DataEvent::TrackingTick { pickup_id } => {
            if state.tracking_should_run().as_ref() == Some(&pickup_id) {
                state.advance_tracking();
            } else {
                tracing::debug!("Ignoring stale tracking tick for {}", pickup_id);
            }
        }

        // The scan may have been cancelled while the timer was in flight
        DataEvent::QrScanCompleted => {
            if state.rewards_screen.is_scanning() {
                tracing::info!("QR scan completed");
                state.rewards_screen.overlay = None;
                state.notice = Some(Notice::info(
                    "QR Code Scanned Successfully! Reward claimed.",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::view::View;
    use crate::state::RewardsOverlay;
    use ewaste_data::PickupStatus;
    use throbber_widgets_tui::ThrobberState;

    fn tracking_state() -> AppState {
        let mut state = AppState::new();
        state.complete_onboarding();
        state.login();
        state.track("pk_active_123".into()).unwrap();
        state
    }

    fn tick(id: &str) -> DataEvent {
        DataEvent::TrackingTick {
            pickup_id: id.into(),
        }
    }

    #[test]
    fn test_tick_advances_progress() {
        let mut state = tracking_state();
        reduce_data_event(&mut state, tick("pk_active_123"));
        assert_eq!(state.tracking.value(), 35);
    }

    #[test]
    fn test_progress_wraps_after_ninety() {
        let mut state = tracking_state();
        for _ in 0..12 {
            reduce_data_event(&mut state, tick("pk_active_123"));
        }
        assert_eq!(state.tracking.value(), 90);
        reduce_data_event(&mut state, tick("pk_active_123"));
        assert_eq!(state.tracking.value(), 30);
    }

    #[test]
    fn test_tick_after_leaving_view_is_ignored() {
        let mut state = tracking_state();
        state.navigate_back();
        reduce_data_event(&mut state, tick("pk_active_123"));
        assert_eq!(state.tracking.value(), 30);
    }

    #[test]
    fn test_tick_for_completed_pickup_is_ignored() {
        let mut state = tracking_state();
        state.pickups[0].status = PickupStatus::Completed;
        reduce_data_event(&mut state, tick("pk_active_123"));
        assert_eq!(state.tracking.value(), 30);
    }

    #[test]
    fn test_tick_for_other_pickup_is_ignored() {
        let mut state = tracking_state();
        reduce_data_event(&mut state, tick("pk_past_1"));
        assert_eq!(state.tracking.value(), 30);
        assert_eq!(state.view, View::Tracking);
    }

    #[test]
    fn test_scan_completion_closes_overlay() {
        let mut state = tracking_state();
        state.navigate(View::Rewards);
        state.rewards_screen.overlay = Some(RewardsOverlay::Scanning(ThrobberState::default()));

        reduce_data_event(&mut state, DataEvent::QrScanCompleted);

        assert!(state.rewards_screen.overlay.is_none());
        assert_eq!(
            state.notice,
            Some(Notice::info("QR Code Scanned Successfully! Reward claimed."))
        );
    }

    #[test]
    fn test_scan_completion_after_cancel_is_ignored() {
        let mut state = tracking_state();
        state.rewards_screen.overlay = Some(RewardsOverlay::MyQr);
        reduce_data_event(&mut state, DataEvent::QrScanCompleted);
        assert!(matches!(
            state.rewards_screen.overlay,
            Some(RewardsOverlay::MyQr)
        ));
        assert!(state.notice.is_none());
    }
}
