use ewaste2go::events::{DataEvent, Effect};
use ewaste2go::input::{Key, KeyEvent};
use ewaste2go::state::view::{TopLevel, View};
use ewaste2go::state::{AppState, InputMode, NoticeKind, RewardsOverlay};
use ewaste2go::testing::TestApp;
use ratatui::{backend::TestBackend, Terminal};

/// Render the state into an in-memory terminal and return its text
fn render_to_string(state: &AppState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| ewaste2go::ui::render_app(f, state))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_onboarding_then_sign_in() {
    let mut app = TestApp::new();
    assert_eq!(app.state().top_level(), TopLevel::Onboarding);

    // Four steps, the last Enter finishes onboarding
    app.send_keys(&[Key::Enter, Key::Enter, Key::Left, Key::Enter, Key::Enter]);
    assert_eq!(app.state().top_level(), TopLevel::Onboarding);
    app.send_key(Key::Enter);
    assert_eq!(app.state().top_level(), TopLevel::Auth);

    // Typing 'q' in the email field is text, not quit
    app.type_text("alex@qmail.my");
    app.send_key(Key::Tab);
    app.type_text("secret");
    app.assert_not_quit();

    app.send_key(Key::Enter);
    app.assert_view(View::Home);
    // Credentials are not kept around after sign in
    assert!(app.state().auth.password.is_empty());
}

#[test]
fn test_sign_in_with_missing_fields_raises_notice() {
    let mut app = TestApp::new();
    app.state_mut().complete_onboarding();

    app.type_text("alex@qmail.my");
    app.send_key(Key::Enter);

    assert_eq!(app.state().top_level(), TopLevel::Auth);
    let notice = app.state().notice.clone().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("Password"));
    // The draft survives the failed submit
    assert_eq!(app.state().auth.email, "alex@qmail.my");
}

#[test]
fn test_notice_blocks_other_keys() {
    let mut app = TestApp::signed_in();
    app.state_mut().pickups.clear();

    // Nothing to track raises an error notice
    app.send_key(Key::Char('t'));
    app.assert_view(View::Home);
    assert!(app.state().notice.is_some());

    // 'q' and view keys are swallowed while the notice is up
    app.send_key(Key::Char('q'));
    app.send_key(Key::Char('2'));
    app.assert_not_quit();
    app.assert_view(View::Home);

    app.send_key(Key::Enter);
    assert!(app.state().notice.is_none());
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_bottom_nav_and_jump_keys() {
    let mut app = TestApp::signed_in();

    app.send_key(Key::Char('2'));
    app.assert_view(View::Points);
    app.send_key(Key::Char('4'));
    app.assert_view(View::Rewards);
    app.send_keys(&[Key::Char('g'), Key::Char('m')]);
    app.assert_view(View::Market);
    app.send_keys(&[Key::Char('g'), Key::Char('f')]);
    app.assert_view(View::Guide);
    app.send_key(Key::Esc);
    app.assert_view(View::Home);
    assert_eq!(app.state().pending_key, None);
}

#[test]
fn test_schedule_pickup_flow() {
    let mut app = TestApp::signed_in();
    let before = app.state().pickups.len();

    app.send_key(Key::Char('s'));
    app.assert_view(View::Schedule);

    app.type_text("Laptop, Phone,");
    app.send_key(Key::Tab);
    app.type_text("2026-10-20");
    app.send_key(Key::Tab);
    app.type_text("10:00 AM");
    app.send_key(Key::Tab);
    app.type_text("Jalan Gaya, Kota Kinabalu");
    app.send_key(Key::Enter);

    app.assert_view(View::Home);
    let state = app.state();
    assert_eq!(state.pickups.len(), before + 1);
    let pickup = &state.pickups[0];
    assert_eq!(pickup.items, vec!["Laptop".to_string(), "Phone".to_string()]);
    assert_eq!(pickup.location.name, "Pinned Location");
    assert!(pickup.id.as_str().starts_with("pk_"));
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some("Pickup Scheduled! Driver assigned.")
    );
    // The draft is cleared for next time
    assert!(state.schedule.form.items.is_empty());
}

#[test]
fn test_schedule_validation_keeps_draft() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('s'));
    app.type_text("Monitor");
    app.send_key(Key::Enter);

    app.assert_view(View::Schedule);
    let notice = app.state().notice.clone().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(app.state().schedule.form.items, "Monitor");
}

#[test]
fn test_tracking_ticker_lifecycle() {
    let mut app = TestApp::signed_in();

    app.send_key(Key::Char('t'));
    app.assert_view(View::Tracking);
    assert_eq!(
        app.take_effects(),
        vec![Effect::StartTrackingTicker {
            pickup_id: "pk_active_123".into()
        }]
    );
    assert_eq!(app.state().tracking.value(), 30);

    app.send_data_event(DataEvent::TrackingTick {
        pickup_id: "pk_active_123".into(),
    });
    app.send_data_event(DataEvent::TrackingTick {
        pickup_id: "pk_active_123".into(),
    });
    assert_eq!(app.state().tracking.value(), 40);

    app.send_key(Key::Esc);
    app.assert_view(View::Home);
    assert_eq!(app.take_effects(), vec![Effect::StopTrackingTicker]);

    // A tick that was already in flight changes nothing
    app.send_data_event(DataEvent::TrackingTick {
        pickup_id: "pk_active_123".into(),
    });
    assert_eq!(app.state().tracking.value(), 40);
}

#[test]
fn test_call_driver_without_phone_reports_error() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('t'));
    app.take_effects();

    app.send_key(Key::Char('c'));
    assert!(app.take_effects().is_empty());
    assert_eq!(
        app.state().notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Error)
    );
}

#[test]
fn test_points_filter_flow() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('/'));
    assert_eq!(app.state().points.input_mode, InputMode::Filter);
    // 'q' is part of the query while filtering
    app.type_text("batq");
    app.send_key(Key::Backspace);
    app.assert_not_quit();
    app.send_key(Key::Enter);

    assert_eq!(app.state().points.input_mode, InputMode::Normal);
    assert_eq!(app.state().points.filter_query, "bat");

    // Esc first clears the leftover query, then goes home
    app.send_key(Key::Esc);
    assert!(app.state().points.filter_query.is_empty());
    app.assert_view(View::Points);
    app.send_key(Key::Esc);
    app.assert_view(View::Home);
}

#[test]
fn test_points_links_follow_selection() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('j'));
    app.send_key(Key::Char('e'));
    app.send_key(Key::Enter);

    let effects = app.take_effects();
    assert_eq!(effects.len(), 2);
    assert!(matches!(&effects[0], Effect::OpenExternal(url) if url.starts_with("mailto:")));
    assert!(matches!(
        &effects[1],
        Effect::OpenExternal(url) if url.starts_with("https://www.google.com/maps/search/?api=1&query=")
    ));
}

#[test]
fn test_cash_out_flow() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('4'));
    app.send_key(Key::Char('c'));
    assert!(matches!(
        app.state().rewards_screen.overlay,
        Some(RewardsOverlay::CashOut(_))
    ));

    // No payment method picked yet
    app.send_key(Key::Enter);
    assert_eq!(
        app.state().notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Error)
    );
    app.send_key(Key::Enter);

    app.send_key(Key::Right);
    app.send_key(Key::Down);
    app.send_key(Key::Enter);

    assert_eq!(app.state().user.stats.reward_points, 150);
    assert!(app.state().rewards_screen.overlay.is_none());
    assert_eq!(
        app.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Cashed out RM 20.00")
    );
}

#[test]
fn test_qr_scan_completes_through_data_event() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('4'));
    app.send_key(Key::Char('s'));
    assert!(app.state().rewards_screen.is_scanning());
    assert_eq!(app.take_effects(), vec![Effect::StartQrScan]);

    app.send_data_event(DataEvent::QrScanCompleted);
    assert!(app.state().rewards_screen.overlay.is_none());
    assert_eq!(
        app.state().notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Info)
    );
}

#[test]
fn test_redeem_from_catalog() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('4'));
    app.send_key(Key::Tab);
    // r2 costs 150
    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);

    let state = app.state();
    assert_eq!(state.user.stats.reward_points, 200);
    assert_eq!(state.user.claimed_rewards.len(), 1);
    assert!(state.user.claimed_rewards[0].code.starts_with("RW-"));
}

#[test]
fn test_profile_settings_and_sign_out() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('5'));
    app.assert_view(View::Profile);

    // Settings is the fourth menu item; dark mode is its first row
    app.send_keys(&[Key::Char('j'), Key::Char('j'), Key::Char('j'), Key::Enter]);
    app.send_key(Key::Enter);
    assert!(app.state().settings.dark_mode);
    app.send_key(Key::Esc);
    assert!(app.state().profile.modal.is_none());

    // Sign out is the last item
    app.send_key(Key::Char('k'));
    app.send_key(Key::Char('k'));
    app.send_key(Key::Char('k'));
    app.send_key(Key::Char('k'));
    app.send_key(Key::Enter);
    assert_eq!(app.state().top_level(), TopLevel::Auth);
}

#[test]
fn test_edit_profile_saves_patch() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('5'));
    app.send_key(Key::Enter);

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('u')));
    app.type_text("Alex W.");
    app.send_key(Key::Enter);

    assert!(app.state().profile.modal.is_none());
    assert_eq!(app.state().user.name, "Alex W.");
}

#[test]
fn test_market_listing_flow() {
    let mut app = TestApp::signed_in();
    app.send_keys(&[Key::Char('g'), Key::Char('m')]);
    app.send_key(Key::Char('n'));
    assert!(app.state().market.listing.is_some());

    app.send_key(Key::Tab);
    app.type_text("Old laptop");
    app.send_key(Key::Tab);
    app.type_text("Works, battery weak");
    app.send_key(Key::Tab);
    app.type_text("120");
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('s')));

    assert!(app.state().market.listing.is_none());
    assert_eq!(
        app.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Item listed successfully!")
    );
}

#[test]
fn test_every_view_renders() {
    let mut app = TestApp::signed_in();
    for view in [
        View::Home,
        View::Points,
        View::Market,
        View::Rewards,
        View::Profile,
        View::Guide,
        View::Schedule,
    ] {
        app.state_mut().navigate(view);
        render_to_string(app.state());
    }

    app.state_mut().navigate(View::Home);
    app.send_key(Key::Char('t'));
    let screen = render_to_string(app.state());
    assert!(screen.contains("Arriving in 15 mins"));
    assert!(screen.contains("Mohd Rizal"));
}

#[test]
fn test_pre_sign_in_screens_render() {
    let mut app = TestApp::new();
    assert!(render_to_string(app.state()).contains("Welcome to e-waste2go"));

    app.state_mut().complete_onboarding();
    assert!(render_to_string(app.state()).contains("Welcome Back"));
}

#[test]
fn test_overlays_render() {
    let mut app = TestApp::signed_in();
    app.send_key(Key::Char('4'));
    app.send_key(Key::Char('c'));
    render_to_string(app.state());
    app.send_key(Key::Esc);
    app.send_key(Key::Char('r'));
    assert!(render_to_string(app.state()).contains("My QR Code"));
    app.send_key(Key::Esc);
    app.send_key(Key::Char('s'));
    render_to_string(app.state());
    app.send_key(Key::Esc);

    app.send_key(Key::Char('5'));
    for _ in 0..7 {
        app.send_key(Key::Enter);
        render_to_string(app.state());
        app.send_key(Key::Esc);
        app.send_key(Key::Char('j'));
    }

    app.send_key(Key::Char('?'));
    assert!(render_to_string(app.state()).contains("Help"));
}

#[test]
fn test_dark_mode_changes_background() {
    let mut app = TestApp::signed_in();
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| ewaste2go::ui::render_app(f, app.state()))
        .unwrap();
    let light_bg = terminal.backend().buffer().content()[0].bg;

    app.state_mut().settings.dark_mode = true;
    terminal
        .draw(|f| ewaste2go::ui::render_app(f, app.state()))
        .unwrap();
    let dark_bg = terminal.backend().buffer().content()[0].bg;

    assert_ne!(light_bg, dark_bg);
}
