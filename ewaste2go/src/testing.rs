use crate::app_core::{AppCore, CommandHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent, Effect};
use crate::input::{Key, KeyEvent};
use crate::state::view::{TopLevel, View};
use crate::state::AppState;

/// Mock command handler for tests (no timers, no opener)
///
/// Executes commands synchronously using execute_command_sync and keeps
/// the effects they asked for, so tests can assert on them.
#[derive(Debug, Default)]
pub struct MockEffectHandler {
    effects: Vec<Effect>,
}

impl MockEffectHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl CommandHandler for MockEffectHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        let effects = executor::execute_command_sync(command, state);
        self.effects.extend(effects);
    }
}

pub struct TestApp {
    core: AppCore<MockEffectHandler>,
}

impl TestApp {
    /// Create a new test app at the onboarding screen
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockEffectHandler::new()),
        }
    }

    /// Test app already past onboarding and sign-in, on the home view
    pub fn signed_in() -> Self {
        let mut state = AppState::new();
        state.complete_onboarding();
        state.login();
        Self {
            core: AppCore::with_state(state, MockEffectHandler::new()),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type a string one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate a timer firing)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Direct access for arranging a scenario
    pub fn state_mut(&mut self) -> &mut AppState {
        self.core.state_mut()
    }

    /// Every effect produced so far, in order
    pub fn effects(&self) -> &[Effect] {
        self.core.handler().effects()
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.core.handler_mut().take_effects()
    }

    /// Assert that the app is showing a specific view
    pub fn assert_view(&self, expected: View) {
        assert_eq!(
            self.state().top_level(),
            TopLevel::Main(expected),
            "Expected different view"
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
