use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Trait for handling command execution (production = real timers and
/// opener, test = mock)
///
/// This trait abstracts the side effects of command execution, allowing tests
/// to inject a mock implementation that doesn't spawn timers or open links.
pub trait CommandHandler {
    /// Execute a command with access to mutable state
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Testable application core without terminal dependencies
///
/// Generic over H (handler) for zero-cost abstraction. The handler type determines
/// what happens to the effects a command produces.
pub struct AppCore<H: CommandHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: CommandHandler> AppCore<H> {
    /// Create a new application core with the given handler
    pub fn new(handler: H) -> Self {
        Self::with_state(AppState::new(), handler)
    }

    pub fn with_state(ui_state: AppState, handler: H) -> Self {
        Self { ui_state, handler }
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Handle a data event (for test injection or timer output)
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
