use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::background::{BackgroundTaskManager, Timers};
use crate::commands::{executor, handlers};
use crate::config::Settings;
use crate::input::KeyEvent;
use crate::state::AppState;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("ewaste2go starting");

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut ui_state = AppState::from_settings(&self.settings);
        let mut task_manager = BackgroundTaskManager::new();
        let timers = Timers::new(
            data_tx,
            self.settings.tracking_interval(),
            self.settings.qr_scan_delay(),
        );

        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = ui_state.scan_throbber_mut() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::debug!("Key press: {:?}", key);
                            if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state) {
                                tracing::debug!("Executing command: {:?}", command);
                                executor::execute_command(
                                    command,
                                    &mut ui_state,
                                    &mut task_manager,
                                    &timers,
                                );
                            }
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    crate::state::reducer::reduce_data_event(&mut ui_state, data_event);
                }
            }

            // Check if we should quit
            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        // Stop the tracking ticker and any pending scan
        task_manager.cancel_all();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
