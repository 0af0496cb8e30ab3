//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::events::{Event as WorkerEvent, EventType, FetchGeneration};
use crate::logging::LogLevel;
use crate::ui::dashboard::{DashboardState, KeyOutcome, render_dashboard};
use crate::ui::splash::render_splash;
use crate::view::widget::grid_columns;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The connectors dashboard.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Events are queued here while the splash is shown.
    dashboard: Box<DashboardState>,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Requests catalog fetches from the fetch worker.
    refresh_sender: mpsc::Sender<FetchGeneration>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        dashboard: DashboardState,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        refresh_sender: mpsc::Sender<FetchGeneration>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: Box::new(dashboard),
            event_receiver,
            refresh_sender,
            shutdown_sender,
        }
    }

    /// Asks the fetch worker for `generation`.
    fn send_refresh(&mut self, generation: FetchGeneration) {
        if let Err(e) = self.refresh_sender.try_send(generation) {
            self.dashboard.add_event(WorkerEvent::dashboard_with_level(
                format!("Could not request fetch {}: {}", generation, e),
                EventType::Error,
                LogLevel::Warn,
            ));
        }
    }

    fn shutdown(&self) {
        let _ = self.shutdown_sender.send(());
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    let first = app.dashboard.request_refresh();
    app.send_refresh(first);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.dashboard.add_event(event);
        }

        if app.current_screen == Screen::Dashboard {
            app.dashboard.update();
            let width = terminal.size()?.width;
            app.dashboard.set_columns(grid_columns(width.saturating_sub(2)));
        }
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.shutdown();
                    return Ok(());
                }

                match app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => app.current_screen = Screen::Dashboard,
                    Screen::Dashboard => match app.dashboard.handle_key(key.code) {
                        KeyOutcome::Refresh(generation) => app.send_refresh(generation),
                        KeyOutcome::Quit => {
                            app.shutdown();
                            return Ok(());
                        }
                        KeyOutcome::Handled => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}
