//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::{self, dashboard::DashboardState};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the dashboard in the terminal until the user quits.
pub async fn run_tui_mode(
    session: SessionData,
    dashboard: DashboardState,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.catalog_source);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let SessionData {
        event_receiver,
        refresh_sender,
        join_handles,
        shutdown_sender,
        ..
    } = session;
    let app = ui::App::new(
        dashboard,
        event_receiver,
        refresh_sender,
        shutdown_sender.clone(),
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    print_session_shutdown();
    let _ = shutdown_sender.send(());
    for handle in join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
