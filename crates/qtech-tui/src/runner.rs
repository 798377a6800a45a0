//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use qtech_app::config::Settings;
use qtech_app::message::Message;
use qtech_app::process::process_message;
use qtech_app::state::AppState;
use qtech_app::{signals, Transport};
use qtech_core::prelude::*;
use qtech_core::Route;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the site in the terminal until the user quits
pub async fn run(settings: Settings, route: Route, transport: Transport) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting at {:?} with {:?} transport",
        route.id(),
        transport.kind()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings, route);

    // Unified channel for signals and completed actions
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let signal_task = signals::spawn_signal_handler(msg_tx.clone());
    let transport = Arc::new(transport);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &transport);

    signal_task.abort();
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    } else {
        info!("Exited cleanly");
    }

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    transport: &Arc<Transport>,
) -> Result<()> {
    while !state.should_quit() {
        // Messages from the signal handler and spawned actions
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, transport);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, transport);
        }
    }

    Ok(())
}
