//! OS signal handling: SIGINT/SIGTERM become `Message::Quit`

use qtech_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Listen for a termination signal in the background and request quit
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                if let Err(e) = tx.send(Message::Quit).await {
                    warn!("{}", Error::channel_send(e.to_string()));
                }
            }
            Err(e) => error!("Signal handler unavailable: {}", e),
        }
    })
}

/// Resolve with the name of the first termination signal received
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("SIGINT handler: {}", e)))?;
        let mut terminate = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("SIGTERM handler: {}", e)))?;

        let name = tokio::select! {
            _ = interrupt.recv() => "SIGINT",
            _ = terminate.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
        Ok("Ctrl+C")
    }
}
