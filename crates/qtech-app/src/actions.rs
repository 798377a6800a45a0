//! Action handlers: async work requested by the update function
//!
//! Each action runs on the tokio runtime and reports back through the
//! message channel.

use std::process::{Command, Stdio};
use std::sync::Arc;

use qtech_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::ViewId;
use crate::transport::{ContactPayload, SubmissionTransport};

/// Execute an action by spawning background tasks
pub fn handle_action<T>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, transport: Arc<T>)
where
    T: SubmissionTransport + Sync + 'static,
{
    match action {
        UpdateAction::SubmitContact { view_id, payload } => {
            spawn_submission(view_id, payload, msg_tx, transport);
        }

        UpdateAction::OpenUrl { url, browser } => {
            tokio::spawn(async move {
                let msg = match open_url_in_browser(&url, &browser) {
                    Ok(()) => Message::LinkOpened { url },
                    Err(e) => {
                        error!("{}", e);
                        Message::LinkOpenFailed {
                            url,
                            error: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

/// Run one submission and report the completion for `view_id`
pub fn spawn_submission<T>(
    view_id: ViewId,
    payload: ContactPayload,
    msg_tx: mpsc::Sender<Message>,
    transport: Arc<T>,
) -> tokio::task::JoinHandle<()>
where
    T: SubmissionTransport + Sync + 'static,
{
    tokio::spawn(async move {
        let result = match transport.submit(&payload).await {
            Ok(ack) => Ok(ack),
            Err(e) => {
                error!("Submission transport error ({}): {}", view_id, e);
                Err(e.to_string())
            }
        };

        if msg_tx
            .send(Message::ContactSubmissionFinished { view_id, result })
            .await
            .is_err()
        {
            info!("Submission finished after shutdown ({})", view_id);
        }
    })
}

/// Open a URL in the system browser as a detached process.
///
/// If `browser` is non-empty, uses it as the browser command.
/// Otherwise uses the platform-default browser opener. No handle to the
/// child is kept.
pub fn open_url_in_browser(url: &str, browser: &str) -> Result<()> {
    spawn_opener(url, browser).map_err(|e| Error::link_open(url, e.to_string()))
}

fn spawn_opener(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        detached(Command::new(browser).arg(url)).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        detached(Command::new("open").arg(url)).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        detached(Command::new("xdg-open").arg(url)).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        detached(Command::new("cmd").args(["/C", "start", "", url])).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

/// Keep the opener off the terminal
fn detached(command: &mut Command) -> &mut Command {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
}
