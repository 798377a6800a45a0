//! Message processing: the TEA update loop plus action dispatch

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::transport::SubmissionTransport;

/// Process a message through the TEA update function.
///
/// Follow-up messages are handled in the same call; actions are spawned
/// onto the runtime and report back through `msg_tx`.
pub fn process_message<T>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    transport: &Arc<T>,
) where
    T: SubmissionTransport + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(transport));
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FormField, SubmissionStatus};
    use crate::transport::SimulatedTransport;
    use qtech_core::{Page, Route};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_submission_round_trip() {
        let (tx, mut rx) = mpsc::channel(8);
        let transport = Arc::new(SimulatedTransport::new(Duration::from_millis(1500)));
        let mut state = AppState::new();

        for msg in [
            Message::Navigate {
                route: Route::Page(Page::Contact),
            },
            Message::ContactInput {
                field: FormField::Name,
                value: "Jane".to_string(),
            },
            Message::ContactInput {
                field: FormField::ClientEmail,
                value: "jane@x.com".to_string(),
            },
            Message::ContactSubmit,
        ] {
            process_message(&mut state, msg, &tx, &transport);
        }
        assert_eq!(state.contact().unwrap().status, SubmissionStatus::Sending);

        let completion = rx.recv().await.unwrap();
        process_message(&mut state, completion, &tx, &transport);

        let contact = state.contact().unwrap();
        assert_eq!(contact.status, SubmissionStatus::Submitted);
        assert!(contact.form.is_empty());
    }
}
