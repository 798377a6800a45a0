//! End-to-end keyboard flows through the update loop and the simulated transport
//!
//! Runs with paused tokio time so the 1500ms submission delay is instant and
//! deterministic.

use std::sync::Arc;
use std::time::Duration;

use qtech_app::contact::SubmissionStatus;
use qtech_app::message::Message;
use qtech_app::process::process_message;
use qtech_app::transport::SimulatedTransport;
use qtech_app::{AppState, InputKey};
use qtech_core::{Page, Route};
use tokio::sync::mpsc;
use tokio::time::Instant;

struct Harness {
    state: AppState,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    transport: Arc<SimulatedTransport>,
}

impl Harness {
    fn new() -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            state: AppState::new(),
            tx,
            rx,
            transport: Arc::new(SimulatedTransport::new(Duration::from_millis(1500))),
        }
    }

    fn press(&mut self, key: InputKey) {
        process_message(&mut self.state, Message::Key(key), &self.tx, &self.transport);
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(InputKey::Char(c));
        }
    }

    async fn deliver_next(&mut self) {
        let msg = self.rx.recv().await.expect("channel open");
        process_message(&mut self.state, msg, &self.tx, &self.transport);
    }

    fn status(&self) -> SubmissionStatus {
        self.state.contact().expect("contact mounted").status.clone()
    }

    /// Open the contact page and fill the required fields
    fn fill_contact_form(&mut self) {
        self.press(InputKey::Char('3'));
        assert_eq!(self.state.current_page(), Some(Page::Contact));
        self.press(InputKey::Down);
        self.type_text("Jane");
        self.press(InputKey::Enter);
        self.type_text("jane@x.com");
    }
}

#[tokio::test(start_paused = true)]
async fn test_keyboard_submission_completes_after_delay() {
    let mut h = Harness::new();
    h.fill_contact_form();

    let started = Instant::now();
    h.press(InputKey::CharCtrl('s'));
    // Let the submission task start its timer
    tokio::task::yield_now().await;
    assert_eq!(h.status(), SubmissionStatus::Sending);
    assert!(!h.state.contact().unwrap().inputs_enabled());

    // Typing while sending changes nothing
    h.type_text("zzz");
    assert_eq!(h.state.contact().unwrap().form.name, "Jane");

    tokio::time::advance(Duration::from_millis(1499)).await;
    tokio::task::yield_now().await;
    assert!(h.rx.try_recv().is_err());
    assert_eq!(h.status(), SubmissionStatus::Sending);

    h.deliver_next().await;
    assert!(started.elapsed() >= Duration::from_millis(1500));

    let contact = h.state.contact().unwrap();
    assert_eq!(contact.status, SubmissionStatus::Submitted);
    assert_eq!(contact.form.name, "");
    assert_eq!(contact.form.client_email, "");
    assert_eq!(contact.form.message, "");
}

#[tokio::test(start_paused = true)]
async fn test_double_submit_sends_once() {
    let mut h = Harness::new();
    h.fill_contact_form();

    h.press(InputKey::CharCtrl('s'));
    h.press(InputKey::CharCtrl('s'));

    h.deliver_next().await;
    assert_eq!(h.status(), SubmissionStatus::Submitted);

    tokio::time::advance(Duration::from_millis(5000)).await;
    tokio::task::yield_now().await;
    assert!(h.rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_completion_after_navigating_away_is_dropped() {
    let mut h = Harness::new();
    h.fill_contact_form();
    h.press(InputKey::CharCtrl('s'));

    // Leave and come back; the new contact view starts empty
    h.press(InputKey::F(1));
    assert_eq!(h.state.current_page(), Some(Page::Home));
    h.press(InputKey::F(3));
    assert_eq!(h.status(), SubmissionStatus::Idle);

    h.deliver_next().await;
    assert_eq!(h.status(), SubmissionStatus::Idle);
    assert!(h.state.contact().unwrap().form.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_start_over_after_success() {
    let mut h = Harness::new();
    h.fill_contact_form();
    h.press(InputKey::CharCtrl('s'));
    h.deliver_next().await;

    h.press(InputKey::Enter);
    assert_eq!(h.status(), SubmissionStatus::Idle);
    assert!(h.state.contact().unwrap().shows_form());
}

#[tokio::test]
async fn test_portfolio_selection_resets_on_remount() {
    let mut h = Harness::new();
    h.press(InputKey::Char('2'));
    h.press(InputKey::Tab);
    h.press(InputKey::Char('j'));
    h.press(InputKey::Char('j'));
    h.press(InputKey::Enter);
    assert_eq!(h.state.portfolio().unwrap().selected_id(), Some("3"));

    h.press(InputKey::F(4));
    h.press(InputKey::F(2));
    assert_eq!(h.state.portfolio().unwrap().selected_id(), Some("1"));
}

#[tokio::test]
async fn test_unknown_route_then_recover() {
    let mut h = Harness::new();
    process_message(
        &mut h.state,
        Message::Navigate {
            route: Route::from_id("pricing"),
        },
        &h.tx,
        &h.transport,
    );
    assert_eq!(h.state.current_page(), None);

    h.press(InputKey::Char('1'));
    assert_eq!(h.state.current_page(), Some(Page::Home));
}
