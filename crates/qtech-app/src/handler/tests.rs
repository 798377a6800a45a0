//! Tests for handler module

use super::*;
use crate::contact::{ContactFocus, FormField, SubmissionStatus, ValidationError};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ActiveView, AppState, Focus, NoticeLevel};
use crate::transport::SubmissionAck;
use qtech_core::content::CONTACT_FAILURE;
use qtech_core::{AppPhase, Page, ProjectLink, Route};

/// Run a message and all follow-up messages, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn contact_state() -> AppState {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::Navigate {
            route: Route::Page(Page::Contact),
        },
    );
    run(&mut state, Message::FocusBody);
    state
}

fn ack() -> Result<SubmissionAck, String> {
    Ok(SubmissionAck { status: None })
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_in_nav_produces_quit() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let state = contact_state();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_esc_twice_in_contact_form_keeps_running() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");

    press(&mut state, InputKey::Esc);
    assert_eq!(state.focus, Focus::Nav);
    press(&mut state, InputKey::Esc);

    assert!(!state.should_quit());
    assert_eq!(state.contact().unwrap().form.name, "Jane");
}

#[test]
fn test_esc_in_nav_does_not_quit() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Esc).is_none());
}

#[test]
fn test_q_key_types_in_contact_form() {
    let mut state = contact_state();
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.contact().unwrap().form.name, "q");
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_nav_keys_move_cursor_and_activate() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Right);
    assert_eq!(state.nav_cursor, 1);
    assert_eq!(state.route, Route::Page(Page::Home));

    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::Page(Page::Portfolio));
}

#[test]
fn test_digit_keys_navigate_directly() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('4'));
    assert_eq!(state.route, Route::Page(Page::About));
    assert_eq!(state.view(), &ActiveView::About);

    press(&mut state, InputKey::Char('3'));
    assert!(matches!(state.view(), ActiveView::Contact(_)));
}

#[test]
fn test_function_keys_navigate_from_form() {
    let mut state = contact_state();
    press(&mut state, InputKey::F(2));
    assert_eq!(state.route, Route::Page(Page::Portfolio));
    assert_eq!(state.focus, Focus::Nav);
}

#[test]
fn test_exactly_one_body_matches_latest_route() {
    let mut state = AppState::new();
    let routes = [
        Route::Page(Page::Portfolio),
        Route::from_id("pricing"),
        Route::Page(Page::Contact),
        Route::Page(Page::Contact),
        Route::Page(Page::Home),
        Route::Page(Page::About),
    ];

    for route in routes {
        run(
            &mut state,
            Message::Navigate {
                route: route.clone(),
            },
        );
        let expected = ActiveView::for_route(&route);
        assert_eq!(
            std::mem::discriminant(state.view()),
            std::mem::discriminant(&expected)
        );
        assert_eq!(state.route, route);
    }
}

#[test]
fn test_activate_portfolio_selects_first_project() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::Navigate {
            route: Route::from_id("portfolio"),
        },
    );

    let portfolio = state.portfolio().unwrap();
    assert_eq!(portfolio.selected_id(), Some("1"));
    assert_eq!(
        portfolio.selected().unwrap().title,
        "Real-Time Logistics Dashboard"
    );
}

#[test]
fn test_focus_body_ignored_for_static_views() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Down);
    assert_eq!(state.focus, Focus::Nav);

    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Down);
    assert_eq!(state.focus, Focus::Body);

    press(&mut state, InputKey::Esc);
    assert_eq!(state.focus, Focus::Nav);
}

// ─────────────────────────────────────────────────────────
// Portfolio
// ─────────────────────────────────────────────────────────

#[test]
fn test_portfolio_cursor_and_select() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Tab);

    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    let selected = state.portfolio().unwrap().selected().unwrap();
    assert_eq!(selected.title, "E-commerce Headless CMS");
    assert_eq!(
        selected.tech_stack,
        &["Next.js", "Sanity/Strapi CMS", "Tailwind CSS"]
    );
}

#[test]
fn test_select_project_twice_is_idempotent() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('2'));
    run(&mut state, Message::SelectProject { id: "2".into() });
    let before = state.portfolio().cloned();

    let actions = run(&mut state, Message::SelectProject { id: "2".into() });
    assert!(actions.is_empty());
    assert_eq!(state.portfolio().cloned(), before);
}

#[test]
fn test_open_link_produces_action_for_selection() {
    let mut state = AppState::new();
    state.settings.links.browser = "firefox".to_string();
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Tab);

    let actions = press(&mut state, InputKey::Char('g'));
    assert_eq!(
        actions,
        vec![UpdateAction::OpenUrl {
            url: "https://github.com/qtech/logistics-dashboard".to_string(),
            browser: "firefox".to_string(),
        }]
    );

    run(&mut state, Message::SelectProject { id: "2".into() });
    let actions = run(
        &mut state,
        Message::OpenProjectLink {
            link: ProjectLink::Preview,
        },
    );
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::OpenUrl { url, .. }] if url == "https://demo.qtech.com/billing-api"
    ));
}

#[test]
fn test_link_open_failure_sets_notice() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::LinkOpenFailed {
            url: "https://demo.qtech.com/logistics".to_string(),
            error: "not found".to_string(),
        },
    );

    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("https://demo.qtech.com/logistics"));
}

// ─────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_updates_focused_field() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.comm");
    press(&mut state, InputKey::Backspace);

    let form = &state.contact().unwrap().form;
    assert_eq!(form.name, "Jane");
    assert_eq!(form.client_email, "jane@x.com");
}

#[test]
fn test_enter_advances_and_inserts_newline_in_message() {
    let mut state = contact_state();
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Enter);
    assert_eq!(
        state.contact().unwrap().focus,
        ContactFocus::Field(FormField::Message)
    );

    type_text(&mut state, "a");
    press(&mut state, InputKey::Enter);
    type_text(&mut state, "b");
    assert_eq!(state.contact().unwrap().form.message, "a\nb");
}

#[test]
fn test_ctrl_u_clears_field() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(state.contact().unwrap().form.name, "");
}

#[test]
fn test_submit_produces_action_and_sending() {
    let mut state = contact_state();
    run(
        &mut state,
        Message::ContactInput {
            field: FormField::Name,
            value: "Jane".to_string(),
        },
    );
    run(
        &mut state,
        Message::ContactInput {
            field: FormField::ClientEmail,
            value: "jane@x.com".to_string(),
        },
    );

    let actions = press(&mut state, InputKey::CharCtrl('s'));
    let view_id = state.view_id();
    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::SubmitContact {
            view_id: id,
            payload,
        } => {
            assert_eq!(*id, view_id);
            assert_eq!(payload.name, "Jane");
            assert_eq!(payload.client_email, "jane@x.com");
            assert_eq!(payload.message, "");
        }
        other => panic!("unexpected action {:?}", other),
    }

    let contact = state.contact().unwrap();
    assert_eq!(contact.status, SubmissionStatus::Sending);
    assert!(!contact.inputs_enabled());
}

#[test]
fn test_second_submit_while_sending_has_no_action() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.com");

    assert_eq!(press(&mut state, InputKey::CharCtrl('s')).len(), 1);
    assert!(press(&mut state, InputKey::CharCtrl('s')).is_empty());
    assert!(run(&mut state, Message::ContactSubmit).is_empty());
}

#[test]
fn test_typing_ignored_while_sending() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.com");
    press(&mut state, InputKey::CharCtrl('s'));

    type_text(&mut state, "zzz");
    assert_eq!(state.contact().unwrap().form.client_email, "jane@x.com");
}

#[test]
fn test_invalid_submit_sets_validation_hint() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");

    let actions = press(&mut state, InputKey::CharCtrl('s'));
    assert!(actions.is_empty());

    let contact = state.contact().unwrap();
    assert_eq!(contact.status, SubmissionStatus::Idle);
    assert_eq!(contact.validation, Some(ValidationError::MissingEmail));
    assert_eq!(contact.focus, ContactFocus::Field(FormField::ClientEmail));
}

#[test]
fn test_successful_completion_clears_fields() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.com");
    press(&mut state, InputKey::CharCtrl('s'));
    let view_id = state.view_id();

    run(
        &mut state,
        Message::ContactSubmissionFinished {
            view_id,
            result: ack(),
        },
    );

    let contact = state.contact().unwrap();
    assert_eq!(contact.status, SubmissionStatus::Submitted);
    assert!(contact.form.is_empty());
}

#[test]
fn test_failed_completion_retains_fields() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.com");
    press(&mut state, InputKey::CharCtrl('s'));
    let view_id = state.view_id();

    run(
        &mut state,
        Message::ContactSubmissionFinished {
            view_id,
            result: Err("HTTP status 500".to_string()),
        },
    );

    let contact = state.contact().unwrap();
    assert_eq!(
        contact.status,
        SubmissionStatus::Failed(CONTACT_FAILURE.to_string())
    );
    assert_eq!(contact.form.name, "Jane");
    assert_eq!(contact.form.client_email, "jane@x.com");
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.com");
    press(&mut state, InputKey::CharCtrl('s'));
    let stale = state.view_id();

    // Leave and come back: a fresh contact view under a new id
    press(&mut state, InputKey::F(1));
    press(&mut state, InputKey::F(3));
    assert_ne!(state.view_id(), stale);
    let before = state.clone();

    run(
        &mut state,
        Message::ContactSubmissionFinished {
            view_id: stale,
            result: ack(),
        },
    );

    assert_eq!(state.route, before.route);
    assert_eq!(state.mounted, before.mounted);
    assert_eq!(state.contact().unwrap().status, SubmissionStatus::Idle);
}

#[test]
fn test_enter_on_success_banner_starts_over() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.com");
    press(&mut state, InputKey::CharCtrl('s'));
    let view_id = state.view_id();
    run(
        &mut state,
        Message::ContactSubmissionFinished {
            view_id,
            result: ack(),
        },
    );

    // Typing on the banner does nothing
    press(&mut state, InputKey::Char('x'));
    assert_eq!(state.contact().unwrap().status, SubmissionStatus::Submitted);

    press(&mut state, InputKey::Enter);
    assert_eq!(state.contact().unwrap().status, SubmissionStatus::Idle);
}

#[test]
fn test_submit_button_enter_submits() {
    let mut state = contact_state();
    type_text(&mut state, "Jane");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "jane@x.com");
    press(&mut state, InputKey::BackTab);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.contact().unwrap().focus, ContactFocus::Submit);

    let actions = press(&mut state, InputKey::Enter);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SubmitContact { .. }]
    ));
}

#[test]
fn test_tick_advances_frame() {
    let mut state = AppState::new();
    run(&mut state, Message::Tick);
    run(&mut state, Message::Tick);
    assert_eq!(state.tick, 2);
}
