//! Key event handlers for the navigation bar and each view

use qtech_core::{ProjectLink, Route, NAV_ITEMS};

use crate::contact::{ContactFocus, ContactState, SubmissionStatus};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ActiveView, AppState, Focus};

/// Convert key events to messages based on focus and the mounted view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys that work everywhere, including while typing
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(n @ 1..=4) => return Some(navigate_to_item(usize::from(n - 1))),
        _ => {}
    }

    match (state.focus, state.view()) {
        (Focus::Body, ActiveView::Portfolio(_)) => handle_key_portfolio(key),
        (Focus::Body, ActiveView::Contact(contact)) => handle_key_contact(contact, key),
        _ => handle_key_nav(key),
    }
}

fn navigate_to_item(index: usize) -> Message {
    Message::Navigate {
        route: Route::Page(NAV_ITEMS[index].page),
    }
}

/// Handle key events with the navigation bar focused
fn handle_key_nav(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::NavPrevious),
        InputKey::Right | InputKey::Char('l') => Some(Message::NavNext),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::NavActivate),

        // Direct destination: 1-4
        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(navigate_to_item(index))
        }

        InputKey::Down | InputKey::Tab => Some(Message::FocusBody),

        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events inside the portfolio list
fn handle_key_portfolio(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::PortfolioCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::PortfolioCursorDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::PortfolioSelectAtCursor),

        InputKey::Char('p') => Some(Message::OpenProjectLink {
            link: ProjectLink::Preview,
        }),
        InputKey::Char('g') => Some(Message::OpenProjectLink {
            link: ProjectLink::Repository,
        }),

        InputKey::Esc | InputKey::Tab | InputKey::BackTab => Some(Message::FocusNav),
        _ => None,
    }
}

/// Handle key events inside the contact form
fn handle_key_contact(contact: &ContactState, key: InputKey) -> Option<Message> {
    if contact.status == SubmissionStatus::Submitted {
        return match key {
            InputKey::Enter => Some(Message::ContactStartOver),
            InputKey::Esc => Some(Message::FocusNav),
            _ => None,
        };
    }

    match key {
        InputKey::Esc => return Some(Message::FocusNav),
        InputKey::Tab | InputKey::Down => return Some(Message::ContactFocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::ContactFocusPrevious),
        InputKey::CharCtrl('s') => return Some(Message::ContactSubmit),
        _ => {}
    }

    if !contact.inputs_enabled() {
        return None;
    }

    match contact.focus {
        ContactFocus::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::ContactSubmit),
            _ => None,
        },

        ContactFocus::Field(field) => {
            let current = contact.form.get(field);
            match key {
                InputKey::Char(c) => Some(Message::ContactInput {
                    field,
                    value: format!("{}{}", current, c),
                }),
                InputKey::Backspace if current.is_empty() => None,
                InputKey::Backspace => {
                    let mut value = current.to_string();
                    value.pop();
                    Some(Message::ContactInput { field, value })
                }
                InputKey::CharCtrl('u') => Some(Message::ContactInput {
                    field,
                    value: String::new(),
                }),
                InputKey::Enter if field.is_multiline() => Some(Message::ContactInput {
                    field,
                    value: format!("{}\n", current),
                }),
                InputKey::Enter => Some(Message::ContactFocusNext),
                _ => None,
            }
        }
    }
}
