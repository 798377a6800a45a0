//! Contact view state: form fields, focus and the submission state machine
//!
//! ```text
//! Idle ──submit (valid)──▶ Sending ──Ok──▶ Submitted ──start_over──▶ Idle
//!  ▲                         │
//!  └──── edit ◀── Failed ◀───┘ Err
//! ```

use std::sync::LazyLock;

use qtech_core::content::CONTACT_FAILURE;
use regex::Regex;

use crate::transport::{ContactPayload, SubmissionAck};

/// Email shape accepted by a browser's native email input
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid email pattern regex")
});

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    ClientEmail,
    Message,
}

impl FormField {
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Message)
    }
}

/// Focus position inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(FormField),
    Submit,
}

impl Default for ContactFocus {
    fn default() -> Self {
        ContactFocus::Field(FormField::Name)
    }
}

impl ContactFocus {
    const ORDER: [ContactFocus; 4] = [
        ContactFocus::Field(FormField::Name),
        ContactFocus::Field(FormField::ClientEmail),
        ContactFocus::Field(FormField::Message),
        ContactFocus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Submitted,
    /// Carries the user-facing failure message
    Failed(String),
}

/// Why a submit attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    /// The field the hint points at
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingName => FormField::Name,
            ValidationError::MissingEmail | ValidationError::InvalidEmail => FormField::ClientEmail,
        }
    }
}

/// Raw field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub client_email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::ClientEmail => &self.client_email,
            FormField::Message => &self.message,
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::ClientEmail => self.client_email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.client_email.is_empty() && self.message.is_empty()
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.client_email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            client_email: self.client_email.trim().to_string(),
            message: self.message.clone(),
        }
    }
}

/// State owned by a mounted contact view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    pub focus: ContactFocus,
    pub validation: Option<ValidationError>,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Inputs accept edits
    pub fn inputs_enabled(&self) -> bool {
        !self.is_sending()
    }

    /// The form body is rendered (everything except the success banner)
    pub fn shows_form(&self) -> bool {
        self.status != SubmissionStatus::Submitted
    }

    /// Replace a field value.
    ///
    /// Ignored while sending. Leaves `Submitted`/`Failed` for `Idle` and
    /// clears any validation hint. Returns `true` when applied.
    pub fn update_field(&mut self, field: FormField, value: String) -> bool {
        if self.is_sending() {
            return false;
        }

        if matches!(
            self.status,
            SubmissionStatus::Submitted | SubmissionStatus::Failed(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
        self.validation = None;
        self.form.set(field, value);
        true
    }

    /// Start a submission.
    ///
    /// Returns the payload to hand to the transport, or `None` when the
    /// submission is refused (already sending, already submitted, or the
    /// input is invalid, in which case `validation` is set).
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        match self.status {
            SubmissionStatus::Sending | SubmissionStatus::Submitted => return None,
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
        }

        if let Err(err) = self.form.validate() {
            self.focus = ContactFocus::Field(err.field());
            self.validation = Some(err);
            return None;
        }

        self.validation = None;
        self.status = SubmissionStatus::Sending;
        Some(self.form.payload())
    }

    /// Apply the transport result. Returns `false` if no submission was pending.
    pub fn finish_submit(&mut self, result: Result<SubmissionAck, String>) -> bool {
        if !self.is_sending() {
            return false;
        }

        match result {
            Ok(_) => {
                self.form = ContactForm::default();
                self.focus = ContactFocus::default();
                self.status = SubmissionStatus::Submitted;
            }
            Err(_) => {
                self.status = SubmissionStatus::Failed(CONTACT_FAILURE.to_string());
            }
        }
        true
    }

    /// Leave the success banner for a blank form
    pub fn start_over(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitted {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        self.focus = ContactFocus::default();
        true
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}
