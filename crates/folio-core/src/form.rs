//! # Contact Form State Machine
//!
//! Client-side lifecycle of the contact form. One [`ContactForm`] is one
//! form instance on a page.
//!
//! ```text
//!            begin_submit                 finish_success
//!   Idle ───────────────────▶ Loading ───────────────────▶ Success
//!    ▲  │                      │  finish_failure
//!    │  │ honeypot filled      └─────────────────────────▶ Error(msg)
//!    │  └──────────────────────────────────────────────────▶ Success
//! ```
//!
//! `Success` and `Error` end an attempt. Any later `begin_submit` starts a
//! new attempt. `begin_submit` while `Loading` is ignored, so one form
//! never has two requests in flight.
//!
//! The form does no field validation of its own. The server is
//! authoritative; [`REQUIRED_FIELDS`](crate::contact::REQUIRED_FIELDS) only
//! mirrors the input hints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{ContactField, ContactRequest};

/// Name of the hidden honeypot input.
pub const HONEYPOT_FIELD: &str = "companyWebsite";

/// Error shown when the server answers with a non-success status.
pub const REJECTED_MESSAGE: &str = "Unable to send message right now. Please try email.";

/// Error shown when nothing more specific is known.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please retry or email me directly.";

/// Notice shown after a successful submission.
pub const SUCCESS_NOTICE: &str = "Thanks! I’ll reply within 24 hours.";

/// UI state of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FormState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the current attempt has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Current values of the form inputs, honeypot included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    /// Hidden, non-tabbable, autocomplete-off input. Humans never fill it.
    pub company_website: String,
}

impl FormFields {
    /// Whether automated form-filling populated the honeypot.
    pub fn honeypot_triggered(&self) -> bool {
        !self.company_website.is_empty()
    }

    /// Build the request body from the visible inputs.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            message: self.message.clone(),
        }
    }

    /// Set a visible input by field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What the caller must do after [`ContactForm::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Send this request, then report back with `finish_success` or
    /// `finish_failure`.
    Send(ContactRequest),
    /// Honeypot filled. The form already shows success; send nothing.
    Suppressed,
    /// A request is already in flight; do nothing.
    Ignored,
}

/// Misuse of the form lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A completion was reported with no request in flight.
    #[error("no submission in flight (form is {0})")]
    NotInFlight(&'static str),
}

/// A contact form instance.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    state: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form pre-filled with the given inputs.
    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// The submit control is disabled while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.state.is_loading()
    }

    pub fn button_label(&self) -> &'static str {
        if self.state.is_loading() {
            "Sending…"
        } else {
            "Send message"
        }
    }

    /// Status line under the form, if any.
    pub fn notice(&self) -> Option<&str> {
        match &self.state {
            FormState::Success => Some(SUCCESS_NOTICE),
            FormState::Error(message) => Some(message.as_str()),
            FormState::Idle | FormState::Loading => None,
        }
    }

    /// Handle the submit action. Never navigates; the caller performs the
    /// network call when told to.
    pub fn begin_submit(&mut self) -> SubmitAction {
        if self.state.is_loading() {
            return SubmitAction::Ignored;
        }

        if self.fields.honeypot_triggered() {
            self.state = FormState::Success;
            return SubmitAction::Suppressed;
        }

        self.state = FormState::Loading;
        SubmitAction::Send(self.fields.to_request())
    }

    /// The request succeeded. Clears every input.
    pub fn finish_success(&mut self) -> Result<(), FormError> {
        self.ensure_in_flight()?;
        self.state = FormState::Success;
        self.fields.reset();
        Ok(())
    }

    /// The request failed. Inputs are kept so the user can retry.
    ///
    /// A missing or blank message is replaced by [`FALLBACK_MESSAGE`].
    pub fn finish_failure(&mut self, message: Option<String>) -> Result<(), FormError> {
        self.ensure_in_flight()?;
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        self.state = FormState::Error(message);
        Ok(())
    }

    fn ensure_in_flight(&self) -> Result<(), FormError> {
        if self.state.is_loading() {
            Ok(())
        } else {
            Err(FormError::NotInFlight(self.state.as_str()))
        }
    }
}
