use super::config::Recipient;
use super::constants::{
    CONTACT_FAILURE_MESSAGE, CONTACT_SUCCESS_MESSAGE, SUBMIT_LABEL_IDLE, SUBMIT_LABEL_SENDING,
};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Weak;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Map a form control's `name` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("a submission is already in flight")]
    AlreadySending,
    #[error("no submission is in flight")]
    NotSending,
    #[error("form was unmounted")]
    Detached,
}

/// Template parameters sent with every message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

/// Something that can deliver an [`EmailPayload`].
#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()>;
}

/// Contact form state owned by one mounted form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    #[inline]
    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Idle/Succeeded/Failed -> Sending. Builds the payload from the current
    /// field values.
    pub fn begin_submit(&mut self, recipient: &Recipient) -> Result<EmailPayload, ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        self.status = SubmissionStatus::Sending;
        Ok(EmailPayload {
            from_name: self.name.clone(),
            to_name: recipient.name.clone(),
            from_email: self.email.clone(),
            to_email: recipient.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Sending -> Succeeded (fields cleared) or Failed (fields kept). The
    /// underlying error is logged, never shown.
    pub fn finish<E: Display>(&mut self, outcome: Result<(), E>) -> Result<(), ContactError> {
        if !self.is_sending() {
            return Err(ContactError::NotSending);
        }
        match outcome {
            Ok(()) => {
                log::info!("[contact] message sent");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(e) => {
                log::error!("[contact] send failed: {}", e);
                self.status = SubmissionStatus::Failed(CONTACT_FAILURE_MESSAGE.to_string());
            }
        }
        Ok(())
    }

    pub fn status_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Succeeded => Some(CONTACT_SUCCESS_MESSAGE),
            SubmissionStatus::Failed(msg) => Some(msg),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.status, SubmissionStatus::Failed(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            SUBMIT_LABEL_SENDING
        } else {
            SUBMIT_LABEL_IDLE
        }
    }
}

/// Run one submit handshake.
///
/// The form is never borrowed across the await, so keystrokes keep working
/// while the request is in flight. If the form is dropped before the
/// response arrives the outcome is discarded.
pub async fn submit<T: EmailTransport>(
    form: &Weak<RefCell<ContactForm>>,
    transport: &T,
    recipient: &Recipient,
) -> Result<(), ContactError> {
    let payload = {
        let form = form.upgrade().ok_or(ContactError::Detached)?;
        let mut form = form.borrow_mut();
        form.begin_submit(recipient)?
    };
    let outcome = transport.send(&payload).await;
    let form = form.upgrade().ok_or(ContactError::Detached)?;
    let mut form = form.borrow_mut();
    form.finish(outcome.map_err(|e| format!("{:#}", e)))
}
