//! Contact form to `mailto:` link
//!
//! There is no backend. Submitting the form opens the visitor's mail client
//! with the message prefilled.

use crate::consts::SUBMIT_RESET_DELAY_MS;
use crate::error::PageError;

/// Label and background shown on the submit button after sending
pub const SENT_LABEL: &str = "Message Sent!";
pub const SENT_BACKGROUND: &str = "var(--accent-color)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from raw form values; every field must be present and non-blank
    pub fn from_fields(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, PageError> {
        Ok(Self {
            name: required("name", name)?,
            email: required("email", email)?,
            message: required("message", message)?,
        })
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto(&self, recipient: &str) -> MailtoLink {
        MailtoLink {
            recipient: recipient.to_string(),
            subject: self.subject(),
            body: self.body(),
        }
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, PageError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PageError::EmptyField(field)),
    }
}

/// Mail composition target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// What the page does after handing the link to the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitFeedback {
    pub label: &'static str,
    pub background: &'static str,
    /// After this delay the label and background are restored and the form reset
    pub restore_after_ms: u32,
}

pub const SUBMIT_FEEDBACK: SubmitFeedback = SubmitFeedback {
    label: SENT_LABEL,
    background: SENT_BACKGROUND,
    restore_after_ms: SUBMIT_RESET_DELAY_MS,
};
