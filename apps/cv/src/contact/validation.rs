use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::AppError;

pub const MAX_SUBJECT_CHARS: usize = 200;
pub const MAX_MESSAGE_CHARS: usize = 5000;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Raw contact form submission. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub email: String,
    pub category: String,
    pub subject: String,
    pub message: String,
}

/// A validated submission. `safe_*` fields are HTML-escaped and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    /// Rate-limit key: the address exactly as submitted.
    pub sender: String,
    pub safe_email: String,
    pub safe_category: String,
    pub safe_subject: String,
    pub safe_message: String,
    /// Message body as submitted, for the plain-text part.
    pub raw_message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Escapes `<`, `>` and `"` and trims surrounding whitespace.
pub fn sanitize(input: &str) -> String {
    input
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .trim()
        .to_string()
}

impl ContactForm {
    /// Checks required fields, address shape and length caps, in that order.
    pub fn validate(self) -> Result<ContactMessage, AppError> {
        if [&self.email, &self.category, &self.subject, &self.message]
            .iter()
            .any(|f| f.is_empty())
        {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::Validation("Invalid email address.".to_string()));
        }
        if self.subject.chars().count() > MAX_SUBJECT_CHARS {
            return Err(AppError::Validation("Subject is too long.".to_string()));
        }
        if self.message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(AppError::Validation(
                "Message is too long (max 5000 characters).".to_string(),
            ));
        }

        Ok(ContactMessage {
            safe_email: sanitize(&self.email),
            safe_category: sanitize(&self.category),
            safe_subject: sanitize(&self.subject),
            safe_message: sanitize(&self.message),
            sender: self.email,
            raw_message: self.message,
        })
    }
}
