//! Contact form validation and submit button state.

use crate::config::{EMAIL_ERROR, LOADING_LABEL, PHONE_ERROR};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[1-9]\d{0,15}$").expect("valid phone pattern"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates a phone number, ignoring any whitespace in it.
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&compact)
}

/// Per-field messages for an invalid contact form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactErrors {
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

/// Checks the contact form. The phone number is optional.
pub fn validate_contact(email: &str, phone: &str) -> ContactErrors {
    let email = email.trim();
    let phone = phone.trim();
    ContactErrors {
        email: (!validate_email(email)).then_some(EMAIL_ERROR),
        phone: (!phone.is_empty() && !validate_phone(phone)).then_some(PHONE_ERROR),
    }
}

/// How a button should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
}

/// Remembers a button's label while it shows a loading state.
#[derive(Debug)]
pub struct ButtonLoadingState {
    original: String,
}

impl ButtonLoadingState {
    /// Enters the loading state with the default loading text.
    pub fn begin(original: impl Into<String>) -> (Self, ButtonView) {
        Self::begin_with(original, LOADING_LABEL)
    }

    pub fn begin_with(original: impl Into<String>, loading_text: &str) -> (Self, ButtonView) {
        let state = Self {
            original: original.into(),
        };
        let view = ButtonView {
            label: loading_text.to_string(),
            enabled: false,
        };
        (state, view)
    }

    /// Leaves the loading state, giving back the original label.
    pub fn restore(self) -> ButtonView {
        ButtonView {
            label: self.original,
            enabled: true,
        }
    }
}
