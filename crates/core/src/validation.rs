//! Request payload validation.
//!
//! Field rules are declared on the payload structs with `#[derive(Validate)]`;
//! the custom rules below are referenced from those attributes. Handlers run
//! them through a [`PayloadValidator`] held in application state.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::credential::PlainPassword;
use crate::error::CoreError;

/// HTTP verbs a monitor may probe with. An empty method means "default".
pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 40;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 40;

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Accept an empty method or one of [`HTTP_METHODS`] (case-sensitive).
pub fn validate_http_method(method: &str) -> Result<(), ValidationError> {
    if method.is_empty() || HTTP_METHODS.contains(&method) {
        Ok(())
    } else {
        Err(rule_error(
            "http_method",
            "must be one of GET POST PUT PATCH DELETE HEAD OPTIONS",
        ))
    }
}

/// Slugs are lowercase ASCII alphanumerics separated by single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(rule_error(
            "slug",
            "must contain lowercase letters, digits and single hyphens",
        ))
    }
}

/// Reject values that are empty or whitespace only.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(rule_error("blank", "must not be blank"))
    } else {
        Ok(())
    }
}

pub fn validate_username_length(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if (MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(rule_error(
            "username_length",
            "must be between 3 and 40 characters",
        ))
    }
}

/// Length check for a plaintext password.
///
/// The returned error carries no params, so the plaintext never reaches
/// `ValidationErrors`.
pub fn validate_password_length(password: &PlainPassword) -> Result<(), ValidationError> {
    let len = password.char_len();
    if (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        Ok(())
    } else {
        Err(rule_error(
            "password_length",
            "must be between 8 and 40 characters",
        ))
    }
}

/// Runs declarative payload rules and converts failures into [`CoreError::Validation`].
///
/// Constructed once at startup and shared through application state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadValidator;

impl PayloadValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate<T: Validate>(&self, payload: &T) -> Result<(), CoreError> {
        payload
            .validate()
            .map_err(|errors| CoreError::Validation(describe(&errors)))
    }
}

/// Render errors as `field: message` pairs sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
