//! Input validation for the operations this core exposes.
//!
//! All checks run before any component logic or storage access; a failure
//! here is always caller-fixable.

use crate::{CoreError, Result as CoreErrorResult};

const MAX_EMAIL_LENGTH: usize = 254;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_CONTENT_LENGTH: usize = 65_536;

#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if email.is_empty() {
        return Err(CoreError::validation("email", "email is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::validation(
            "email",
            format!("email exceeds {} characters", MAX_EMAIL_LENGTH),
        ));
    }

    // Minimal structural check: non-empty local part and domain
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() {
        return Err(CoreError::validation("email", "email is not valid"));
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_snippet_content(content: &str) -> CoreErrorResult<()> {
    if content.trim().is_empty() {
        return Err(CoreError::validation("content", "content is required"));
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(CoreError::validation(
            "content",
            format!("content exceeds {} bytes", MAX_CONTENT_LENGTH),
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_feedback_text(text: &str) -> CoreErrorResult<()> {
    if text.trim().is_empty() {
        return Err(CoreError::validation("text", "text is required"));
    }
    if text.len() > MAX_CONTENT_LENGTH {
        return Err(CoreError::validation(
            "text",
            format!("text exceeds {} bytes", MAX_CONTENT_LENGTH),
        ));
    }

    Ok(())
}
