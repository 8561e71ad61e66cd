//! Sign-in and registration input rules

use super::types::RegisterData;
use crate::utils::error::{BookmsError, Result};
use crate::utils::validation::{MIN_FULL_NAME_LEN, MIN_PASSWORD_LEN, is_valid_email};

/// Check sign-in input before it reaches the backend
pub fn validate_sign_in(email: &str, password: &str) -> Result<()> {
    validate_email(email)?;
    validate_password(password)
}

/// Check registration input; the first failing rule is reported
pub fn validate_registration(data: &RegisterData) -> Result<()> {
    let full_name = data.full_name.trim();
    if full_name.is_empty() {
        return Err(BookmsError::validation("Full name is required"));
    }
    if full_name.chars().count() < MIN_FULL_NAME_LEN {
        return Err(BookmsError::validation(format!(
            "Full name must be at least {} characters",
            MIN_FULL_NAME_LEN
        )));
    }

    validate_email(&data.email)?;
    validate_password(&data.password)?;

    if data.password != data.confirm_password {
        return Err(BookmsError::validation("Passwords do not match"));
    }
    if !data.agree_to_terms {
        return Err(BookmsError::validation(
            "You must agree to the terms and conditions",
        ));
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(BookmsError::validation("Email is required"));
    }
    if !is_valid_email(email.trim()) {
        return Err(BookmsError::validation("Invalid email address"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(BookmsError::validation("Password is required"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(BookmsError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
