//! Input validation helpers shared by configuration and registration

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("Invalid email regex")
});

/// Minimum password length accepted at sign-in and sign-up
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum length of a registration full name
pub const MIN_FULL_NAME_LEN: usize = 2;

/// Check if a string is a valid email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check if a path is an absolute in-app route
pub fn is_route_path(path: &str) -> bool {
    path.starts_with('/') && !path.contains(char::is_whitespace)
}
