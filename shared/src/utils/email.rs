//! Email address helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic address check: one `@`, no whitespace, a dotted domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Maximum address length accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Canonical form used as the OTP key component
///
/// Surrounding whitespace is removed and the address is lower-cased, so
/// `Alice@Example.com ` and `alice@example.com` name the same slot.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether an address is syntactically acceptable
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask an address for logging
///
/// Keeps the first character of the local part and the full domain.
///
/// ```
/// use adm_shared::utils::email::mask_email;
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}
