//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

// Atoms may also carry non-ASCII letters, so `josé@example.com` is accepted.
static LOCAL_PART_RE: Lazy<Regex> = Lazy::new(|| {
    const ATEXT: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]";
    Regex::new(&format!(r"^{ATEXT}+(\.{ATEXT}+)*$"))
        .expect("Failed to compile email local part regex")
});

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+([A-Za-z]{2,63}|xn--[A-Za-z0-9-]{2,59})$")
        .expect("Failed to compile email domain regex")
});

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("ali@example.com").unwrap();
/// assert_eq!(email.as_str(), "ali@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly one '@', at most 254 characters overall
    /// - Local part: dot-separated atoms of RFC 5322 atext or non-ASCII letters,
    ///   at most 64 characters
    /// - Domain: dot-separated labels ending in an alphabetic TLD of 2+ characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    fn is_valid(email: &str) -> bool {
        if email.len() > MAX_EMAIL_LEN {
            return false;
        }

        let (local, domain) = match email.split_once('@') {
            Some(parts) => parts,
            None => return false,
        };

        if domain.contains('@') || local.chars().count() > MAX_LOCAL_LEN {
            return false;
        }

        LOCAL_PART_RE.is_match(local) && DOMAIN_RE.is_match(domain)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
