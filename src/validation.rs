//! Field and uniqueness rules applied to contact input before any write.
//!
//! Every rule is evaluated and contributes its own error; nothing
//! short-circuits, so the form can show all problems at once.

use crate::domain::{EmailAddress, Field, FieldError, PhoneNumber};
use crate::error::StoreResult;
use crate::models::ContactInput;
use crate::repositories::ContactRepository;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PHONE_LEN: usize = 11;

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const NAME_TOO_SHORT: &str = "Invalid name, min 3 characters";
pub const PHONE_TOO_SHORT: &str = "Invalid phone number, min 11 characters";
pub const INVALID_PHONE: &str = "Invalid phone number";
pub const EMAIL_TAKEN: &str = "Email already registered";

/// Check the rules that need nothing but the input itself.
pub fn check_fields(input: &ContactInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if EmailAddress::new(input.email.as_str()).is_err() {
        errors.push(FieldError::new(Field::Email, INVALID_EMAIL));
    }

    if input.name.chars().count() < MIN_NAME_LEN {
        errors.push(FieldError::new(Field::Name, NAME_TOO_SHORT));
    }

    if input.phone.chars().count() < MIN_PHONE_LEN {
        errors.push(FieldError::new(Field::Phone, PHONE_TOO_SHORT));
    }

    if PhoneNumber::new(input.phone.as_str()).is_err() {
        errors.push(FieldError::new(Field::Phone, INVALID_PHONE));
    }

    errors
}

/// Whether a contact already holding `email` blocks this write.
///
/// On update, `existing_email` is the address the record was loaded with;
/// keeping that address is never a collision.
pub fn is_duplicate_email(
    found_existing: bool,
    email: &str,
    existing_email: Option<&str>,
) -> bool {
    found_existing && existing_email.map_or(true, |current| current != email)
}

/// Run every rule, including the uniqueness lookup against the store.
///
/// An empty result means the input is accepted.
pub async fn validate_contact(
    repo: &dyn ContactRepository,
    input: &ContactInput,
    existing_email: Option<&str>,
) -> StoreResult<Vec<FieldError>> {
    let mut errors = check_fields(input);

    let found = repo.find_by_email(&input.email).await?.is_some();
    if is_duplicate_email(found, &input.email, existing_email) {
        errors.push(FieldError::new(Field::Email, EMAIL_TAKEN));
    }

    Ok(errors)
}
