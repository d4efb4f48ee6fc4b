//! Field validation for venue and artist listings.
//!
//! Column limits mirror the schema in `db/migrations`. Optional text fields
//! treat an empty string as "absent"; the repositories store it as NULL.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of most short text columns (city, state, address, links).
pub const MAX_TEXT_LENGTH: usize = 120;

/// Maximum length of an image link.
pub const MAX_IMAGE_LINK_LENGTH: usize = 500;

/// Phone numbers are ten ASCII digits grouped `333-222-1111`.
pub const PHONE_PATTERN: &str = r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

/// Message shown when a phone number does not match [`PHONE_PATTERN`].
pub const PHONE_FORMAT_MESSAGE: &str =
    "Not a valid phone number. Phone numbers must be 333-222-1111.";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an optional phone number.
///
/// `None` and the empty string are accepted (no phone on file). Anything
/// else must match [`PHONE_PATTERN`] exactly.
pub fn validate_phone(phone: Option<&str>) -> Result<(), CoreError> {
    match phone {
        None | Some("") => Ok(()),
        Some(number) if PHONE_RE.is_match(number) => Ok(()),
        Some(_) => Err(CoreError::Validation(PHONE_FORMAT_MESSAGE.to_string())),
    }
}

/// Validate a required text field: must contain a non-whitespace character
/// and, when `max_len` is given, fit within it.
pub fn validate_required(field: &str, value: &str, max_len: Option<usize>) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if let Some(max) = max_len {
        check_length(field, value, max)?;
    }
    Ok(())
}

/// Validate an optional text field against a maximum length.
pub fn validate_optional(field: &str, value: Option<&str>, max_len: usize) -> Result<(), CoreError> {
    match value {
        Some(v) => check_length(field, v, max_len),
        None => Ok(()),
    }
}

/// The optional contact and profile fields shared by venues and artists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFields<'a> {
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
    pub image_link: Option<&'a str>,
    pub facebook_link: Option<&'a str>,
    pub seeking_description: Option<&'a str>,
}

impl ContactFields<'_> {
    /// Validate the phone format and every field's length limit.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_phone(self.phone)?;
        validate_optional("website", self.website, MAX_TEXT_LENGTH)?;
        validate_optional("image_link", self.image_link, MAX_IMAGE_LINK_LENGTH)?;
        validate_optional("facebook_link", self.facebook_link, MAX_TEXT_LENGTH)?;
        validate_optional("seeking_description", self.seeking_description, MAX_TEXT_LENGTH)
    }
}

fn check_length(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters (got {len})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- validate_phone --

    #[test]
    fn well_formed_phone_passes() {
        assert!(validate_phone(Some("333-222-1111")).is_ok());
    }

    #[test]
    fn absent_or_empty_phone_passes() {
        assert!(validate_phone(None).is_ok());
        assert!(validate_phone(Some("")).is_ok());
    }

    #[test]
    fn word_characters_rejected() {
        let err = validate_phone(Some("abc-def-ghij")).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == PHONE_FORMAT_MESSAGE);
    }

    #[test]
    fn missing_dashes_rejected() {
        assert!(validate_phone(Some("3332221111")).is_err());
    }

    #[test]
    fn trailing_digits_rejected() {
        assert!(validate_phone(Some("333-222-11111")).is_err());
        assert!(validate_phone(Some("333-222-1111 ext")).is_err());
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Arabic-Indic digits are `\d` in Unicode regex but not phone digits.
        assert!(validate_phone(Some("٣٣٣-٢٢٢-١١١١")).is_err());
    }

    // -- validate_required --

    #[test]
    fn blank_required_field_rejected() {
        let err = validate_required("name", "   ", None).unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn required_field_length_boundary() {
        let exact = "x".repeat(MAX_TEXT_LENGTH);
        assert!(validate_required("city", &exact, Some(MAX_TEXT_LENGTH)).is_ok());

        let long = "x".repeat(MAX_TEXT_LENGTH + 1);
        let err = validate_required("city", &long, Some(MAX_TEXT_LENGTH)).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum length"));
    }

    #[test]
    fn unbounded_required_field_accepts_long_values() {
        let long = "x".repeat(1_000);
        assert!(validate_required("name", &long, None).is_ok());
    }

    // -- validate_optional --

    #[test]
    fn optional_field_checks_length_only_when_present() {
        assert!(validate_optional("website", None, MAX_TEXT_LENGTH).is_ok());
        assert!(validate_optional("website", Some(""), MAX_TEXT_LENGTH).is_ok());

        let long = "x".repeat(MAX_IMAGE_LINK_LENGTH + 1);
        assert!(validate_optional("image_link", Some(&long), MAX_IMAGE_LINK_LENGTH).is_err());
    }

    // -- ContactFields --

    #[test]
    fn empty_contact_fields_pass() {
        assert!(ContactFields::default().validate().is_ok());
    }

    #[test]
    fn contact_fields_report_bad_phone() {
        let fields = ContactFields {
            phone: Some("555-CALL-NOW"),
            website: Some("https://themusicalhop.com"),
            ..Default::default()
        };
        let err = fields.validate().unwrap_err();
        assert!(err.to_string().contains("Not a valid phone number"));
    }

    #[test]
    fn contact_fields_report_overlong_link() {
        let long = format!("https://{}", "x".repeat(MAX_TEXT_LENGTH));
        let fields = ContactFields {
            facebook_link: Some(&long),
            ..Default::default()
        };
        let err = fields.validate().unwrap_err();
        assert!(err.to_string().contains("facebook_link exceeds maximum length"));
    }
}
