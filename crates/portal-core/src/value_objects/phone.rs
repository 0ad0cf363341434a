//! Phone number value object
//!
//! All portal identities are keyed by a Ghanaian mobile number in canonical
//! form: the digits `233` followed by the nine-digit subscriber number.
//! Every written variant accepted at the edges (`0244123456`, `244123456`,
//! `+233244123456`, `233244123456`) normalizes to the same canonical string
//! before any comparison or storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Country calling code prefix of a canonical number
pub const COUNTRY_PREFIX: &str = "233";

/// Total digits in a canonical number (prefix + 9-digit subscriber number)
pub const CANONICAL_LEN: usize = 12;

/// Normalize a raw phone string to canonical form.
///
/// Pure and idempotent: `normalize_phone(normalize_phone(x)) == normalize_phone(x)`.
/// Separators (spaces, dashes, parentheses) and a leading `+` are stripped;
/// local forms are rewritten with the country prefix. Strings that match no
/// known written form are returned stripped but otherwise untouched, so
/// validation can reject them with the original digits intact.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '+' | '-' | '(' | ')'))
        .collect();

    if digits.len() == CANONICAL_LEN && digits.starts_with(COUNTRY_PREFIX) {
        return digits;
    }

    // Local form with leading trunk zero: 0XXXXXXXXX
    if digits.len() == 10 && digits.starts_with('0') {
        return format!("{COUNTRY_PREFIX}{}", &digits[1..]);
    }

    // Bare subscriber number: XXXXXXXXX
    if digits.len() == 9 {
        return format!("{COUNTRY_PREFIX}{digits}");
    }

    digits
}

/// A validated, canonical phone number.
///
/// Construction goes through [`PhoneNumber::parse`], so a value of this type
/// is always exactly [`CANONICAL_LEN`] ASCII digits starting with
/// [`COUNTRY_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize and validate a raw phone string.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPhoneNumber`] if the normalized string
    /// is not a canonical country-coded number.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_phone(raw);

        if normalized.len() != CANONICAL_LEN
            || !normalized.starts_with(COUNTRY_PREFIX)
            || !normalized.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(DomainError::InvalidPhoneNumber(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    /// Canonical digits as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the canonical digits
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Local display form with the trunk zero (`0XXXXXXXXX`)
    #[must_use]
    pub fn local_format(&self) -> String {
        format!("0{}", &self.0[COUNTRY_PREFIX.len()..])
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_written_forms_normalize_to_same_canonical() {
        let expected = "233244123456";
        for raw in ["0244123456", "244123456", "+233244123456", "233244123456"] {
            assert_eq!(normalize_phone(raw), expected, "input: {raw}");
        }
    }

    #[test]
    fn test_normalization_strips_separators() {
        assert_eq!(normalize_phone("024 412-3456"), "233244123456");
        assert_eq!(normalize_phone("+233 (24) 412 3456"), "233244123456");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in ["0244123456", "244123456", "+233244123456", "junk", "12345"] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once, "input: {raw}");
        }
    }

    #[test]
    fn test_parse_accepts_every_valid_form() {
        for raw in ["0244123456", "244123456", "+233244123456", "233244123456"] {
            let phone = PhoneNumber::parse(raw).unwrap();
            assert_eq!(phone.as_str(), "233244123456");
        }
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(PhoneNumber::parse("02441234").is_err());
        assert!(PhoneNumber::parse("02441234567").is_err());
        assert!(PhoneNumber::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(PhoneNumber::parse("02441x3456").is_err());
        assert!(PhoneNumber::parse("not a phone").is_err());
    }

    #[test]
    fn test_parse_rejects_foreign_prefix() {
        assert!(PhoneNumber::parse("442071234567").is_err());
    }

    #[test]
    fn test_local_format() {
        let phone = PhoneNumber::parse("+233244123456").unwrap();
        assert_eq!(phone.local_format(), "0244123456");
    }

    #[test]
    fn test_serde_transparent() {
        let phone = PhoneNumber::parse("0244123456").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"233244123456\"");
    }
}
