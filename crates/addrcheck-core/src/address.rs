//! Bitcoin address classification.
//!
//! Classification is structural only: a positive result means the string
//! has the shape of an address family, not that its checksum is valid. See
//! [`crate::checksum`] for the optional decoding stage.

use crate::format::{first_match, AddressFormat};

/// Reasons an address fails classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input missing or blank after trimming.
    EmptyInput,
    /// Input matched no rule in the format table.
    FormatMismatch,
}

impl ValidationError {
    /// Get the stable, user-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "Address is required",
            ValidationError::FormatMismatch => "Invalid Bitcoin address format",
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// Outcome of classifying an address: its format, or why it was rejected.
pub type ValidationResult = Result<AddressFormat, ValidationError>;

/// Strip leading and trailing whitespace.
///
/// Follows the browser `String.prototype.trim` set: Unicode whitespace
/// except U+0085, plus the byte-order mark U+FEFF.
pub fn normalize(raw: &str) -> &str {
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Classify a candidate Bitcoin address.
pub fn classify(raw: &str) -> ValidationResult {
    let address = normalize(raw);
    if address.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    first_match(address)
        .map(|rule| rule.format)
        .ok_or(ValidationError::FormatMismatch)
}

/// Classify an address that may be absent.
pub fn classify_input(raw: Option<&str>) -> ValidationResult {
    match raw {
        Some(raw) => classify(raw),
        None => Err(ValidationError::EmptyInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn lower(n: usize) -> String {
        "qpzry9x8gf2tvdw0s3jn54khce6mua7l".chars().cycle().take(n).collect()
    }

    #[test]
    fn test_p2pkh() {
        assert_eq!(
            classify("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            Ok(AddressFormat::LegacyP2pkh)
        );
    }

    #[test]
    fn test_p2sh() {
        assert_eq!(
            classify("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"),
            Ok(AddressFormat::LegacyP2sh)
        );
    }

    #[test]
    fn test_bech32() {
        let addr = String::from("bc1") + &lower(42);
        assert_eq!(addr.len(), 45);
        assert_eq!(classify(&addr), Ok(AddressFormat::Bech32Segwit));
    }

    #[test]
    fn test_taproot_shape_reports_segwit() {
        let addr = String::from("bc1p") + &lower(58);
        assert_eq!(addr.len(), 62);
        assert_eq!(classify(&addr), Ok(AddressFormat::Bech32Segwit));
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(classify("   "), Err(ValidationError::EmptyInput));
        assert_eq!(classify(""), Err(ValidationError::EmptyInput));
        assert_eq!(classify("\t\n\u{feff}\u{3000}"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_absent() {
        assert_eq!(classify_input(None), Err(ValidationError::EmptyInput));
        assert_eq!(
            classify_input(Some(" 1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa ")),
            Ok(AddressFormat::LegacyP2pkh)
        );
    }

    #[test]
    fn test_ethereum_address() {
        assert_eq!(classify("0xAbC123"), Err(ValidationError::FormatMismatch));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            classify("\n  3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy\t"),
            Ok(AddressFormat::LegacyP2sh)
        );
    }

    #[test]
    fn test_no_case_folding() {
        let addr = String::from("BC1") + &lower(42);
        assert_eq!(classify(&addr), Err(ValidationError::FormatMismatch));
    }

    #[test]
    fn test_internal_whitespace_rejected() {
        assert_eq!(
            classify("1A1zP1eP5QGefi2DM PTfTL5SLmv7DivfNa"),
            Err(ValidationError::FormatMismatch)
        );
    }

    #[test]
    fn test_nel_is_not_trimmed() {
        assert_eq!(
            classify("\u{85}1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            Err(ValidationError::FormatMismatch)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::EmptyInput.message(), "Address is required");
        assert_eq!(
            alloc::format!("{}", ValidationError::FormatMismatch),
            "Invalid Bitcoin address format"
        );
    }
}
