//! Plain result objects handed back to JavaScript.

use addrcheck_core::{
    classify_input, verify, ValidationResult, VerifiedAddress, VerifyError, FORMAT_RULES,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Classification outcome, shaped `{ isValid, type?, error? }`.
///
/// Exactly one of `address_type` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResultInfo {
    /// Whether the address matched a format rule.
    pub is_valid: bool,
    /// Format label, when valid.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    /// Error message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ValidationResult> for ValidationResultInfo {
    fn from(result: ValidationResult) -> Self {
        match result {
            Ok(format) => ValidationResultInfo {
                is_valid: true,
                address_type: Some(format.label().to_string()),
                error: None,
            },
            Err(e) => ValidationResultInfo {
                is_valid: false,
                address_type: None,
                error: Some(e.message().to_string()),
            },
        }
    }
}

impl ValidationResultInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Classification plus the outcome of the decode and checksum stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationInfo {
    /// Whether the address matched a format rule.
    pub is_valid: bool,
    /// Format label, when valid.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    /// Classification error message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether decoding and checksum verification succeeded.
    pub checksum_valid: bool,
    /// Witness version for `bc1` addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness_version: Option<u8>,
    /// Decoded hash or witness program as hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_hex: Option<String>,
    /// Why verification failed after a successful classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_error: Option<String>,
}

impl VerificationInfo {
    /// Classify `raw`, then run the checksum stage if classification passed.
    pub fn check(raw: Option<&str>) -> Self {
        let classified = ValidationResultInfo::from(classify_input(raw));
        let mut info = VerificationInfo {
            is_valid: classified.is_valid,
            address_type: classified.address_type,
            error: classified.error,
            checksum_valid: false,
            witness_version: None,
            payload_hex: None,
            checksum_error: None,
        };

        if let (true, Some(raw)) = (info.is_valid, raw) {
            info.apply(verify(raw));
        }
        info
    }

    fn apply(&mut self, verified: Result<VerifiedAddress, VerifyError>) {
        match verified {
            Ok(verified) => {
                self.checksum_valid = true;
                self.witness_version = verified.witness_version;
                self.payload_hex = Some(verified.payload_hex());
            }
            Err(e) => self.checksum_error = Some(e.to_string()),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// One row of the supported-formats table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format label.
    pub label: String,
    /// Literal address prefix.
    pub prefix: String,
}

/// The rule table in priority order.
pub fn format_infos() -> Vec<FormatInfo> {
    FORMAT_RULES
        .iter()
        .map(|rule| FormatInfo {
            label: rule.format.label().to_string(),
            prefix: rule.prefix.to_string(),
        })
        .collect()
}
