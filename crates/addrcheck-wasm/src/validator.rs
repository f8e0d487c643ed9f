//! JavaScript entry points for address classification.

use addrcheck_core::classify_input;
use wasm_bindgen::prelude::*;

use crate::state::{format_infos, ValidationResultInfo, VerificationInfo};

/// Classify a Bitcoin address.
///
/// Anything that is not a JS string (including `undefined` and `null`) is
/// treated as a missing address. Returns `{ isValid, type?, error? }`.
#[wasm_bindgen]
pub fn validate_bitcoin_address(address: JsValue) -> Result<JsValue, JsValue> {
    let address = address.as_string();
    ValidationResultInfo::from(classify_input(address.as_deref())).to_js()
}

/// Classify a Bitcoin address, then decode it and verify its checksum.
#[wasm_bindgen]
pub fn verify_bitcoin_address(address: JsValue) -> Result<JsValue, JsValue> {
    let address = address.as_string();
    let info = VerificationInfo::check(address.as_deref());

    if let Some(reason) = &info.checksum_error {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "checksum verification failed: {}",
            reason
        )));
    }

    info.to_js()
}

/// List the supported formats in rule priority order as `[{ label, prefix }]`.
#[wasm_bindgen]
pub fn supported_formats() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&format_infos())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
