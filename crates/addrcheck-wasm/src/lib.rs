//! WebAssembly bindings for Bitcoin address classification.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Classifying an address into its format family
//! - Optionally verifying its Base58Check or Bech32 checksum
//! - Listing the supported formats

use wasm_bindgen::prelude::*;

pub mod state;
pub mod validator;

pub use state::{FormatInfo, ValidationResultInfo, VerificationInfo};
pub use validator::{supported_formats, validate_bitcoin_address, verify_bitcoin_address};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
