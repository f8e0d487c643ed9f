//! Bitcoin address format classification.
//!
//! This crate provides:
//! - Structural classification of Legacy P2PKH, Legacy P2SH, Bech32 SegWit
//!   and Taproot addresses against an ordered rule table
//! - An optional Base58Check / Bech32 decode and checksum stage

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod checksum;
pub mod format;
pub mod hash;

pub use address::{classify, classify_input, normalize, ValidationError, ValidationResult};
pub use checksum::{verify, VerifiedAddress, VerifyError};
pub use format::{AddressFormat, Alphabet, FormatRule, FORMAT_RULES};
pub use hash::double_sha256;
