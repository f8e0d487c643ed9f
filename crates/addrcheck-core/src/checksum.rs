//! Optional decode and checksum stage, chained after classification.
//!
//! [`verify`] first classifies the address, then decodes it according to
//! the matched family:
//! - Legacy formats - Base58Check, version byte `0x00` (P2PKH) or `0x05` (P2SH)
//! - `bc1` formats - Bech32 (witness v0) or Bech32m (witness v1..=16)
//!
//! The reported [`AddressFormat`] is the classification result as-is. A
//! Taproot address therefore verifies as `Bech32Segwit` with witness
//! version 1.

use alloc::vec::Vec;

use crate::address::{classify, ValidationError};
use crate::format::AddressFormat;
use crate::hash::checksum4;

/// Decoding and checksum errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The address did not pass classification.
    Classification(ValidationError),
    /// Invalid Base58 character
    InvalidBase58Char(char),
    /// Decoded Base58 payload has the wrong length
    InvalidLength(usize),
    /// Embedded checksum does not match
    InvalidChecksum,
    /// Base58 version byte inconsistent with the classified format
    UnexpectedVersion(u8),
    /// Malformed Bech32 data
    InvalidBech32(&'static str),
    /// Invalid witness version
    InvalidWitnessVersion(u8),
    /// Invalid witness program length
    InvalidWitnessProgramLength(usize),
}

impl core::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            VerifyError::Classification(e) => write!(f, "{}", e),
            VerifyError::InvalidBase58Char(c) => write!(f, "Invalid Base58 character: {}", c),
            VerifyError::InvalidLength(l) => write!(f, "Invalid decoded length: {}", l),
            VerifyError::InvalidChecksum => write!(f, "Invalid checksum"),
            VerifyError::UnexpectedVersion(v) => write!(f, "Unexpected version byte: {:#04x}", v),
            VerifyError::InvalidBech32(s) => write!(f, "Invalid Bech32 encoding: {}", s),
            VerifyError::InvalidWitnessVersion(v) => write!(f, "Invalid witness version: {}", v),
            VerifyError::InvalidWitnessProgramLength(l) => {
                write!(f, "Invalid witness program length: {}", l)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VerifyError {}

impl From<ValidationError> for VerifyError {
    fn from(e: ValidationError) -> Self {
        VerifyError::Classification(e)
    }
}

/// An address whose encoding and checksum have been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAddress {
    /// Format from classification.
    pub format: AddressFormat,
    /// Witness version, for `bc1` addresses.
    pub witness_version: Option<u8>,
    /// The 20-byte hash (legacy) or the witness program.
    pub payload: Vec<u8>,
}

impl VerifiedAddress {
    /// Payload as lowercase hex.
    pub fn payload_hex(&self) -> alloc::string::String {
        hex::encode(&self.payload)
    }
}

/// Classify an address, then decode it and verify its checksum.
pub fn verify(raw: &str) -> Result<VerifiedAddress, VerifyError> {
    let format = classify(raw)?;
    let address = crate::address::normalize(raw);

    if format.is_legacy() {
        verify_base58check(address, format)
    } else {
        verify_segwit(address, format)
    }
}

fn verify_base58check(address: &str, format: AddressFormat) -> Result<VerifiedAddress, VerifyError> {
    let decoded = base58_decode(address)?;
    if decoded.len() != 25 {
        return Err(VerifyError::InvalidLength(decoded.len()));
    }

    let (payload, checksum) = decoded.split_at(21);
    if checksum4(payload) != checksum {
        return Err(VerifyError::InvalidChecksum);
    }

    let expected = match format {
        AddressFormat::LegacyP2pkh => 0x00,
        _ => 0x05,
    };
    if payload[0] != expected {
        return Err(VerifyError::UnexpectedVersion(payload[0]));
    }

    Ok(VerifiedAddress {
        format,
        witness_version: None,
        payload: payload[1..].to_vec(),
    })
}

fn verify_segwit(address: &str, format: AddressFormat) -> Result<VerifiedAddress, VerifyError> {
    let (data, variant) = bech32_decode(address)?;
    let (&version, words) = data
        .split_first()
        .ok_or(VerifyError::InvalidBech32("missing witness version"))?;

    match (version, variant) {
        (0, Variant::Bech32) | (1..=16, Variant::Bech32m) => {}
        (0, Variant::Bech32m) => return Err(VerifyError::InvalidBech32("witness v0 requires Bech32")),
        (1..=16, Variant::Bech32) => return Err(VerifyError::InvalidBech32("witness v1+ requires Bech32m")),
        (v, _) => return Err(VerifyError::InvalidWitnessVersion(v)),
    }

    let program = regroup_5_to_8(words)?;
    let valid_len = match version {
        0 => program.len() == 20 || program.len() == 32,
        1 => program.len() == 32,
        _ => (2..=40).contains(&program.len()),
    };
    if !valid_len {
        return Err(VerifyError::InvalidWitnessProgramLength(program.len()));
    }

    Ok(VerifiedAddress {
        format,
        witness_version: Some(version),
        payload: program,
    })
}

// ============================================================================
// Base58
// ============================================================================

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn base58_digit(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    BASE58_ALPHABET
        .iter()
        .position(|&x| x == c as u8)
        .map(|p| p as u32)
}

/// Decode Base58 into big-endian bytes, one zero byte per leading `1`.
fn base58_decode(input: &str) -> Result<Vec<u8>, VerifyError> {
    // Little-endian accumulator, reversed at the end.
    let mut acc: Vec<u8> = Vec::with_capacity(input.len());

    for c in input.chars() {
        let mut carry = base58_digit(c).ok_or(VerifyError::InvalidBase58Char(c))?;
        for byte in acc.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            acc.push(carry as u8);
            carry >>= 8;
        }
    }

    let zeros = input.bytes().take_while(|&b| b == b'1').count();
    acc.extend(core::iter::repeat(0).take(zeros));
    acc.reverse();
    Ok(acc)
}

// ============================================================================
// Bech32 / Bech32m
// ============================================================================

const BECH32_CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const BECH32M_CONST: u32 = 0x2bc8_30a3;
const MAINNET_HRP: &str = "bc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Bech32,
    Bech32m,
}

/// Decode a lowercase Bech32 string, returning the 5-bit data words with
/// the checksum stripped.
fn bech32_decode(input: &str) -> Result<(Vec<u8>, Variant), VerifyError> {
    let (hrp, data_part) = input
        .rsplit_once('1')
        .ok_or(VerifyError::InvalidBech32("missing separator"))?;
    if hrp != MAINNET_HRP {
        return Err(VerifyError::InvalidBech32("unexpected human-readable part"));
    }
    if data_part.len() < 6 {
        return Err(VerifyError::InvalidBech32("data part too short"));
    }

    let mut words = data_part
        .bytes()
        .map(|b| {
            BECH32_CHARSET
                .iter()
                .position(|&x| x == b)
                .map(|p| p as u8)
                .ok_or(VerifyError::InvalidBech32("invalid character"))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let variant = match polymod(hrp, &words) {
        1 => Variant::Bech32,
        BECH32M_CONST => Variant::Bech32m,
        _ => return Err(VerifyError::InvalidChecksum),
    };

    words.truncate(words.len() - 6);
    Ok((words, variant))
}

fn polymod(hrp: &str, words: &[u8]) -> u32 {
    const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

    let expanded = hrp
        .bytes()
        .map(|b| b >> 5)
        .chain(core::iter::once(0))
        .chain(hrp.bytes().map(|b| b & 31));

    expanded.chain(words.iter().copied()).fold(1u32, |chk, value| {
        let top = chk >> 25;
        let mut chk = ((chk & 0x1ff_ffff) << 5) ^ value as u32;
        for (i, g) in GEN.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
        chk
    })
}

/// Regroup 5-bit words into bytes. Leftover bits must be fewer than five
/// and all zero.
fn regroup_5_to_8(words: &[u8]) -> Result<Vec<u8>, VerifyError> {
    let mut out = Vec::with_capacity(words.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits = 0u32;

    for &w in words {
        acc = (acc << 5) | w as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    if bits >= 5 || acc & ((1 << bits) - 1) != 0 {
        return Err(VerifyError::InvalidBech32("invalid padding"));
    }
    Ok(out)
}
