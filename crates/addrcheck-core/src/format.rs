//! Bitcoin address format families and the rule table that recognizes them.
//!
//! Recognized families, in priority order:
//! - Legacy P2PKH - `1` followed by 25 to 34 Base58 characters
//! - Legacy P2SH - `3` followed by 25 to 34 Base58 characters
//! - Bech32 SegWit - `bc1` followed by 39 to 59 lowercase alphanumerics
//! - Taproot - `bc1p` followed by exactly 58 lowercase alphanumerics
//!
//! Every Taproot-shaped string also satisfies the Bech32 SegWit rule, and
//! since the first matching rule wins, it is reported as Bech32 SegWit.

use core::ops::RangeInclusive;

/// Bitcoin address format family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFormat {
    /// Legacy Pay-to-Public-Key-Hash, prefix `1`.
    LegacyP2pkh,
    /// Legacy Pay-to-Script-Hash, prefix `3`.
    LegacyP2sh,
    /// Native SegWit, prefix `bc1`.
    Bech32Segwit,
    /// Pay-to-Taproot, prefix `bc1p`.
    Taproot,
}

impl AddressFormat {
    /// Get the human-readable label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            AddressFormat::LegacyP2pkh => "Legacy P2PKH (Pay-to-Public-Key-Hash)",
            AddressFormat::LegacyP2sh => "Legacy P2SH (Pay-to-Script-Hash)",
            AddressFormat::Bech32Segwit => "Bech32 SegWit (Native SegWit)",
            AddressFormat::Taproot => "Taproot (Pay-to-Taproot)",
        }
    }

    /// Whether this format is Base58Check encoded.
    pub fn is_legacy(&self) -> bool {
        matches!(self, AddressFormat::LegacyP2pkh | AddressFormat::LegacyP2sh)
    }
}

impl core::fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Character set allowed after a rule's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Alphanumerics except `0`, `O`, `I` and `l`.
    Base58,
    /// `a-z` and `0-9`.
    LowerAlphanumeric,
}

impl Alphabet {
    /// Check whether a byte belongs to this alphabet.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Alphabet::Base58 => {
                byte.is_ascii_alphanumeric() && !matches!(byte, b'0' | b'O' | b'I' | b'l')
            }
            Alphabet::LowerAlphanumeric => byte.is_ascii_lowercase() || byte.is_ascii_digit(),
        }
    }
}

/// A single entry of the rule table: a literal prefix followed by a body of
/// bounded length drawn from one alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRule {
    /// Format reported when this rule matches.
    pub format: AddressFormat,
    /// Literal prefix the address must start with.
    pub prefix: &'static str,
    /// Alphabet of every character after the prefix.
    pub alphabet: Alphabet,
    /// Allowed number of characters after the prefix.
    pub body_len: RangeInclusive<usize>,
}

impl FormatRule {
    /// Check whether the whole of `address` satisfies this rule.
    ///
    /// Matching is anchored at both ends. Non-ASCII input never matches,
    /// so the byte length of the body equals its character count.
    pub fn matches(&self, address: &str) -> bool {
        match address.strip_prefix(self.prefix) {
            Some(body) => {
                self.body_len.contains(&body.len())
                    && body.bytes().all(|b| self.alphabet.contains(b))
            }
            None => false,
        }
    }
}

/// The rule table, in evaluation order. The first matching rule wins.
pub static FORMAT_RULES: [FormatRule; 4] = [
    FormatRule {
        format: AddressFormat::LegacyP2pkh,
        prefix: "1",
        alphabet: Alphabet::Base58,
        body_len: 25..=34,
    },
    FormatRule {
        format: AddressFormat::LegacyP2sh,
        prefix: "3",
        alphabet: Alphabet::Base58,
        body_len: 25..=34,
    },
    FormatRule {
        format: AddressFormat::Bech32Segwit,
        prefix: "bc1",
        alphabet: Alphabet::LowerAlphanumeric,
        body_len: 39..=59,
    },
    FormatRule {
        format: AddressFormat::Taproot,
        prefix: "bc1p",
        alphabet: Alphabet::LowerAlphanumeric,
        body_len: 58..=58,
    },
];

/// Find the first rule in [`FORMAT_RULES`] matching `address`.
pub fn first_match(address: &str) -> Option<&'static FormatRule> {
    FORMAT_RULES.iter().find(|rule| rule.matches(address))
}
