// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! MAC address type and logic.

use crate::oui::Oui;
use rand::Rng;
use rand::RngExt;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A [MAC Address] type.
///
/// `Mac` is a transparent wrapper around `[u8; 6]`, with the octets stored
/// in network transmission order: the most significant octet first, as
/// written left-to-right in the textual form.
///
/// A `Mac` is a plain value.  It is never partially constructed (parsing
/// either yields a complete address or an error and no address), never
/// mutated in place, and freely copied.  "Setting" an address means
/// replacing the whole value via [`Mac::new`] or the [`From`] conversions.
///
/// [MAC Address]: https://en.wikipedia.org/wiki/MAC_address
#[must_use]
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mac([u8; 6]);

impl Mac {
    /// The broadcast `Mac` (all octets `0xFF`).
    pub const BROADCAST: Mac = Mac([u8::MAX; 6]);
    /// The zero `Mac`.
    ///
    /// `ZERO` is illegal as a source or destination `Mac` in most contexts.
    pub const ZERO: Mac = Mac([0; 6]);
    /// Length of the canonical textual form (`XX:XX:XX:XX:XX:XX`).
    pub const STRING_LEN: usize = 17;

    /// Create a `Mac` from its six octets.
    pub const fn new(octets: [u8; 6]) -> Mac {
        Mac(octets)
    }

    /// The six octets of the `Mac`, most significant first.
    #[must_use]
    pub const fn octets(self) -> [u8; 6] {
        self.0
    }

    /// The vendor / organization prefix: the first three octets.
    pub const fn oui(self) -> Oui {
        let [a, b, c, _, _, _] = self.0;
        Oui::new([a, b, c])
    }

    /// Generate a `Mac` from a vendor prefix and a randomness source.
    ///
    /// The first three octets are the prefix, copied verbatim: the prefix is
    /// not validated and neither the multicast nor the locally-administered
    /// bit is forced, so whatever the caller supplies propagates unchanged.
    /// The last three octets are drawn independently from `rng`.
    ///
    /// No uniqueness or collision-avoidance guarantee is made; callers which
    /// need unique addresses must layer their own allocation scheme on top.
    pub fn from_prefix<R: Rng + ?Sized>(prefix: Oui, rng: &mut R) -> Mac {
        let [a, b, c] = prefix.octets();
        Mac([a, b, c, rng.random(), rng.random(), rng.random()])
    }

    /// Returns true iff the least significant bit of the first octet is one.
    ///
    /// That bit is the IEEE-802 multicast bit; broadcast counts as
    /// multicast.
    #[must_use]
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }

    /// Returns true iff the least significant bit of the first octet is zero.
    ///
    /// Always the complement of [`Mac::is_multicast`].
    #[must_use]
    pub const fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Returns true iff the binary representation is exclusively ones.
    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        self == &Mac::BROADCAST
    }

    /// Returns true iff the binary representation is exclusively zeros.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &Mac::ZERO
    }

    /// Returns true iff the second least significant bit of the first octet
    /// is one (a locally administered address).
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Returns true iff the second least significant bit of the first octet
    /// is zero (a universally administered address).
    #[must_use]
    pub const fn is_universal(&self) -> bool {
        !self.is_local()
    }

    /// Compare against a raw 6-byte sequence without building a second
    /// `Mac`: lexicographic unsigned comparison from octet 0, exactly as
    /// [`Ord`] orders two `Mac` values.
    #[must_use]
    pub fn cmp_raw(&self, raw: &[u8; 6]) -> Ordering {
        self.0.cmp(raw)
    }
}

impl From<[u8; 6]> for Mac {
    fn from(octets: [u8; 6]) -> Mac {
        Mac(octets)
    }
}

impl From<Mac> for [u8; 6] {
    fn from(mac: Mac) -> [u8; 6] {
        mac.0
    }
}

impl AsRef<[u8; 6]> for Mac {
    fn as_ref(&self) -> &[u8; 6] {
        &self.0
    }
}

impl Display for Mac {
    /// The canonical textual form: uppercase, zero-padded, colon-separated,
    /// exactly [`Mac::STRING_LEN`] characters.  Every `Mac` has exactly one
    /// canonical rendering.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// Errors which can occur when parsing a [`Mac`] from text.
///
/// Groups are numbered 1 through 6, left to right.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MacParseError {
    /// A group did not begin with a hex digit.  Also the error for empty
    /// input and for input which ends before six groups were found.
    #[error("expected a hex digit at the start of group {0}")]
    ExpectedHexDigit(usize),
    /// A group carried more than two hex digits (and would decode to a
    /// value over 255).
    #[error("group {0} is longer than two hex digits")]
    GroupTooLong(usize),
    /// The character after a group was not the `:` separator.
    #[error("expected ':' after group {0}")]
    ExpectedSeparator(usize),
    /// Input continued past the sixth group.
    #[error("trailing characters after the sixth group")]
    TrailingInput,
}

fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl FromStr for Mac {
    type Err = MacParseError;

    /// Parse a `Mac` from text: exactly six groups of one or two hex
    /// digits, separated by `:`, e.g. `"0:1E:FC:E:3a:CB"`.
    ///
    /// The scan is strict.  Each group must begin with a hex digit, so the
    /// leading whitespace and explicit `+` sign accepted by general-purpose
    /// integer parsing are rejected here, and the input must be exhausted
    /// by the sixth group.
    #[tracing::instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Mac, MacParseError> {
        let bytes = s.as_bytes();
        let mut octets = [0u8; 6];
        let mut at = 0usize;
        for (index, octet) in octets.iter_mut().enumerate() {
            let group = index + 1;
            let start = at;
            let mut value = 0u8;
            while at - start < 2 {
                let Some(digit) = bytes.get(at).copied().and_then(hex_val) else {
                    break;
                };
                // two hex digits cap the group at 0xFF, so this cannot wrap
                value = value * 16 + digit;
                at += 1;
            }
            if at == start {
                return Err(MacParseError::ExpectedHexDigit(group));
            }
            if bytes.get(at).copied().and_then(hex_val).is_some() {
                return Err(MacParseError::GroupTooLong(group));
            }
            *octet = value;
            if group < 6 {
                match bytes.get(at) {
                    Some(b':') => at += 1,
                    _ => return Err(MacParseError::ExpectedSeparator(group)),
                }
            } else if at != bytes.len() {
                return Err(MacParseError::TrailingInput);
            }
        }
        Ok(Mac(octets))
    }
}
