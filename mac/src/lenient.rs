// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Lenient ordering of textual MAC addresses.
//!
//! Configuration frequently carries addresses in loose notation: lowercase
//! hex, or single-digit groups where the canonical form has a padding zero
//! (`"e"` for `"0E"`).  [`cmp`] orders such strings directly, so callers can
//! match configuration text without normalizing through the parser first.

use std::cmp::Ordering;

/// Advance past redundant leading zeros.  A `'0'` counts as redundant only
/// while another hex digit follows it, so the sole digit of a one-digit
/// group survives and the scan never leaves the group's final digit.
fn skip_redundant_zeros(s: &[u8], mut at: usize) -> usize {
    while s.get(at) == Some(&b'0') && s.get(at + 1).is_some_and(u8::is_ascii_hexdigit) {
        at += 1;
    }
    at
}

/// Compare two textual MAC addresses, ignoring differences in case as well
/// as redundant leading zeros within a group.
///
/// Both inputs are expected in the loose `:`-separated notation the [`Mac`]
/// parser accepts, but well-formedness is neither required nor checked;
/// arbitrary strings are simply ordered by the folded character sequence,
/// with end-of-input sorting below every character.  This is a text-level
/// check only.  It never decodes octets, and it is no substitute for
/// parsing when an actual [`Mac`] value is needed downstream.
///
/// The result is a bare [`Ordering`]; the character-code distance between
/// mismatched inputs is deliberately not exposed.
///
/// [`Mac`]: crate::Mac
#[must_use]
pub fn cmp(left: &str, right: &str) -> Ordering {
    let (a, b) = (left.as_bytes(), right.as_bytes());
    let mut i = 0usize;
    let mut j = 0usize;
    loop {
        i = skip_redundant_zeros(a, i);
        j = skip_redundant_zeros(b, j);
        match (a.get(i), b.get(j)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&x), Some(&y)) => {
                let (x, y) = (x.to_ascii_lowercase(), y.to_ascii_lowercase());
                if x != y {
                    return x.cmp(&y);
                }
            }
        }
        i += 1;
        j += 1;
    }
}
