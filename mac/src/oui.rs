// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Vendor / organization prefix type.

use std::fmt::{Display, Formatter};

/// An [organizationally unique identifier]: the three leading octets of a
/// [`Mac`], conventionally identifying the organization that assigned the
/// address.
///
/// An `Oui` is the prefix input to [`Mac::from_prefix`] and the output of
/// [`Mac::oui`].  Like [`Mac`] it is a plain copyable value with no partial
/// construction and no in-place mutation.
///
/// [organizationally unique identifier]: https://en.wikipedia.org/wiki/Organizationally_unique_identifier
/// [`Mac`]: crate::Mac
/// [`Mac::from_prefix`]: crate::Mac::from_prefix
/// [`Mac::oui`]: crate::Mac::oui
#[must_use]
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oui([u8; 3]);

impl Oui {
    /// The conventional QEMU/KVM vendor prefix (`52:54:00`).
    pub const QEMU: Oui = Oui([0x52, 0x54, 0x00]);

    /// Create an `Oui` from its three octets.
    pub const fn new(octets: [u8; 3]) -> Oui {
        Oui(octets)
    }

    /// The three octets of the `Oui`, most significant first.
    #[must_use]
    pub const fn octets(self) -> [u8; 3] {
        self.0
    }
}

impl From<[u8; 3]> for Oui {
    fn from(octets: [u8; 3]) -> Oui {
        Oui(octets)
    }
}

impl From<Oui> for [u8; 3] {
    fn from(oui: Oui) -> [u8; 3] {
        oui.0
    }
}

impl AsRef<[u8; 3]> for Oui {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl Display for Oui {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}:{:02X}:{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod test {
    use super::*;
    use crate::Mac;

    #[test]
    fn displays_canonically() {
        assert_eq!(Oui::QEMU.to_string(), "52:54:00");
        assert_eq!(Oui::new([0x00, 0x0E, 0xFF]).to_string(), "00:0E:FF");
    }

    #[test]
    fn prefix_of_a_mac() {
        let mac: Mac = "52:54:00:12:34:56".parse().unwrap();
        assert_eq!(mac.oui(), Oui::QEMU);
        assert_eq!(mac.oui().octets(), [0x52, 0x54, 0x00]);
    }
}
