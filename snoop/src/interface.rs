// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Validated network interface names.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The longest legal interface name, in bytes (the kernel's `IFNAMSIZ`
/// minus the terminator).
pub const MAX_LEN: usize = 15;

/// A validated Linux network interface name, as used for both the guest
/// interface and its underlying link device.
///
/// Valid names are non-empty, at most [`MAX_LEN`] bytes, not `.` or `..`,
/// and contain no `/`, `:`, whitespace, or control characters (the kernel's
/// own rules for device names).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceName(String);

/// The reason a string was refused as an [`InterfaceName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalInterfaceName {
    /// Interface names must not be empty.
    #[error("interface name is empty")]
    Empty,
    /// Interface names are limited to [`MAX_LEN`] bytes.
    #[error("interface name '{0}' is longer than {MAX_LEN} bytes")]
    TooLong(String),
    /// The name was `.`, `..`, or contained a byte the kernel refuses in
    /// device names.
    #[error("interface name '{0}' contains an illegal character")]
    IllegalCharacters(String),
}

impl InterfaceName {
    /// Validate `name` as an interface name.
    ///
    /// # Errors
    ///
    /// Returns an [`IllegalInterfaceName`] describing the first rule the
    /// name broke.
    #[tracing::instrument(level = "trace")]
    pub fn new(name: String) -> Result<InterfaceName, IllegalInterfaceName> {
        if name.is_empty() {
            return Err(IllegalInterfaceName::Empty);
        }
        if name.len() > MAX_LEN {
            return Err(IllegalInterfaceName::TooLong(name));
        }
        if name == "." || name == ".." {
            return Err(IllegalInterfaceName::IllegalCharacters(name));
        }
        if name
            .chars()
            .any(|c| c == '/' || c == ':' || c.is_whitespace() || c.is_control())
        {
            return Err(IllegalInterfaceName::IllegalCharacters(name));
        }
        Ok(InterfaceName(name))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InterfaceName {
    type Error = IllegalInterfaceName;

    fn try_from(name: String) -> Result<InterfaceName, IllegalInterfaceName> {
        InterfaceName::new(name)
    }
}

impl FromStr for InterfaceName {
    type Err = IllegalInterfaceName;

    fn from_str(s: &str) -> Result<InterfaceName, IllegalInterfaceName> {
        InterfaceName::new(s.to_string())
    }
}

impl AsRef<str> for InterfaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for InterfaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod test {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        for name in ["eth0", "vnet12", "br-lan", "tap_guest", "enp0s31f6"] {
            assert_eq!(name.parse::<InterfaceName>().unwrap().as_str(), name);
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            "".parse::<InterfaceName>().unwrap_err(),
            IllegalInterfaceName::Empty
        );
    }

    #[test]
    fn rejects_over_fifteen_bytes() {
        let name = "abcdefghijklmnop"; // 16 bytes
        assert_eq!(
            name.parse::<InterfaceName>().unwrap_err(),
            IllegalInterfaceName::TooLong(name.to_string())
        );
        // the boundary itself is fine
        assert!("abcdefghijklmno".parse::<InterfaceName>().is_ok());
    }

    #[test]
    fn rejects_kernel_refused_bytes() {
        for name in ["a/b", "a:b", "a b", "a\tb", "a\nb", ".", ".."] {
            assert_eq!(
                name.parse::<InterfaceName>().unwrap_err(),
                IllegalInterfaceName::IllegalCharacters(name.to_string())
            );
        }
    }
}
