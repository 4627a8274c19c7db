// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Canonical representation and comparison of IEEE-802 hardware (MAC)
//! addresses.
//!
//! This crate is the address vocabulary of the network-filtering layer: it
//! parses, formats, compares, classifies, and generates the 6-byte hardware
//! addresses that identify guest interfaces.  Everything here is a pure
//! value operation; the only external collaborator is the randomness source
//! handed to [`Mac::from_prefix`].

#![deny(
    unsafe_code,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]

pub mod addr;
pub mod lenient;
pub mod oui;

pub use addr::{Mac, MacParseError};
pub use oui::Oui;
