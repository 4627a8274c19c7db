// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The parameter block that starts snooping on one interface.

use crate::interface::InterfaceName;
use derive_builder::Builder;
use mac::Mac;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// The kind of host-side connectivity behind a guest interface.
///
/// Lease snooping only applies to interface kinds whose traffic the host
/// can observe, so only those are declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkType {
    /// Attached to a host bridge device.
    Bridge,
    /// Attached to a managed virtual network.
    Network,
    /// Directly attached to a host device (macvtap and friends).
    Direct,
    /// A host ethernet device handed to the guest.
    Ethernet,
}

/// The network-type tag was not one [`NetworkType`] declares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a snoopable network type")]
pub struct InvalidNetworkType(String);

impl NetworkType {
    /// The configuration spelling of the tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Bridge => "bridge",
            NetworkType::Network => "network",
            NetworkType::Direct => "direct",
            NetworkType::Ethernet => "ethernet",
        }
    }
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = InvalidNetworkType;

    fn from_str(s: &str) -> Result<NetworkType, InvalidNetworkType> {
        match s {
            "bridge" => Ok(NetworkType::Bridge),
            "network" => Ok(NetworkType::Network),
            "direct" => Ok(NetworkType::Direct),
            "ethernet" => Ok(NetworkType::Ethernet),
            _ => Err(InvalidNetworkType(s.to_string())),
        }
    }
}

/// Everything [`LeaseSnooping::begin`] needs to know about one interface.
///
/// Assembled with [`SnoopRequestBuilder`]; only `filter_params` may be
/// omitted (filters without parameters are common).
///
/// [`LeaseSnooping::begin`]: crate::LeaseSnooping::begin
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(setter(into))]
pub struct SnoopRequest {
    /// The guest-facing interface to snoop on.
    pub interface: InterfaceName,
    /// The underlying link device carrying the interface's traffic.
    pub link_device: InterfaceName,
    /// How the interface is plugged into the host.
    pub network_type: NetworkType,
    /// The VM the interface belongs to.
    pub vm_id: Uuid,
    /// The interface's parsed hardware address.
    pub mac: Mac,
    /// Name of the filter to apply learned leases to.
    pub filter_name: String,
    /// Filter parameters, keyed by parameter name.
    #[builder(default)]
    pub filter_params: HashMap<String, String>,
}
