// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Call contract for the per-interface DHCP lease-snooping subsystem.
//!
//! The network-filtering layer watches DHCP traffic on guest interfaces to
//! learn which IP addresses a guest's MAC is actually leased, and tightens
//! filter rules accordingly.  This crate declares the boundary to that
//! subsystem: the parameter block a caller assembles to start snooping on
//! one interface ([`SnoopRequest`]) and the lifecycle trait an
//! implementation provides ([`LeaseSnooping`]).  The snooping internals
//! (packet capture, lease tables, per-interface threads) live behind the
//! trait and are deliberately not specified here.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]

pub mod interface;
pub mod request;

pub use interface::{IllegalInterfaceName, InterfaceName};
pub use request::{
    InvalidNetworkType, NetworkType, SnoopRequest, SnoopRequestBuilder, SnoopRequestBuilderError,
};

use core::error::Error;

/// Per-interface DHCP lease monitoring.
///
/// An implementation is created once per process with [`LeaseSnooping::init`]
/// and torn down with [`LeaseSnooping::shutdown`]; in between, monitoring is
/// started per interface with [`LeaseSnooping::begin`] and stopped with
/// [`LeaseSnooping::end`].  The technology driver and driver state are
/// opaque collaborator handles owned by the filtering layer; this contract
/// only threads them through.
pub trait LeaseSnooping: Sized {
    /// The technology driver that installs and updates filter rules for the
    /// interface's underlying device type.
    type TechDriver: ?Sized;
    /// Long-lived filter-driver state threaded through rule updates.
    type DriverState: ?Sized;
    /// Failure reported by [`LeaseSnooping::init`] and
    /// [`LeaseSnooping::begin`].
    type Error: Error;

    /// Bring up the subsystem's process-wide state.
    ///
    /// # Errors
    ///
    /// Implementation-defined; a failed `init` leaves nothing to shut down.
    fn init() -> Result<Self, Self::Error>;

    /// Begin lease monitoring for the interface described by `request`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; on error no monitoring was started for the
    /// interface.
    fn begin(
        &self,
        request: &SnoopRequest,
        techdriver: &Self::TechDriver,
        state: &Self::DriverState,
    ) -> Result<(), Self::Error>;

    /// Stop lease monitoring for the named interface.  A name that is not
    /// currently monitored is a no-op.
    fn end(&self, interface: &InterfaceName);

    /// Tear down all monitoring and the process-wide state.
    fn shutdown(self);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod test {
    use super::*;
    use mac::Mac;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use uuid::Uuid;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Begin(InterfaceName, Mac),
        End(InterfaceName),
    }

    /// Test double which records the call sequence.
    struct Recorder {
        events: RefCell<Vec<Event>>,
    }

    impl LeaseSnooping for Recorder {
        type TechDriver = str;
        type DriverState = ();
        type Error = Infallible;

        fn init() -> Result<Recorder, Infallible> {
            Ok(Recorder {
                events: RefCell::new(Vec::new()),
            })
        }

        fn begin(
            &self,
            request: &SnoopRequest,
            _techdriver: &str,
            _state: &(),
        ) -> Result<(), Infallible> {
            self.events
                .borrow_mut()
                .push(Event::Begin(request.interface.clone(), request.mac));
            Ok(())
        }

        fn end(&self, interface: &InterfaceName) {
            self.events.borrow_mut().push(Event::End(interface.clone()));
        }

        fn shutdown(self) {
            self.events.borrow_mut().clear();
        }
    }

    fn request(interface: &InterfaceName) -> SnoopRequest {
        SnoopRequestBuilder::default()
            .interface(interface.clone())
            .link_device("eth0".parse::<InterfaceName>().unwrap())
            .network_type(NetworkType::Bridge)
            .vm_id(Uuid::new_v4())
            .mac("52:54:00:12:34:56".parse::<Mac>().unwrap())
            .filter_name("clean-traffic")
            .build()
            .unwrap()
    }

    #[test]
    fn begin_end_sequence_is_observed() {
        let vnet0: InterfaceName = "vnet0".parse().unwrap();
        let snooper = Recorder::init().unwrap();
        snooper
            .begin(&request(&vnet0), "ebtables", &())
            .unwrap();
        snooper.end(&vnet0);
        {
            let events = snooper.events.borrow();
            assert_eq!(events.len(), 2);
            let mac: Mac = "52:54:00:12:34:56".parse().unwrap();
            assert_eq!(events[0], Event::Begin(vnet0.clone(), mac));
            assert_eq!(events[1], Event::End(vnet0));
        }
        snooper.shutdown();
    }

    #[test]
    fn builder_rejects_missing_mandatory_field() {
        let err = SnoopRequestBuilder::default()
            .interface("vnet0".parse::<InterfaceName>().unwrap())
            .build();
        assert!(err.is_err());
    }
}
