//! Device enumeration through the host's libibverbs.
//!
//! Native bindings are only available when the build found libibverbs; otherwise every
//! enumeration fails with [`Error::DeviceQuery`](crate::Error::DeviceQuery).
#[cfg(ibverbs)]
pub mod verbs;

mod wrapper;
pub use wrapper::{Deleter, Wrapper};

#[cfg(ibverbs)]
mod device;
#[cfg(ibverbs)]
pub use device::Device;

#[cfg(ibverbs)]
mod device_list;
#[cfg(ibverbs)]
pub use device_list::DeviceList;

#[cfg(not(ibverbs))]
mod unavailable;
#[cfg(not(ibverbs))]
pub use unavailable::{Device, DeviceList};

use crate::{DeviceName, DeviceProvider, Result};

/// The verbs provider of the running host.
#[derive(Debug, Default, Clone, Copy)]
pub struct System;

impl DeviceProvider for System {
    type Device = Device;
    type List = DeviceList;

    fn device_list(&self) -> Result<DeviceList> {
        DeviceList::available()
    }
}

impl DeviceName for Device {
    fn name_bytes(&self) -> &[u8] {
        Device::name_bytes(self)
    }
}
