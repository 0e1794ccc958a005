use super::verbs::*;
use std::{borrow::Cow, ffi::CStr, ops::Deref};

/// Handle to one device inside a [`DeviceList`](super::DeviceList).
///
/// The handle is owned by the list and is never released on its own.
#[repr(transparent)]
pub struct Device(*mut ibv_device);

impl Device {
    /// The name as stored by libibverbs, valid for as long as the owning list.
    pub fn name_bytes(&self) -> &[u8] {
        unsafe { CStr::from_ptr(ibv_get_device_name(self.0)) }.to_bytes()
    }

    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }

    pub fn guid(&self) -> u64 {
        u64::from_be(unsafe { ibv_get_device_guid(self.0) })
    }
}

impl Deref for Device {
    type Target = ibv_device;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.0 }
    }
}

impl std::fmt::Debug for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name();
        let guid = format!("{:016x}", self.guid());
        f.debug_struct("Device")
            .field("name", &name)
            .field("guid", &guid)
            .field("node_type", &self.node_type)
            .field("transport_type", &self.transport_type)
            .finish()
    }
}
