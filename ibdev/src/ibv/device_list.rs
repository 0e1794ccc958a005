use super::{verbs::*, Deleter, Device, Wrapper};
use crate::{Error, Result};
use std::{ffi::c_int, ops::Deref};

/// The devices currently attached to the host, in the order reported by libibverbs.
pub type DeviceList = Wrapper<[Device]>;

impl DeviceList {
    pub fn available() -> Result<Self> {
        let mut num_devices: c_int = 0;
        let arr = unsafe { ibv_get_device_list(&mut num_devices) };
        if arr.is_null() {
            return Err(Error::DeviceQuery(std::io::Error::last_os_error()));
        }

        let num_devices = usize::try_from(num_devices).unwrap_or_default();
        for idx in 0..num_devices {
            let device = unsafe { &*(arr.add(idx) as *const Device) };
            tracing::debug!("ib device {}: {:?}", idx, device);
        }

        Ok(Self::new(std::ptr::slice_from_raw_parts_mut(
            arr as *mut Device,
            num_devices,
        )))
    }
}

impl Deleter for [Device] {
    unsafe fn delete(ptr: *mut Self) -> i32 {
        ibv_free_device_list(ptr as *mut Device as *mut *mut ibv_device);
        0
    }
}

impl std::fmt::Debug for DeviceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DeviceList").field(&self.deref()).finish()
    }
}
