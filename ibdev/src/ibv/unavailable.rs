use crate::{Error, Result};
use std::ops::Deref;

/// Placeholder device type for builds without libibverbs. It has no values.
#[derive(Debug)]
pub enum Device {}

impl Device {
    pub fn name_bytes(&self) -> &[u8] {
        match *self {}
    }
}

/// Always empty; [`DeviceList::available`] never succeeds in this build.
#[derive(Debug)]
pub struct DeviceList(Box<[Device]>);

impl DeviceList {
    pub fn available() -> Result<Self> {
        Err(Error::DeviceQuery(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "built without libibverbs",
        )))
    }
}

impl Deref for DeviceList {
    type Target = [Device];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
