use crate::{Error, Result};
use std::{io::Write, ops::Deref};

/// Something that can resolve a device handle to its display name.
pub trait DeviceName {
    /// The name exactly as the provider reports it, without any text decoding.
    fn name_bytes(&self) -> &[u8];
}

/// A source of device lists.
///
/// The returned `List` owns the underlying query result: dropping it releases the result,
/// so holding the list is the only way to reach its devices.
pub trait DeviceProvider {
    type Device: DeviceName;
    type List: Deref<Target = [Self::Device]>;

    fn device_list(&self) -> Result<Self::List>;
}

/// Print the name of every device reported by `provider`, one per line, in reported order.
///
/// Returns the number of devices printed. The device list is released before returning on
/// every path once it has been acquired.
pub fn enumerate_and_print<P, W>(provider: &P, out: &mut W) -> Result<usize>
where
    P: DeviceProvider + ?Sized,
    W: Write + ?Sized,
{
    let list = provider.device_list()?;
    tracing::debug!("found {} ib devices", list.len());

    for device in list.iter() {
        out.write_all(device.name_bytes())
            .and_then(|_| out.write_all(b"\n"))
            .map_err(Error::Output)?;
    }
    out.flush().map_err(Error::Output)?;

    Ok(list.len())
}
