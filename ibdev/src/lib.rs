//! ibdev
//!
//! List the InfiniBand devices attached to this host.
pub mod ibv;

mod error;
pub use error::{Error, Result};

mod lister;
pub use lister::{enumerate_and_print, DeviceName, DeviceProvider};
