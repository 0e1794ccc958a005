#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("ib get device list fail: {0}")]
    DeviceQuery(#[source] std::io::Error),
    #[error("write device name fail: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::DeviceQuery(_) | Error::Output(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
