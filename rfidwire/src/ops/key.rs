// rfidwire/src/ops/key.rs

//! EKS key memory operations (DLE dialect).

use log::debug;

use crate::device::Device;
use crate::ops::unexpected;
use crate::protocol::{Command, Response};
use crate::status::EKS_NO_KEY;
use crate::types::{KeyRange, SerialNumber};
use crate::{Error, Result};

/// Whether a key is inserted, read from the transport's key-detect line.
pub fn key_present(dev: &mut Device) -> Result<bool> {
    dev.key_present()
}

fn require_key(dev: &mut Device) -> Result<()> {
    if dev.key_present()? {
        return Ok(());
    }
    debug!("no key inserted");
    Err(Error::DeviceStatus {
        code: EKS_NO_KEY,
        detail: None,
    })
}

/// Read `range` from key memory.
pub fn read_key_data(dev: &mut Device, range: KeyRange) -> Result<Vec<u8>> {
    require_key(dev)?;
    match dev.transact(&Command::ReadKeyData { range }, None)? {
        Response::KeyData(data) => Ok(data),
        other => Err(unexpected("read_key_data", other)),
    }
}

/// Convenience for callers that hold plain integers.
pub fn read_key_range(dev: &mut Device, offset: usize, len: usize) -> Result<Vec<u8>> {
    read_key_data(dev, KeyRange::new(offset, len)?)
}

/// The key's 8-byte serial number.
pub fn serial_number(dev: &mut Device) -> Result<SerialNumber> {
    let data = read_key_data(dev, KeyRange::serial_number())?;
    SerialNumber::try_from(data.as_slice())
}

/// Write `data` into key memory starting at `offset`.
pub fn write_key_data(dev: &mut Device, offset: usize, data: &[u8]) -> Result<()> {
    let range = KeyRange::new(offset, data.len())?;
    require_key(dev)?;
    let cmd = Command::WriteKeyData {
        range,
        data: data.to_vec(),
    };
    match dev.transact(&cmd, None)? {
        Response::Ack(_) => Ok(()),
        other => Err(unexpected("write_key_data", other)),
    }
}
