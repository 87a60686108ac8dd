// rfidwire/src/ops/system.rs

//! Reader management on the multi-drop bus.

use crate::device::Device;
use crate::ops::unexpected;
use crate::protocol::{Command, Response};
use crate::types::{DeviceAddress, SerialNumber};
use crate::Result;

/// Move the reader at `address` to `new_address`. Returns the address the
/// reader reports it now answers to.
pub fn set_address(
    dev: &mut Device,
    address: DeviceAddress,
    new_address: DeviceAddress,
) -> Result<DeviceAddress> {
    match dev.transact(&Command::SetAddress { new_address }, Some(address))? {
        Response::Address(a) => Ok(a),
        other => Err(unexpected("set_address", other)),
    }
}

/// Switch the reader's line speed. `code` is the reader's baud rate index
/// and is passed through unchanged; reopen the port at the new rate
/// afterwards.
pub fn set_baud_rate(dev: &mut Device, address: DeviceAddress, code: u8) -> Result<()> {
    match dev.transact(&Command::SetBaudRate { code }, Some(address))? {
        Response::Ack(_) => Ok(()),
        other => Err(unexpected("set_baud_rate", other)),
    }
}

pub fn set_serial_number(
    dev: &mut Device,
    address: DeviceAddress,
    serial: &SerialNumber,
) -> Result<()> {
    let cmd = Command::SetSerialNumber { serial: *serial };
    match dev.transact(&cmd, Some(address))? {
        Response::Ack(_) => Ok(()),
        other => Err(unexpected("set_serial_number", other)),
    }
}

pub fn get_serial_number(dev: &mut Device, address: DeviceAddress) -> Result<SerialNumber> {
    match dev.transact(&Command::GetSerialNumber, Some(address))? {
        Response::SerialNumber(sn) => Ok(sn),
        other => Err(unexpected("get_serial_number", other)),
    }
}

pub fn get_version(dev: &mut Device, address: DeviceAddress) -> Result<String> {
    match dev.transact(&Command::GetVersion, Some(address))? {
        Response::Version(v) => Ok(v),
        other => Err(unexpected("get_version", other)),
    }
}
