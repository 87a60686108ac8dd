// rfidwire/src/protocol/responses/system.rs

use crate::protocol::parser;
use crate::types::{DeviceAddress, SerialNumber};
use crate::Result;

/// SetAddress reply payload: the address the reader now answers to.
pub fn decode_address(data: &[u8]) -> Result<DeviceAddress> {
    Ok(DeviceAddress::new(parser::byte_at(data, 0)?))
}

/// GetSerialNumber reply payload: 8-byte reader serial.
pub fn decode_serial_number(data: &[u8]) -> Result<SerialNumber> {
    SerialNumber::try_from(data)
}

/// Version replies are ASCII, sometimes NUL padded.
pub fn decode_version(data: &[u8]) -> String {
    String::from_utf8_lossy(data)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}
