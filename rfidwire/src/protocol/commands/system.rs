// rfidwire/src/protocol/commands/system.rs

use crate::constants::{
    CMD_GET_SERIAL_NUM, CMD_GET_VERSION_NUM, CMD_SET_ADDRESS, CMD_SET_BAUDRATE,
    CMD_SET_SERIAL_NUM,
};
use crate::types::{DeviceAddress, SerialNumber};

pub fn encode_set_address(new_address: DeviceAddress) -> Vec<u8> {
    vec![CMD_SET_ADDRESS, new_address.as_u8()]
}

/// `code` is the reader's baud-rate table index, passed through verbatim.
pub fn encode_set_baud_rate(code: u8) -> Vec<u8> {
    vec![CMD_SET_BAUDRATE, code]
}

pub fn encode_set_serial_number(serial: &SerialNumber) -> Vec<u8> {
    let mut buf = vec![CMD_SET_SERIAL_NUM];
    buf.extend_from_slice(serial.as_bytes());
    buf
}

pub fn encode_get_serial_number() -> Vec<u8> {
    vec![CMD_GET_SERIAL_NUM]
}

pub fn encode_get_version() -> Vec<u8> {
    vec![CMD_GET_VERSION_NUM]
}
