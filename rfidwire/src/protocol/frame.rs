// rfidwire/src/protocol/frame.rs

use std::ops::Deref;

/// Unescaped, checksum-free content of a frame.
///
/// `opcode` is the leading logical byte: the command on requests, the reply
/// marker on DLE replies and the device status on multi-drop replies.
/// `address` is only present on the multi-drop bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalMessage {
    pub address: Option<u8>,
    pub opcode: u8,
    pub data: Vec<u8>,
}

impl LogicalMessage {
    pub fn new(opcode: u8, data: Vec<u8>) -> Self {
        Self {
            address: None,
            opcode,
            data,
        }
    }

    pub fn addressed(address: u8, opcode: u8, data: Vec<u8>) -> Self {
        Self {
            address: Some(address),
            opcode,
            data,
        }
    }

    /// Value of the length field: opcode plus data. DLE bodies also count
    /// the length byte itself, see [`dle_body`](Self::dle_body).
    pub fn declared_len(&self) -> usize {
        1 + self.data.len()
    }

    /// DLE body: `[len, opcode, data..]` where `len` counts itself.
    pub fn dle_body(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(2 + self.data.len());
        body.push((2 + self.data.len()) as u8);
        body.push(self.opcode);
        body.extend_from_slice(&self.data);
        body
    }
}

/// Bytes exactly as placed on or read from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFrame(Vec<u8>);

impl RawFrame {
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for RawFrame {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Deref for RawFrame {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}
