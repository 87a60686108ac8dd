// rfidwire/src/protocol/responses/mod.rs

pub mod key;
pub mod mifare;
pub mod system;

pub use key::{decode_key_read, decode_key_write};
pub use mifare::{decode_blocks, decode_uid};
pub use system::{decode_address, decode_serial_number, decode_version};

use crate::constants::{EKS_CMD_RESPONSE, EKS_RES_STATUS, MD_STATUS_OK};
use crate::protocol::commands::Command;
use crate::protocol::frame::LogicalMessage;
use crate::protocol::parser;
use crate::types::{DeviceAddress, DialectKind, SerialNumber};
use crate::{Error, Result};

/// Index of the status byte inside a DLE status ('F') reply, counted from
/// the reply kind.
const DLE_STATUS_INDEX: usize = 4;

/// A verified reply as returned by the transaction engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub dialect: DialectKind,
    pub message: LogicalMessage,
}

impl Reply {
    pub fn new(dialect: DialectKind, message: LogicalMessage) -> Self {
        Self { dialect, message }
    }

    /// Address echoed by the responding reader (multi-drop only).
    pub fn address(&self) -> Option<u8> {
        self.message.address
    }

    /// Device status embedded in the reply, if the reply carries one.
    ///
    /// Multi-drop replies always lead with a status byte. DLE replies only
    /// carry one when they are status ('F') replies.
    pub fn status(&self) -> Option<u8> {
        match self.dialect {
            DialectKind::MultiDrop => Some(self.message.opcode),
            DialectKind::Dle => match self.message.data.first() {
                Some(&EKS_RES_STATUS) => self.message.data.get(DLE_STATUS_INDEX).copied(),
                _ => None,
            },
        }
    }

    /// Reply payload after the opcode/status byte.
    pub fn data(&self) -> &[u8] {
        &self.message.data
    }

    /// Fail with `DeviceStatus` when the reader reported a non-success
    /// status. The code is passed through verbatim.
    pub fn check_status(&self) -> Result<()> {
        match self.status() {
            Some(code) if code != MD_STATUS_OK => Err(Error::DeviceStatus {
                code,
                detail: match self.dialect {
                    DialectKind::MultiDrop => self.message.data.first().copied(),
                    DialectKind::Dle => None,
                },
            }),
            _ => Ok(()),
        }
    }
}

/// High-level Response enum. Per-family decoders live in
/// `protocol::responses::<family>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Bytes read from key memory.
    KeyData(Vec<u8>),
    /// Command accepted; carries whatever data the reader appended.
    Ack(Vec<u8>),
    /// Raw block (or page) contents.
    Blocks(Vec<u8>),
    /// Result of a value operation as reported by the reader.
    Value(Vec<u8>),
    /// Card UID.
    Uid(Vec<u8>),
    Address(DeviceAddress),
    SerialNumber(SerialNumber),
    Version(String),
}

impl Response {
    /// Decode `reply` as the answer to `cmd`. Device status failures are
    /// reported as `Error::DeviceStatus` before any payload is looked at.
    pub fn decode(cmd: &Command, reply: &Reply) -> Result<Self> {
        if reply.dialect != cmd.dialect() {
            return Err(Error::FrameFormat(format!(
                "{} reply to a {} command",
                reply.dialect,
                cmd.dialect()
            )));
        }

        match reply.dialect {
            DialectKind::Dle => Self::decode_dle(cmd, reply),
            DialectKind::MultiDrop => Self::decode_multi_drop(cmd, reply),
        }
    }

    fn decode_dle(cmd: &Command, reply: &Reply) -> Result<Self> {
        if reply.message.opcode != EKS_CMD_RESPONSE {
            return Err(Error::UnexpectedByte {
                expected: EKS_CMD_RESPONSE,
                actual: reply.message.opcode,
            });
        }
        reply.check_status()?;

        match cmd {
            Command::ReadKeyData { range } => Ok(Self::KeyData(decode_key_read(reply.data(), *range)?)),
            Command::WriteKeyData { .. } => {
                decode_key_write(reply.data())?;
                Ok(Self::Ack(Vec::new()))
            }
            _ => Err(Error::UnsupportedOperation(format!(
                "opcode {:#04x} has no DLE reply",
                cmd.opcode()
            ))),
        }
    }

    fn decode_multi_drop(cmd: &Command, reply: &Reply) -> Result<Self> {
        reply.check_status()?;
        let data = reply.data();

        match cmd {
            Command::MifareRead { blocks, key, .. } => {
                Ok(Self::Blocks(decode_blocks(data, *blocks, key.is_some())?))
            }
            Command::MifareInitValue { .. }
            | Command::MifareDecrement { .. }
            | Command::MifareIncrement { .. } => Ok(Self::Value(data.to_vec())),
            Command::MifareGetSerial { .. } => Ok(Self::Uid(decode_uid(data)?)),
            Command::SetAddress { .. } => Ok(Self::Address(decode_address(data)?)),
            Command::GetSerialNumber => Ok(Self::SerialNumber(decode_serial_number(data)?)),
            Command::GetVersion => Ok(Self::Version(decode_version(data))),
            Command::MifareWrite { .. }
            | Command::SetBaudRate { .. }
            | Command::SetSerialNumber { .. } => Ok(Self::Ack(data.to_vec())),
            Command::ReadKeyData { .. } | Command::WriteKeyData { .. } => {
                Err(Error::UnsupportedOperation(format!(
                    "opcode {:#04x} has no multi-drop reply",
                    cmd.opcode()
                )))
            }
        }
    }
}

/// Reply kind byte of a DLE reply (`'L'` data or `'F'` status).
pub(crate) fn dle_kind(data: &[u8]) -> Result<u8> {
    parser::byte_at(data, 0)
}
