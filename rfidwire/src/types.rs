// rfidwire/src/types.rs

use crate::constants::DLE;
use crate::device::dle::config as dle_config;
use crate::{Error, Result};
use derive_more::{Display, From};
use std::convert::TryFrom;

/// DialectKind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialectKind {
    /// Byte-stuffed DLE handshake protocol (EKS key readers).
    #[display(fmt = "dle")]
    Dle,
    /// Fixed-header multi-drop bus protocol (iDTRONIC Mifare readers).
    #[display(fmt = "multi-drop")]
    MultiDrop,
}

/// Bus address of a reader on a multi-drop line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Display)]
#[display(fmt = "{:#04x}", _0)]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// Address 0 is accepted by every reader regardless of its configured id.
    pub const BROADCAST: Self = Self(0x00);

    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for DeviceAddress {
    type Error = Error;

    fn try_from(addr: u32) -> Result<Self> {
        u8::try_from(addr)
            .map(Self)
            .map_err(|_| Error::OutOfRange(format!("device address {} exceeds 255", addr)))
    }
}

/// A contiguous region of EKS key memory.
///
/// Offsets or lengths equal to the escape byte (0x10) are rejected: the
/// reader's behaviour for them is undefined on the wire. So are lengths
/// whose read reply or write request body would declare a length of 0x10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    offset: u8,
    len: u8,
}

impl KeyRange {
    pub fn new(offset: usize, len: usize) -> Result<Self> {
        if len == 0 || len > dle_config::MAX_DATA_LEN {
            return Err(Error::OutOfRange(format!(
                "length {} not in 1..={}",
                len,
                dle_config::MAX_DATA_LEN
            )));
        }
        let in_memory = offset
            .checked_add(len)
            .is_some_and(|end| end <= dle_config::KEY_MEMORY_SIZE);
        if !in_memory {
            return Err(Error::OutOfRange(format!(
                "range {}+{} exceeds key memory of {} bytes",
                offset,
                len,
                dle_config::KEY_MEMORY_SIZE
            )));
        }
        let escape = usize::from(DLE);
        if offset == escape || len == escape {
            return Err(Error::OutOfRange(format!(
                "offset {} / length {} collides with the escape byte",
                offset, len
            )));
        }
        if len + dle_config::KEY_FRAME_OVERHEAD == escape {
            return Err(Error::OutOfRange(format!(
                "length {} gives a frame body of {} bytes, the escape byte",
                len, escape
            )));
        }
        let (Ok(offset), Ok(len)) = (u8::try_from(offset), u8::try_from(len)) else {
            return Err(Error::OutOfRange(format!("range {}+{}", offset, len)));
        };
        Ok(Self { offset, len })
    }

    /// The 8-byte serial number region at offset 116.
    pub fn serial_number() -> Self {
        Self {
            offset: crate::constants::EKS_SERIAL_OFFSET,
            len: crate::constants::EKS_SERIAL_LEN,
        }
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Mifare sector key - Newtype Pattern (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory default transport key.
    pub const DEFAULT: Self = Self([0xFF; 6]);

    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

/// Reader-specific request/key-selection mode byte, passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, From, Display)]
#[display(fmt = "{:#04x}", _0)]
pub struct MifareMode(u8);

impl MifareMode {
    pub const fn new(mode: u8) -> Self {
        Self(mode)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Control byte of a card serial request, passed through verbatim.
/// Readers define at least "leave the card active" and "halt it".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, From, Display)]
#[display(fmt = "{:#04x}", _0)]
pub struct SnrControl(u8);

impl SnrControl {
    pub const CONTINUE: Self = Self(0x00);
    pub const HALT: Self = Self(0x01);

    pub const fn new(control: u8) -> Self {
        Self(control)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Number of blocks in a bulk operation, validated against a per-command
/// ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCount(u8);

impl BlockCount {
    pub fn new(count: usize, max: u8) -> Result<Self> {
        if count == 0 || count > max as usize {
            return Err(Error::OutOfRange(format!(
                "block count {} not in 1..={}",
                count, max
            )));
        }
        Ok(Self(count as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Four-byte Mifare value operand (little-endian signed on the card).
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct ValueAmount([u8; 4]);

impl ValueAmount {
    pub fn from_i32(value: i32) -> Self {
        Self(value.to_le_bytes())
    }

    pub fn to_i32(&self) -> i32 {
        i32::from_le_bytes(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

/// SerialNumber - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerialNumber([u8; 8]);

impl SerialNumber {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for SerialNumber {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Parity setting of a serial link. Framing is always 8 data bits and one
/// stop bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    #[display(fmt = "N")]
    None,
    #[display(fmt = "E")]
    Even,
}

/// Link settings a transport is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{},{},8,1", baud_rate, parity)]
pub struct PortSettings {
    pub baud_rate: u32,
    pub parity: Parity,
}

impl PortSettings {
    pub const fn new(baud_rate: u32, parity: Parity) -> Self {
        Self { baud_rate, parity }
    }
}
