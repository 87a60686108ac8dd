// rfidwire/src/protocol/commands/mifare.rs

use crate::constants::{CMD_MF_GET_SNR, CMD_MF_READ, CMD_MF_WRITE};
use crate::types::{BlockCount, MifareKey, MifareMode, SnrControl, ValueAmount};

/// Encode MF_Read: `20 mode count start [key(6)]`.
pub fn encode_read(
    mode: MifareMode,
    start_block: u8,
    blocks: BlockCount,
    key: Option<&MifareKey>,
) -> Vec<u8> {
    let mut buf = vec![CMD_MF_READ, mode.as_u8(), blocks.get(), start_block];
    if let Some(key) = key {
        buf.extend_from_slice(key.as_bytes());
    }
    buf
}

/// Encode MF_Write: `21 mode count start [key(6)] data..`.
pub fn encode_write(
    mode: MifareMode,
    start_block: u8,
    blocks: BlockCount,
    key: Option<&MifareKey>,
    data: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10 + data.len());
    buf.extend_from_slice(&[CMD_MF_WRITE, mode.as_u8(), blocks.get(), start_block]);
    if let Some(key) = key {
        buf.extend_from_slice(key.as_bytes());
    }
    buf.extend_from_slice(data);
    buf
}

/// Encode one of the value commands (init / decrement / increment):
/// `op mode sector key(6) value(4)`.
pub fn encode_value(
    opcode: u8,
    mode: MifareMode,
    sector: u8,
    key: &MifareKey,
    value: ValueAmount,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(13);
    buf.extend_from_slice(&[opcode, mode.as_u8(), sector]);
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(value.as_bytes());
    buf
}

/// Encode MF_GET_SNR: `25 mode control`.
pub fn encode_get_snr(mode: MifareMode, control: SnrControl) -> Vec<u8> {
    vec![CMD_MF_GET_SNR, mode.as_u8(), control.as_u8()]
}
