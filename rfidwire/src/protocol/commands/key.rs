// rfidwire/src/protocol/commands/key.rs

use crate::constants::{EKS_BANK, EKS_CMD_READ, EKS_CMD_SEND, EKS_CMD_WRITE};
use crate::types::KeyRange;

/// Encode a key memory read: `T L <bank> <offset> <len>`.
pub fn encode_read_key(range: KeyRange) -> Vec<u8> {
    let mut buf = vec![EKS_CMD_SEND, EKS_CMD_READ];
    buf.extend_from_slice(&EKS_BANK);
    buf.push(range.offset());
    buf.push(range.len() as u8);
    buf
}

/// Encode a key memory write: `T P <bank> <offset> <len> <data..>`.
/// `data.len()` must equal `range.len()`; the adapter guarantees it.
pub fn encode_write_key(range: KeyRange, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(6 + data.len());
    buf.push(EKS_CMD_SEND);
    buf.push(EKS_CMD_WRITE);
    buf.extend_from_slice(&EKS_BANK);
    buf.push(range.offset());
    buf.push(range.len() as u8);
    buf.extend_from_slice(data);
    buf
}
