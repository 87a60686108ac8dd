// rfidwire/src/protocol/responses/mifare.rs

use crate::constants::{MIFARE_BLOCK_LEN, ULTRALIGHT_PAGE_LEN};
use crate::protocol::parser;
use crate::types::BlockCount;
use crate::Result;

/// Shortest UID a card can report (single size UID).
const MIN_UID_LEN: usize = 4;

/// Decode block data. Keyed reads return full 16-byte Mifare blocks,
/// keyless reads return 4-byte pages.
pub fn decode_blocks(data: &[u8], blocks: BlockCount, keyed: bool) -> Result<Vec<u8>> {
    let unit = if keyed {
        MIFARE_BLOCK_LEN
    } else {
        ULTRALIGHT_PAGE_LEN
    };
    parser::ensure_len(data, blocks.get() as usize * unit)?;
    Ok(data.to_vec())
}

pub fn decode_uid(data: &[u8]) -> Result<Vec<u8>> {
    parser::ensure_len(data, MIN_UID_LEN)?;
    Ok(data.to_vec())
}
