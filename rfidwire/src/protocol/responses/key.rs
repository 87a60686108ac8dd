// rfidwire/src/protocol/responses/key.rs

use crate::constants::{EKS_CMD_READ, EKS_RES_STATUS};
use crate::protocol::parser;
use crate::protocol::responses::dle_kind;
use crate::types::KeyRange;
use crate::{Error, Result};

/// Offset of the first data byte in a key data ('L') reply, counted from
/// the reply kind: kind(1) + bank(2) + offset(1) + length(1).
const DATA_OFFSET: usize = 5;

/// Decode the payload of a key memory read reply.
/// Layout: kind 'L'(1) + bank(2) + offset(1) + length(1) + data(N)
pub fn decode_key_read(data: &[u8], range: KeyRange) -> Result<Vec<u8>> {
    match dle_kind(data)? {
        EKS_CMD_READ => Ok(parser::slice_at(data, DATA_OFFSET, range.len())?.to_vec()),
        // a status reply reporting success carries no data
        EKS_RES_STATUS => Err(Error::FrameFormat(
            "status reply without key data".into(),
        )),
        actual => Err(Error::UnexpectedByte {
            expected: EKS_CMD_READ,
            actual,
        }),
    }
}

/// A key memory write is acknowledged by a status ('F') reply whose status
/// byte is zero; non-zero statuses are handled by `Reply::check_status`.
pub fn decode_key_write(data: &[u8]) -> Result<()> {
    parser::expect_byte(data, 0, EKS_RES_STATUS)?;
    parser::ensure_len(data, 5)
}
