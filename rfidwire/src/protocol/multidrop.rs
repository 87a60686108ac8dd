// rfidwire/src/protocol/multidrop.rs

//! Fixed-header multi-drop framing.
//!
//! Wire format: `STX ADDR LEN OPCODE DATA.. BCC ETX`. `LEN` counts the
//! opcode (or status byte on replies) plus data. BCC is the XOR of ADDR
//! through the last data byte; verification folds the received start byte,
//! everything up to and including BCC and the expected start marker, and
//! demands zero. No escaping is performed.

use crate::protocol::checksum::{ChecksumState, bcc};
use crate::protocol::dialect::MultiDropConfig;
use crate::protocol::frame::{LogicalMessage, RawFrame};
use crate::protocol::parser;
use crate::protocol::source::ByteSource;
use crate::{Error, Result};

/// Header bytes read before the frame length is known.
pub const HEADER_LEN: usize = 3;
/// Start marker, address, length, checksum and end marker.
pub const OVERHEAD: usize = 5;

pub fn encode(msg: &LogicalMessage, cfg: &MultiDropConfig) -> Result<RawFrame> {
    let address = msg
        .address
        .ok_or_else(|| Error::OutOfRange("multi-drop frames need a device address".into()))?;
    let len = msg.declared_len();
    if len > u8::MAX as usize || len + OVERHEAD > cfg.max_frame {
        return Err(Error::OutOfRange(format!(
            "payload of {} bytes exceeds frame maximum of {}",
            len, cfg.max_frame
        )));
    }

    let mut out = Vec::with_capacity(len + OVERHEAD);
    let mut sum = ChecksumState::new();
    out.push(cfg.start);
    for b in [address, len as u8, msg.opcode]
        .into_iter()
        .chain(msg.data.iter().copied())
    {
        out.push(b);
        sum.push(b);
    }
    out.push(sum.value());
    out.push(cfg.end);
    Ok(out.into())
}

/// Read one complete frame: the header first, then the rest in chunks of
/// at most `cfg.max_transfer` bytes.
pub fn read_frame<S: ByteSource + ?Sized>(src: &mut S, cfg: &MultiDropConfig) -> Result<RawFrame> {
    let mut raw = src.take(HEADER_LEN)?;
    let declared = parser::byte_at(&raw, 2)? as usize;
    let total = declared + OVERHEAD;
    if total > cfg.max_frame {
        return Err(Error::FrameFormat(format!(
            "declared frame of {} bytes exceeds maximum of {}",
            total, cfg.max_frame
        )));
    }

    let chunk = cfg.max_transfer.max(1);
    let mut left = total - HEADER_LEN;
    while left > 0 {
        let n = left.min(chunk);
        raw.extend(src.take(n)?);
        left -= n;
    }
    Ok(raw.into())
}

/// Address byte echoed by the responding reader.
pub fn reply_address(raw: &[u8]) -> Result<u8> {
    parser::byte_at(raw, 1)
}

/// Verify a complete frame and strip it down to its logical content.
pub fn unpack(raw: &[u8], cfg: &MultiDropConfig) -> Result<LogicalMessage> {
    parser::ensure_len(raw, OVERHEAD)?;
    let declared = parser::byte_at(raw, 2)? as usize;
    if raw.len() != declared + OVERHEAD {
        return Err(Error::InvalidLength {
            expected: declared + OVERHEAD,
            actual: raw.len(),
        });
    }

    let sum_idx = raw.len() - 2;
    let fold = raw[0] ^ bcc(&raw[1..=sum_idx]) ^ cfg.start;
    if fold != 0 {
        return Err(Error::ChecksumMismatch {
            expected: raw[0] ^ cfg.start ^ bcc(&raw[1..sum_idx]),
            actual: raw[sum_idx],
        });
    }
    if raw[raw.len() - 1] != cfg.end {
        return Err(Error::FrameFormat(format!(
            "bad end marker {:#04x}",
            raw[raw.len() - 1]
        )));
    }
    if declared == 0 {
        return Err(Error::FrameFormat("frame carries no status byte".into()));
    }

    Ok(LogicalMessage::addressed(
        raw[1],
        raw[3],
        raw[4..sum_idx].to_vec(),
    ))
}

pub fn decode<S: ByteSource + ?Sized>(src: &mut S, cfg: &MultiDropConfig) -> Result<LogicalMessage> {
    let raw = read_frame(src, cfg)?;
    unpack(&raw, cfg)
}
