// rfidwire/src/protocol/dle.rs

//! Byte-stuffed DLE framing.
//!
//! Wire format: `[body with every DLE doubled] DLE ETX BCC`, where the body
//! is `[len, opcode, data..]`, `len` counts the whole body including itself,
//! and BCC is the XOR of every logical body byte and the DLE ETX terminator.
//! The length byte is read back without escape interpretation, so a body of
//! exactly 16 bytes (a length equal to DLE) cannot be expressed and is
//! rejected. Key ranges whose reply body would be 16 bytes long are refused
//! before any I/O by `KeyRange::new`.

use crate::protocol::checksum::ChecksumState;
use crate::protocol::dialect::DleConfig;
use crate::protocol::frame::{LogicalMessage, RawFrame};
use crate::protocol::source::ByteSource;
use crate::{Error, Result};

/// Escape and terminate a raw body whose first byte declares its length.
pub fn encode_body(body: &[u8], cfg: &DleConfig) -> Result<RawFrame> {
    let declared = *body
        .first()
        .ok_or_else(|| Error::OutOfRange("empty command body".into()))?;
    if declared as usize != body.len() {
        return Err(Error::OutOfRange(format!(
            "declared length {} but {} bytes supplied",
            declared,
            body.len()
        )));
    }
    if declared == cfg.escape {
        return Err(Error::OutOfRange(format!(
            "body length {} collides with the escape byte",
            declared
        )));
    }

    let escapes = body.iter().filter(|&&b| b == cfg.escape).count();
    let wire_len = body.len() + escapes + 3;
    if wire_len > cfg.max_frame {
        return Err(Error::OutOfRange(format!(
            "frame of {} bytes exceeds maximum of {}",
            wire_len, cfg.max_frame
        )));
    }

    let mut out = Vec::with_capacity(wire_len);
    let mut sum = ChecksumState::new();
    for &b in body {
        if b == cfg.escape {
            out.push(cfg.escape);
        }
        out.push(b);
        sum.push(b);
    }
    let terminator = [cfg.escape, cfg.end];
    out.extend_from_slice(&terminator);
    sum.extend(&terminator);
    out.push(sum.value());
    Ok(out.into())
}

pub fn encode(msg: &LogicalMessage, cfg: &DleConfig) -> Result<RawFrame> {
    if msg.data.len() + 2 > u8::MAX as usize {
        return Err(Error::OutOfRange(format!(
            "{} data bytes do not fit a DLE body",
            msg.data.len()
        )));
    }
    encode_body(&msg.dle_body(), cfg)
}

/// Consume one reply from `src`: the length byte, the escaped body and the
/// three-byte trailer, which is read verbatim.
pub fn decode<S: ByteSource + ?Sized>(src: &mut S, cfg: &DleConfig) -> Result<LogicalMessage> {
    let declared = src.take_byte()?;
    if declared < 2 {
        return Err(Error::FrameFormat(format!(
            "declared body length {} is too short",
            declared
        )));
    }

    let mut body = Vec::with_capacity(declared as usize);
    let mut sum = ChecksumState::new();
    body.push(declared);
    sum.push(declared);

    while body.len() < declared as usize {
        let b = src.take_byte()?;
        if b == cfg.escape {
            let dup = src.take_byte()?;
            if dup != cfg.escape {
                return Err(Error::FrameFormat(format!(
                    "lone escape followed by {:#04x}",
                    dup
                )));
            }
        }
        body.push(b);
        sum.push(b);
    }

    let trailer = src.take(3)?;
    let &[t_esc, t_end, t_sum] = trailer.as_slice() else {
        return Err(Error::InvalidLength {
            expected: 3,
            actual: trailer.len(),
        });
    };
    if t_esc != cfg.escape || t_end != cfg.end {
        return Err(Error::FrameFormat(format!(
            "bad terminator {:#04x} {:#04x}",
            t_esc, t_end
        )));
    }
    sum.push(t_esc);
    sum.push(t_end);
    if t_sum != sum.value() {
        return Err(Error::ChecksumMismatch {
            expected: sum.value(),
            actual: t_sum,
        });
    }

    Ok(LogicalMessage::new(body[1], body[2..].to_vec()))
}
