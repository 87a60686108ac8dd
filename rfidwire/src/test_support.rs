//! Test support helpers intended for use by unit and integration tests.
//!
//! Frames are assembled here by hand rather than through the codecs, so the
//! codecs are checked against an independent rendering of the wire format.

use crate::constants::{DLE, DLE_ETX, DLE_STX, MD_ETX, MD_STX};
use crate::protocol::checksum::bcc;
use crate::protocol::frame::LogicalMessage;
use crate::transport::MockTransport;

/// Wire bytes of a DLE frame carrying `msg`.
#[doc(hidden)]
pub fn dle_frame(msg: &LogicalMessage) -> Vec<u8> {
    let body = msg.dle_body();
    let mut out = Vec::with_capacity(body.len() * 2 + 3);
    for &b in &body {
        if b == DLE {
            out.push(DLE);
        }
        out.push(b);
    }
    out.push(DLE);
    out.push(DLE_ETX);
    out.push(bcc(&body) ^ DLE ^ DLE_ETX);
    out
}

/// What an EKS reader sends in answer to each host write of one
/// transaction: DLE after STX, DLE STX after the command frame and the
/// reply frame after the host's DLE. Queue the chunks in order with
/// `MockTransport::queue_reply`.
#[doc(hidden)]
pub fn dle_reply_script(reply: &LogicalMessage) -> Vec<Vec<u8>> {
    vec![vec![DLE], vec![DLE, DLE_STX], dle_frame(reply)]
}

/// Wire bytes of a multi-drop reply from `address` with device `status`.
#[doc(hidden)]
pub fn md_reply_frame(address: u8, status: u8, data: &[u8]) -> Vec<u8> {
    let mut out = vec![MD_STX, address, (data.len() + 1) as u8, status];
    out.extend_from_slice(data);
    out.push(bcc(&out[1..]));
    out.push(MD_ETX);
    out
}

/// A mock with one full DLE transaction scripted.
#[doc(hidden)]
pub fn mock_with_dle_reply(reply: &LogicalMessage) -> MockTransport {
    let mut m = MockTransport::new();
    for chunk in dle_reply_script(reply) {
        m.queue_reply(chunk);
    }
    m
}

/// A mock that answers its first sends with `frames`, one each.
#[doc(hidden)]
pub fn mock_with_md_replies(frames: Vec<Vec<u8>>) -> MockTransport {
    let mut m = MockTransport::new();
    for f in frames {
        m.queue_reply(f);
    }
    m
}

/// Route `log` output through the test harness.
#[cfg(test)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
