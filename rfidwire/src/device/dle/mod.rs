//! DLE handshake engine (EKS key readers)
//!
//! One transaction is a fixed sequence of seven steps:
//!
//! 1. host sends STX, reader answers DLE
//! 2. host sends the encoded command frame
//! 3. reader acknowledges with DLE
//! 4. reader announces its reply with STX
//! 5. host requests the reply with DLE
//! 6. reader sends the reply frame
//! 7. host closes with DLE
//!
//! Every wait is bounded separately. Nothing is retried here; a failed
//! step aborts the transaction.

pub mod config;

use std::time::Duration;

use log::{trace, warn};

use crate::constants::DLE_NAK;
use crate::device::handle::Request;
use crate::protocol::dialect::DleConfig;
use crate::protocol::dle;
use crate::protocol::frame::LogicalMessage;
use crate::protocol::parser;
use crate::protocol::source::TransportSource;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

pub fn exchange(
    transport: &mut dyn Transport,
    cfg: &DleConfig,
    req: &Request,
) -> Result<LogicalMessage> {
    let frame = dle::encode(&req.message, cfg)?;
    let step = req.timeout.unwrap_or(cfg.step_timeout);

    // 1
    transport.send(&[cfg.start])?;
    expect(transport, cfg.escape, step)?;

    // 2
    trace!("dle -> {}", bytes_to_hex_spaced(&frame));
    transport.send(&frame)?;

    // 3, 4
    expect(transport, cfg.escape, step)?;
    expect(transport, cfg.start, step)?;

    // 5
    transport.send(&[cfg.escape])?;

    // 6
    let mut src = TransportSource::new(transport, step);
    let decoded = dle::decode(&mut src, cfg);
    trace!("dle <- {}", bytes_to_hex_spaced(src.received()));

    // 7: a complete but corrupt reply still ends the exchange cleanly
    match decoded {
        Ok(msg) => {
            transport.send(&[cfg.escape])?;
            Ok(msg)
        }
        Err(e @ Error::ChecksumMismatch { .. }) => {
            warn!("dle reply failed its checksum: {}", e);
            transport.send(&[cfg.escape])?;
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn expect(transport: &mut dyn Transport, expected: u8, timeout: Duration) -> Result<()> {
    let got = transport.receive_exact(1, timeout)?;
    if got.first() == Some(&DLE_NAK) {
        warn!("reader refused the exchange with NAK");
    }
    parser::expect_byte(&got, 0, expected)
}
