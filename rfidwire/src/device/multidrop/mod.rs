//! Multi-drop bus engine (iDTRONIC Mifare readers)
//!
//! Each attempt transmits the whole frame and waits for one complete reply.
//! The echoed address is compared before the checksum, so a reply from the
//! wrong reader is reported as such even when it arrived corrupted.

pub mod config;

use log::{trace, warn};

use crate::device::handle::Request;
use crate::protocol::dialect::{MultiDropConfig, RetryPolicy};
use crate::protocol::frame::LogicalMessage;
use crate::protocol::multidrop;
use crate::protocol::parser;
use crate::protocol::source::TransportSource;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

pub fn exchange(
    transport: &mut dyn Transport,
    cfg: &MultiDropConfig,
    policy: &RetryPolicy,
    req: &Request,
) -> Result<LogicalMessage> {
    let frame = multidrop::encode(&req.message, cfg)?;
    let sent_address = parser::byte_at(&frame, 1)?;
    let wait = req.timeout.unwrap_or(cfg.base_timeout);
    let attempts = policy.attempts.max(1);

    for attempt in 1..=attempts {
        if attempt > 1 {
            // drop whatever the failed attempt left behind
            transport.purge()?;
        }
        if let Some(delay) = req.settle {
            transport.pause(delay);
        }

        trace!("md -> {}", bytes_to_hex_spaced(&frame));
        transport.send(&frame)?;

        let mut src = TransportSource::new(transport, wait);
        let read = multidrop::read_frame(&mut src, cfg);
        trace!("md <- {}", bytes_to_hex_spaced(src.received()));

        let raw = match read {
            Ok(raw) => raw,
            Err(e @ Error::Timeout) | Err(e @ Error::FrameFormat(_)) => {
                warn!("attempt {}/{} failed: {}", attempt, attempts, e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if req.check_address && cfg.address_echo {
            let received = multidrop::reply_address(&raw)?;
            if received != sent_address {
                warn!(
                    "reply from {:#04x} to a frame sent to {:#04x}",
                    received, sent_address
                );
                return Err(Error::AddressMismatch {
                    sent: sent_address,
                    received,
                });
            }
        }

        match multidrop::unpack(&raw, cfg) {
            Ok(msg) => return Ok(msg),
            Err(e @ Error::ChecksumMismatch { .. }) if policy.retry_on_checksum => {
                warn!("attempt {}/{} failed: {}", attempt, attempts, e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(Error::Timeout)
}
