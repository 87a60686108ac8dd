// rfidwire/src/transport/traits.rs

use std::time::Duration;

use crate::{Error, Result};

/// Transport trait abstracts the half-duplex byte channel away from the
/// protocol engines.
///
/// A transport is owned by exactly one `Device`; the protocols carry no
/// request ids, so two transactions must never interleave on one channel.
pub trait Transport {
    /// Write all bytes to the line.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Block until exactly `len` bytes have been received or `timeout`
    /// elapses. The timeout bounds this call only; on expiry the call
    /// returns [`Error::Timeout`] and whatever arrived is left for the
    /// next purge.
    fn receive_exact(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>>;

    /// Number of received bytes waiting to be consumed.
    fn bytes_available(&mut self) -> Result<usize>;

    /// Discard every buffered byte in both directions.
    fn purge(&mut self) -> Result<()>;

    /// Hardware handshake line reporting whether a key sits in the reader.
    fn key_present(&mut self) -> Result<bool> {
        Err(Error::UnsupportedOperation(
            "transport has no key-detect line".into(),
        ))
    }

    /// Wait before the next step. Readers that need a settle delay before
    /// accepting a command go through here so test transports can skip it.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
