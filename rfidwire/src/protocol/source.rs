// rfidwire/src/protocol/source.rs

use std::time::Duration;

use crate::transport::Transport;
use crate::{Error, Result};

/// Pull-based byte stream the decoders consume from.
pub trait ByteSource {
    /// Return exactly `n` bytes, or an error if they never arrive.
    fn take(&mut self, n: usize) -> Result<Vec<u8>>;

    fn take_byte(&mut self) -> Result<u8> {
        self.take(1)?.first().copied().ok_or(Error::InvalidLength {
            expected: 1,
            actual: 0,
        })
    }
}

/// Decoding straight from a transport; every `take` is its own wait step.
pub struct TransportSource<'a> {
    transport: &'a mut dyn Transport,
    timeout: Duration,
    received: Vec<u8>,
}

impl<'a> TransportSource<'a> {
    pub fn new(transport: &'a mut dyn Transport, timeout: Duration) -> Self {
        Self {
            transport,
            timeout,
            received: Vec::new(),
        }
    }

    /// Everything consumed so far, as it appeared on the wire.
    pub fn received(&self) -> &[u8] {
        &self.received
    }
}

impl ByteSource for TransportSource<'_> {
    fn take(&mut self, n: usize) -> Result<Vec<u8>> {
        let bytes = self.transport.receive_exact(n, self.timeout)?;
        self.received.extend_from_slice(&bytes);
        Ok(bytes)
    }
}

/// In-memory source. Running dry behaves like a silent device.
#[derive(Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn take(&mut self, n: usize) -> Result<Vec<u8>> {
        if self.remaining() < n {
            return Err(Error::Timeout);
        }
        let out = self.data[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(out)
    }
}
