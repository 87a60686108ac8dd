// rfidwire/src/protocol/checksum.rs

/// XOR fold over `bytes` (block check character).
pub fn bcc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Running XOR accumulator fed byte by byte while a frame is built or
/// consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecksumState(u8);

impl ChecksumState {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn push(&mut self, b: u8) {
        self.0 ^= b;
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        self.0 ^= bcc(bytes);
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}
