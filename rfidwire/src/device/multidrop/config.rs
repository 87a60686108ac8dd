//! Multi-drop (iDTRONIC Mifare reader) configuration

use std::time::Duration;

use crate::types::{Parity, PortSettings};

/// Base wait for a reply
pub const WAIT_RECEIVE: Duration = Duration::from_millis(2000);

/// Extra wait granted to reader management commands
pub const SYSTEM_WAIT_EXTRA: Duration = Duration::from_millis(10);

/// Extra wait granted to bulk reads on top of the scaled base
pub const READ_WAIT_EXTRA: Duration = Duration::from_millis(30);

/// Transmissions per transaction
pub const MAX_ATTEMPTS: u8 = 1;

/// Largest frame: one length byte of payload plus framing
pub const MAX_FRAME_LEN: usize = 260;

/// Largest single read while collecting a reply
pub const MAX_TRANSFER: usize = 1024;

/// Delay before GetVersion is transmitted
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Block limits of bulk commands
pub const MAX_READ_BLOCKS: u8 = 15;
pub const MAX_WRITE_BLOCKS: u8 = 12;

/// 9600 baud, 8N1
pub const PORT_SETTINGS: PortSettings = PortSettings::new(9600, Parity::None);

pub fn system_wait(base: Duration) -> Duration {
    base + SYSTEM_WAIT_EXTRA
}

/// Reads wait one more base interval per 16 blocks.
pub fn read_wait(base: Duration, blocks: u8) -> Duration {
    base + base * u32::from(blocks >> 4) + READ_WAIT_EXTRA
}

/// Writes wait one base interval per block on top of the base.
pub fn write_wait(base: Duration, blocks: u8) -> Duration {
    base + base * u32::from(blocks)
}
