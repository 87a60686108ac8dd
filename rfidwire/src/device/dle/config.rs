//! DLE (EKS key reader) configuration

use std::time::Duration;

use crate::types::{Parity, PortSettings};

/// Bound of each handshake wait step
pub const STEP_TIMEOUT: Duration = Duration::from_millis(2000);

/// Largest frame the reader buffers, escapes and trailer included
pub const MAX_FRAME_LEN: usize = 256;

/// Addressable key memory in bytes
pub const KEY_MEMORY_SIZE: usize = 256;

/// Body bytes around the data of a key read reply or key write request:
/// length, opcode, kind, bank (2), offset, length.
pub const KEY_FRAME_OVERHEAD: usize = 7;

/// Largest data region a single key read or write can move. The frame body
/// must fit one length byte.
pub const MAX_DATA_LEN: usize = 255 - KEY_FRAME_OVERHEAD;

/// 9600 baud, 8E1
pub const PORT_SETTINGS: PortSettings = PortSettings::new(9600, Parity::Even);
