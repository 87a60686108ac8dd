// rfidwire/src/prelude.rs

pub use crate::device::{Device, DeviceBuilder, Request};
pub use crate::protocol::{Command, DialectConfig, Reply, Response, RetryPolicy};
pub use crate::transport::Transport;
pub use crate::{
    BlockCount, DeviceAddress, DialectKind, Error, KeyRange, MifareKey, MifareMode, Parity,
    PortSettings, Result, SerialNumber, SnrControl, ValueAmount,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
