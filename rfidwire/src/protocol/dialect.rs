// rfidwire/src/protocol/dialect.rs

use std::time::Duration;

use crate::constants::{DLE, DLE_ETX, DLE_STX, MD_ETX, MD_STX};
use crate::device::{dle::config as dle_config, multidrop::config as md_config};
use crate::types::{DialectKind, PortSettings};

/// Immutable description of the byte-stuffing DLE grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DleConfig {
    pub escape: u8,
    pub start: u8,
    pub end: u8,
    /// Bound of every individual wait step of the handshake.
    pub step_timeout: Duration,
    pub max_frame: usize,
    pub port: PortSettings,
}

impl Default for DleConfig {
    fn default() -> Self {
        Self {
            escape: DLE,
            start: DLE_STX,
            end: DLE_ETX,
            step_timeout: dle_config::STEP_TIMEOUT,
            max_frame: dle_config::MAX_FRAME_LEN,
            port: dle_config::PORT_SETTINGS,
        }
    }
}

/// Immutable description of the fixed-header multi-drop grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiDropConfig {
    pub start: u8,
    pub end: u8,
    /// Whether replies echo the address of the responding reader.
    pub address_echo: bool,
    pub max_frame: usize,
    /// Largest single read issued while collecting a reply body.
    pub max_transfer: usize,
    /// Base wait for a reply; bulk commands scale it.
    pub base_timeout: Duration,
    pub port: PortSettings,
}

impl Default for MultiDropConfig {
    fn default() -> Self {
        Self {
            start: MD_STX,
            end: MD_ETX,
            address_echo: true,
            max_frame: md_config::MAX_FRAME_LEN,
            max_transfer: md_config::MAX_TRANSFER,
            base_timeout: md_config::WAIT_RECEIVE,
            port: md_config::PORT_SETTINGS,
        }
    }
}

/// Wire grammar of one device family. Selected once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialectConfig {
    Dle(DleConfig),
    MultiDrop(MultiDropConfig),
}

impl DialectConfig {
    pub fn dle() -> Self {
        Self::Dle(DleConfig::default())
    }

    pub fn multi_drop() -> Self {
        Self::MultiDrop(MultiDropConfig::default())
    }

    pub fn kind(&self) -> DialectKind {
        match self {
            Self::Dle(_) => DialectKind::Dle,
            Self::MultiDrop(_) => DialectKind::MultiDrop,
        }
    }

    /// Link settings the port should be opened with for this dialect.
    pub fn port_settings(&self) -> PortSettings {
        match self {
            Self::Dle(c) => c.port,
            Self::MultiDrop(c) => c.port,
        }
    }
}

/// How many times the multi-drop engine transmits a request.
///
/// The DLE handshake never retries; its transactions are re-issued by the
/// caller after a purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    pub attempts: u8,
    /// Start another attempt after a checksum failure instead of
    /// reporting it straight away.
    pub retry_on_checksum: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: md_config::MAX_ATTEMPTS,
            retry_on_checksum: false,
        }
    }
}

impl RetryPolicy {
    pub fn attempts(attempts: u8) -> Self {
        Self {
            attempts,
            ..Self::default()
        }
    }

    pub fn with_checksum_retry(mut self) -> Self {
        self.retry_on_checksum = true;
        self
    }
}
