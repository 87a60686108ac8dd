// rfidwire/src/error.rs

use thiserror::Error;

/// 共通エラー型
///
/// Every transaction resolves to either a decoded reply or one of these
/// variants. Device status codes are carried verbatim and never interpreted.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no transport bound")]
    TransportUnavailable,

    #[error("transport must be purged before the next transaction")]
    Desynchronized,

    #[error("operation timed out")]
    Timeout,

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("address mismatch: sent {sent:#04x}, reply from {received:#04x}")]
    AddressMismatch { sent: u8, received: u8 },

    #[error("unexpected handshake byte: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedByte { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("parameter out of range: {0}")]
    OutOfRange(String),

    #[error("device status {code:#04x}")]
    DeviceStatus { code: u8, detail: Option<u8> },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A stored status code outside every known range.
    #[error("unknown status code {0}")]
    UnknownStatus(u32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

impl Error {
    /// True for handshake and framing violations (the ProtocolError class).
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedByte { .. } | Error::FrameFormat(_) | Error::InvalidLength { .. }
        )
    }

    /// True when the byte stream may hold stale data and the transport has
    /// to be purged before another transaction can run.
    pub fn desynchronizes(&self) -> bool {
        matches!(self, Error::Timeout) || self.is_protocol_error()
    }

    /// Map onto the numeric status convention callers use.
    pub fn status_code(&self) -> u32 {
        crate::status::code_for(self)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
