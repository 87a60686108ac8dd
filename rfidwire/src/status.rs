// rfidwire/src/status.rs

//! Numeric status codes for callers that store or forward plain integers.
//!
//! `0` is success. Engine failures use small fixed codes; device statuses
//! are passed through unchanged, so a device code may coincide with an
//! engine code. [`from_code`] resolves such values to the engine error,
//! including 0xF1 (I/O) and 0xF2 (protocol), so `from_code(code_for(e))`
//! yields the class of `e` rather than `e` itself.

use crate::Error;

pub const SUCCESS: u32 = 0;
pub const OUT_OF_RANGE: u32 = 1;
/// Older callers report checksum failures as 2.
pub const CHECKSUM_LEGACY: u32 = 2;
pub const NO_TRANSPORT: u32 = 3;
pub const TIMEOUT: u32 = 4;
pub const ADDRESS_MISMATCH: u32 = 5;
pub const CHECKSUM: u32 = 7;

// EKS device statuses
pub const EKS_NO_KEY: u8 = 0x02;
pub const EKS_PARITY: u8 = 0x03;
pub const EKS_WRITE_BLOCKSIZE: u8 = 0x06;
pub const EKS_READ_ONLY_R_KEYS: u8 = 0x17;
pub const EKS_READ_ONLY_RW_KEYS: u8 = 0x18;
/// Any status in 0x40..=0x4F.
pub const EKS_UNKNOWN: u8 = 0x40;
pub const EKS_WRITE_PROTECTED: u8 = 0x50;
pub const EKS_IO: u8 = 0xF1;
pub const EKS_COMMUNICATION: u8 = 0xF2;
pub const EKS_CONNECTION: u8 = 0xF3;

/// Map an error onto the caller status convention.
pub fn code_for(err: &Error) -> u32 {
    match err {
        Error::OutOfRange(_) => OUT_OF_RANGE,
        Error::ChecksumMismatch { .. } => CHECKSUM,
        Error::TransportUnavailable | Error::Desynchronized => NO_TRANSPORT,
        Error::Timeout => TIMEOUT,
        Error::AddressMismatch { .. } => ADDRESS_MISMATCH,
        Error::DeviceStatus { code, .. } => u32::from(*code),
        Error::UnexpectedByte { .. }
        | Error::FrameFormat(_)
        | Error::InvalidLength { .. }
        | Error::UnsupportedOperation(_) => u32::from(EKS_COMMUNICATION),
        Error::Io(_) => u32::from(EKS_IO),
        Error::UnknownStatus(code) => *code,
        #[cfg(feature = "serial")]
        Error::Serial(_) => u32::from(EKS_IO),
    }
}

/// Collapse a transaction result into a status code.
pub fn code_of<T>(result: &crate::Result<T>) -> u32 {
    match result {
        Ok(_) => SUCCESS,
        Err(e) => code_for(e),
    }
}

/// Reverse lookup of a stored status code. `None` means success.
pub fn from_code(code: u32) -> Option<Error> {
    match code {
        SUCCESS => None,
        OUT_OF_RANGE => Some(Error::OutOfRange(format!("status {}", code))),
        CHECKSUM | CHECKSUM_LEGACY => Some(Error::ChecksumMismatch {
            expected: 0,
            actual: 0,
        }),
        NO_TRANSPORT => Some(Error::TransportUnavailable),
        TIMEOUT => Some(Error::Timeout),
        ADDRESS_MISMATCH => Some(Error::AddressMismatch {
            sent: 0,
            received: 0,
        }),
        c if c == u32::from(EKS_IO) => Some(Error::Io(std::io::Error::other(format!(
            "status {:#04x}",
            c
        )))),
        c if c == u32::from(EKS_COMMUNICATION) => {
            Some(Error::FrameFormat(format!("status {:#04x}", c)))
        }
        other => Some(match u8::try_from(other) {
            Ok(code) => Error::DeviceStatus { code, detail: None },
            Err(_) => Error::UnknownStatus(other),
        }),
    }
}

/// Human readable name of an EKS device status.
pub fn eks_status_name(code: u8) -> &'static str {
    match code {
        0x00 => "success",
        EKS_NO_KEY => "no key detected",
        EKS_PARITY => "parity error",
        EKS_WRITE_BLOCKSIZE => "invalid write block size",
        EKS_READ_ONLY_R_KEYS => "reader accepts read-only keys only",
        EKS_READ_ONLY_RW_KEYS => "reader accepts read/write keys only",
        0x40..=0x4F => "unknown error",
        EKS_WRITE_PROTECTED => "key is write protected",
        EKS_IO => "i/o error",
        EKS_COMMUNICATION => "communication error",
        EKS_CONNECTION => "connection error",
        _ => "unrecognised status",
    }
}
