// rfidwire/src/ops/mod.rs

//! Typed operations. Each one validates its parameters, runs exactly one
//! transaction on the device and returns the decoded payload.

pub mod key;
pub mod mifare;
pub mod system;

use crate::Error;
use crate::protocol::Response;

/// A reply that decoded fine but does not belong to the operation.
pub(crate) fn unexpected(op: &str, resp: Response) -> Error {
    Error::FrameFormat(format!("{}: unexpected reply {:?}", op, resp))
}
