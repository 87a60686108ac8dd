// rfidwire/src/lib.rs

//! rfidwire
//!
//! Pure Rust driver for serial RFID readers: EKS key readers speaking the
//! byte-stuffed DLE handshake and iDTRONIC Mifare readers on a multi-drop
//! bus.

pub mod constants;
pub mod device;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod protocol;
pub mod status;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
