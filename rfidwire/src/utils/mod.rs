//! Small helpers shared across the crate: hex formatting for frame traces
//! and deadline arithmetic for timeout-bounded reads.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
