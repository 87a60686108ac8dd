// rfidwire/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod dialect;
pub mod dle;
pub mod frame;
pub mod multidrop;
pub mod parser;
pub mod responses;
pub mod source;

pub use checksum::{ChecksumState, bcc};
pub use commands::Command;
pub use dialect::{DialectConfig, DleConfig, MultiDropConfig, RetryPolicy};
pub use frame::{LogicalMessage, RawFrame};
pub use responses::{Reply, Response};
pub use source::{ByteSource, SliceSource, TransportSource};
