// rfidwire/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "serial")]
pub mod serial;

pub use mock::{MockTransport, Op, SharedMock};
pub use traits::Transport;
#[cfg(feature = "serial")]
pub use serial::{SerialTransport, available_ports};
