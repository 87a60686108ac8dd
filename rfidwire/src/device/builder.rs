// rfidwire/src/device/builder.rs

use crate::device::handle::Device;
use crate::protocol::dialect::{DialectConfig, RetryPolicy};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    dialect: DialectConfig,
    policy: RetryPolicy,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new(DialectConfig::dle())
    }
}

impl DeviceBuilder {
    pub fn new(dialect: DialectConfig) -> Self {
        Self {
            transport: None,
            dialect,
            policy: RetryPolicy::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Open `path` with the dialect's link settings.
    #[cfg(feature = "serial")]
    pub fn open_serial(self, path: &str) -> Result<Self> {
        let port = crate::transport::SerialTransport::open(path, self.dialect.port_settings())?;
        Ok(self.with_transport(Box::new(port)))
    }

    /// Requires a transport to be provided; otherwise returns
    /// TransportUnavailable.
    pub fn build(self) -> Result<Device> {
        match self.transport {
            Some(t) => Ok(Device::new(t, self.dialect).with_policy(self.policy)),
            None => Err(Error::TransportUnavailable),
        }
    }
}
