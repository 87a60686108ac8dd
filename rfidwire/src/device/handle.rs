// rfidwire/src/device/handle.rs

use std::time::Duration;

use log::{debug, warn};

use crate::device::{dle, multidrop};
use crate::protocol::dialect::{DialectConfig, RetryPolicy};
use crate::protocol::frame::LogicalMessage;
use crate::protocol::{Command, Reply, Response};
use crate::transport::Transport;
use crate::types::{DeviceAddress, DialectKind};
use crate::{Error, Result};

/// One logical exchange handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub message: LogicalMessage,
    /// Overrides the dialect's wait bound for this request.
    pub timeout: Option<Duration>,
    /// Compare the echoed address with the one transmitted (multi-drop).
    pub check_address: bool,
    /// Pause before transmitting.
    pub settle: Option<Duration>,
}

impl Request {
    pub fn new(message: LogicalMessage) -> Self {
        Self {
            message,
            timeout: None,
            check_address: true,
            settle: None,
        }
    }

    /// Build the request for `cmd`, applying its wait time, address check
    /// and settle delay. Multi-drop commands need `address`.
    pub fn for_command(
        cmd: &Command,
        address: Option<DeviceAddress>,
        dialect: &DialectConfig,
    ) -> Self {
        let mut message = cmd.message();
        message.address = address.map(|a| a.as_u8());
        let mut req = Self::new(message);
        if let DialectConfig::MultiDrop(cfg) = dialect {
            req.timeout = Some(cmd.wait_time(cfg.base_timeout));
            req.check_address = cmd.checks_address();
            req.settle = cmd.settle_delay();
        }
        req
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn skip_address_check(mut self) -> Self {
        self.check_address = false;
        self
    }

    pub fn settle(mut self, delay: Duration) -> Self {
        self.settle = Some(delay);
        self
    }
}

/// Transaction engine bound to one transport and one dialect.
///
/// After a timeout or a protocol error the line may still carry bytes of
/// the failed exchange. The device then refuses further transactions with
/// [`Error::Desynchronized`] until [`purge`](Self::purge) is called.
pub struct Device {
    transport: Box<dyn Transport>,
    dialect: DialectConfig,
    policy: RetryPolicy,
    stale: bool,
}

impl Device {
    pub fn new(transport: Box<dyn Transport>, dialect: DialectConfig) -> Self {
        Self {
            transport,
            dialect,
            policy: RetryPolicy::default(),
            stale: false,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn dialect(&self) -> &DialectConfig {
        &self.dialect
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// True when the transport must be purged before the next transaction.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Flush both directions of the transport and clear the stale flag.
    pub fn purge(&mut self) -> Result<()> {
        self.transport.purge()?;
        self.stale = false;
        Ok(())
    }

    /// Key-detect line of the transport, outside of any transaction.
    pub fn key_present(&mut self) -> Result<bool> {
        self.transport.key_present()
    }

    /// Run one transaction and return the verified reply.
    pub fn execute(&mut self, req: &Request) -> Result<Reply> {
        if self.stale {
            return Err(Error::Desynchronized);
        }

        let kind = self.dialect.kind();
        debug!(
            "{} transaction: opcode {:#04x}, address {:?}",
            kind, req.message.opcode, req.message.address
        );

        let result = match &self.dialect {
            DialectConfig::Dle(cfg) => dle::exchange(&mut *self.transport, cfg, req),
            DialectConfig::MultiDrop(cfg) => {
                multidrop::exchange(&mut *self.transport, cfg, &self.policy, req)
            }
        };

        match result {
            Ok(msg) => {
                debug!("{} transaction done: {:#04x}", kind, msg.opcode);
                Ok(Reply::new(kind, msg))
            }
            Err(e) => {
                if e.desynchronizes() {
                    warn!("{} transaction failed, purge required: {}", kind, e);
                    self.stale = true;
                } else {
                    debug!("{} transaction failed: {}", kind, e);
                }
                Err(e)
            }
        }
    }

    /// Execute `cmd` and decode its reply.
    pub fn transact(&mut self, cmd: &Command, address: Option<DeviceAddress>) -> Result<Response> {
        if cmd.dialect() != self.dialect.kind() {
            return Err(Error::UnsupportedOperation(format!(
                "{} command on a {} device",
                cmd.dialect(),
                self.dialect.kind()
            )));
        }
        let req = Request::for_command(cmd, address, &self.dialect);
        let reply = self.execute(&req)?;
        Response::decode(cmd, &reply)
    }

    pub fn kind(&self) -> DialectKind {
        self.dialect.kind()
    }

    /// Purge pending I/O and give the transport back.
    pub fn close(mut self) -> Result<Box<dyn Transport>> {
        self.transport.purge()?;
        Ok(self.transport)
    }
}
