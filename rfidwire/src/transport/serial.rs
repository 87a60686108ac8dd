// rfidwire/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use log::debug;
use serialport::{ClearBuffer, DataBits, FlowControl, SerialPort, StopBits};

use crate::transport::traits::Transport;
use crate::types::{Parity, PortSettings};
use crate::utils::Deadline;
use crate::{Error, Result};

/// Upper bound for a single blocking read so a deadline is re-checked
/// regularly even when the driver ignores short timeouts.
const READ_SLICE: Duration = Duration::from_millis(50);

/// List the serial port identifiers available on this machine.
pub fn available_ports() -> Result<Vec<String>> {
    Ok(serialport::available_ports()?
        .into_iter()
        .map(|p| p.port_name)
        .collect())
}

/// Serial port transport (8 data bits, one stop bit, no flow control).
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialTransport {
    /// Open and configure `path`. Stale input from before the open is
    /// discarded.
    pub fn open(path: &str, settings: PortSettings) -> Result<Self> {
        let parity = match settings.parity {
            Parity::None => serialport::Parity::None,
            Parity::Even => serialport::Parity::Even,
        };
        let port = serialport::new(path, settings.baud_rate)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(parity)
            .flow_control(FlowControl::None)
            .timeout(READ_SLICE)
            .open()?;
        port.clear(ClearBuffer::All)?;
        debug!("opened {} at {}", path, settings);
        Ok(Self {
            port,
            name: path.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Purge pending input and release the port.
    pub fn close(self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        debug!("closed {}", self.name);
        Ok(())
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive_exact(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        let deadline = Deadline::after(timeout);
        let mut out = vec![0u8; len];
        let mut filled = 0usize;
        while filled < len {
            let remaining = deadline.remaining();
            if remaining.is_zero() {
                return Err(Error::Timeout);
            }
            self.port.set_timeout(remaining.min(READ_SLICE))?;
            match self.port.read(&mut out[filled..]) {
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::TimedOut => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(out)
    }

    fn bytes_available(&mut self) -> Result<usize> {
        Ok(self.port.bytes_to_read()? as usize)
    }

    fn purge(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::All)?;
        Ok(())
    }

    /// EKS readers raise CTS while a key is inserted.
    fn key_present(&mut self) -> Result<bool> {
        Ok(self.port.read_clear_to_send()?)
    }
}
